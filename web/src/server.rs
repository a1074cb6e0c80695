use leptos::prelude::*;
use leptos::server;
use serde::{Deserialize, Serialize};
use shared_types::{NewSignup, WeekSchedule};

#[cfg(feature = "ssr")]
use crate::db::repository::{
    count_in_slot, delete_signup_by_id, get_admin, insert_signups, list_signups,
};
#[cfg(feature = "ssr")]
use shared_types::{build_week, hour_available, SignupRow, CAPACITY, DAYS};

/// How a deletion attempt resolved. `Forbidden` is a normal outcome, not
/// a transport error; the caller branches on it separately from `Err`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Forbidden,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DeleteSignupRequest {
    pub signup_id: i32,
    pub password: String,
}

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
enum SignupError {
    #[error("Invalid slot")]
    InvalidSlot,
    #[error("This slot is not available")]
    SlotUnavailable,
    #[error("This slot is full")]
    SlotFull,
    #[error("At least one name is required")]
    NoNames,
}

#[server]
pub async fn get_week_schedule() -> Result<WeekSchedule, ServerFnError> {
    let signups = list_signups()
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))?;

    let rows: Vec<SignupRow> = signups
        .into_iter()
        .map(|s| SignupRow {
            id: s.id,
            day: s.day,
            hour: s.hour as u8,
            name: s.name,
        })
        .collect();

    Ok(build_week(&rows))
}

#[server]
pub async fn submit_signup(request: NewSignup) -> Result<(), ServerFnError> {
    if !DAYS.contains(&request.day.as_str()) {
        return Err(ServerFnError::new(SignupError::InvalidSlot.to_string()));
    }
    if !hour_available(&request.day, request.hour) {
        return Err(ServerFnError::new(SignupError::SlotUnavailable.to_string()));
    }

    let names: Vec<String> = request
        .attendees
        .iter()
        .map(|a| a.full_name())
        .filter(|n| !n.is_empty())
        .collect();
    if names.is_empty() {
        return Err(ServerFnError::new(SignupError::NoNames.to_string()));
    }

    let occupied = count_in_slot(&request.day, request.hour as i32)
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))?;
    let remaining = (CAPACITY as i64 - occupied).max(0) as usize;
    if remaining == 0 {
        return Err(ServerFnError::new(SignupError::SlotFull.to_string()));
    }

    // Capacity may have shrunk since the page rendered; take what fits.
    let names_to_add = &names[..names.len().min(remaining)];
    insert_signups(&request.day, request.hour as i32, names_to_add)
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))?;

    tracing::debug!(
        day = %request.day,
        hour = request.hour,
        count = names_to_add.len(),
        "Recorded signup"
    );
    Ok(())
}

#[server]
pub async fn delete_signup(request: DeleteSignupRequest) -> Result<DeleteOutcome, ServerFnError> {
    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let admin = get_admin(&username)
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))?;

    let verified = match admin {
        Some(admin) => bcrypt::verify(&request.password, &admin.password_hash)
            .map_err(|e| ServerFnError::new(format!("Credential check failed: {}", e)))?,
        None => false,
    };
    if !verified {
        tracing::warn!(signup_id = request.signup_id, "Rejected deletion attempt");
        return Ok(DeleteOutcome::Forbidden);
    }

    delete_signup_by_id(request.signup_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Database error: {}", e)))?;

    tracing::debug!(signup_id = request.signup_id, "Deleted signup");
    Ok(DeleteOutcome::Deleted)
}
