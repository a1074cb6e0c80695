#[cfg(feature = "ssr")]
use super::entities::{Admin, Signup};
#[cfg(feature = "ssr")]
use sqlx::Row;

#[cfg(feature = "ssr")]
type DbResult<T> = Result<T, sqlx::Error>;

/// Creates the tables on first run and seeds the admin account from
/// `ADMIN_USERNAME` / `ADMIN_PASSWORD` if it does not exist yet.
#[cfg(feature = "ssr")]
pub async fn ensure_schema() -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS signups (
            id SERIAL PRIMARY KEY,
            day TEXT NOT NULL,
            hour INTEGER NOT NULL,
            name TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS admins (
            id SERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
    let existing = sqlx::query("SELECT id FROM admins WHERE username = $1")
        .bind(&username)
        .fetch_optional(pool)
        .await?;
    if existing.is_none() {
        let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
        let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
            .map_err(|e| sqlx::Error::Protocol(format!("bcrypt failure: {e}")))?;
        sqlx::query("INSERT INTO admins (username, password_hash) VALUES ($1, $2)")
            .bind(&username)
            .bind(&hash)
            .execute(pool)
            .await?;
        tracing::info!("Seeded admin account '{username}'");
    }

    Ok(())
}

/// All signups, oldest first so grid cells list names in signup order.
#[cfg(feature = "ssr")]
pub async fn list_signups() -> DbResult<Vec<Signup>> {
    let pool = crate::db::pool::get_pool();

    let rows = sqlx::query("SELECT id, day, hour, name FROM signups ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| Signup {
            id: row.get("id"),
            day: row.get("day"),
            hour: row.get("hour"),
            name: row.get("name"),
        })
        .collect())
}

/// Number of signups already in a slot.
#[cfg(feature = "ssr")]
pub async fn count_in_slot(day: &str, hour: i32) -> DbResult<i64> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query("SELECT COUNT(*) AS n FROM signups WHERE day = $1 AND hour = $2")
        .bind(day)
        .bind(hour)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("n"))
}

/// Inserts one row per attendee name.
#[cfg(feature = "ssr")]
pub async fn insert_signups(day: &str, hour: i32, names: &[String]) -> DbResult<()> {
    let pool = crate::db::pool::get_pool();

    for name in names {
        sqlx::query("INSERT INTO signups (day, hour, name) VALUES ($1, $2, $3)")
            .bind(day)
            .bind(hour)
            .bind(name)
            .execute(pool)
            .await?;
    }

    Ok(())
}

/// Removes a signup by id; returns whether a row was deleted.
#[cfg(feature = "ssr")]
pub async fn delete_signup_by_id(signup_id: i32) -> DbResult<bool> {
    let pool = crate::db::pool::get_pool();

    let result = sqlx::query("DELETE FROM signups WHERE id = $1")
        .bind(signup_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// The stored admin credential, if the account exists.
#[cfg(feature = "ssr")]
pub async fn get_admin(username: &str) -> DbResult<Option<Admin>> {
    let pool = crate::db::pool::get_pool();

    let row = sqlx::query("SELECT username, password_hash FROM admins WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| Admin {
        username: row.get("username"),
        password_hash: row.get("password_hash"),
    }))
}
