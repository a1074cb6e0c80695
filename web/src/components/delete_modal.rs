use leptos::prelude::*;
use thaw::*;

use crate::server::{delete_signup, DeleteOutcome, DeleteSignupRequest};
use crate::utils::hours::fmt_hour;

/// The signup a delete control was activated for.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteTarget {
    pub signup_id: i32,
    pub day: String,
    pub hour: u8,
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

/// Secondary modal for removing an existing signup. The deletion request
/// resolves one of three ways: deleted (reload), forbidden (wrong
/// password alert), or any other failure (generic alert). Every outcome
/// closes the modal and is reported exactly once.
#[component]
pub fn DeleteModal(
    show: RwSignal<bool>,
    target: RwSignal<Option<DeleteTarget>>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let password = RwSignal::new(String::new());
    let is_deleting = RwSignal::new(false);

    let delete_action = Action::new(|request: &DeleteSignupRequest| {
        let request = request.clone();
        async move { delete_signup(request).await }
    });

    let handle_submit = move || {
        if let Some(target_data) = target.get_untracked() {
            is_deleting.set(true);
            delete_action.dispatch(DeleteSignupRequest {
                signup_id: target_data.signup_id,
                password: password.get_untracked(),
            });
        }
    };

    let close = move || {
        password.set(String::new());
        target.set(None);
        on_close();
    };

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            is_deleting.set(false);
            match result {
                Ok(DeleteOutcome::Deleted) => reload_page(),
                Ok(DeleteOutcome::Forbidden) => {
                    close();
                    alert("Wrong password. The signup was not removed.");
                }
                Err(_) => {
                    close();
                    alert("Could not remove the signup. Please try again.");
                }
            }
        }
    });

    view! {
        <div
            id="delete-modal"
            class=move || {
                if show.get() { "delete-modal-overlay show" } else { "delete-modal-overlay" }
            }
        >
            <div class="delete-modal">
                {move || {
                    target
                        .get()
                        .map(|target_data| {
                            let subtitle = format!(
                                "{} · {}",
                                target_data.day,
                                fmt_hour(target_data.hour),
                            );
                            view! {
                                <div class="modal-header">
                                    <h2>"Remove signup"</h2>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| close()
                                        class="close-button"
                                    >
                                        "×"
                                    </Button>
                                </div>
                                <p id="delete-modal-subtitle" class="modal-subtitle">{subtitle}</p>

                                <form
                                    class="delete-form"
                                    on:submit=move |ev| {
                                        ev.prevent_default();
                                        handle_submit();
                                    }
                                >
                                    <input
                                        type="hidden"
                                        id="delete-signup-id"
                                        name="signup_id"
                                        value=target_data.signup_id.to_string()
                                    />

                                    <div class="field">
                                        <label for="delete-password">"Password"</label>
                                        <Input
                                            id="delete-password"
                                            input_type=InputType::Password
                                            placeholder="Admin password"
                                            value=password
                                        />
                                    </div>

                                    <div class="form-actions">
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| close()
                                        >
                                            "Cancel"
                                        </Button>
                                        <Button
                                            button_type=ButtonType::Submit
                                            appearance=ButtonAppearance::Primary
                                            disabled=Signal::derive(move || is_deleting.get())
                                            loading=is_deleting
                                        >
                                            {move || {
                                                if is_deleting.get() { "Removing..." } else { "Remove" }
                                            }}
                                        </Button>
                                    </div>
                                </form>
                            }
                        })
                }}
            </div>
        </div>
    }
}
