use leptos::prelude::*;
use thaw::{MessageBar, MessageBarBody, MessageBarIntent};

/// Inline error banner for schedule-load and signup-submit failures.
#[component]
pub fn ErrorView(message: String) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            <MessageBarBody>{message}</MessageBarBody>
        </MessageBar>
    }
}
