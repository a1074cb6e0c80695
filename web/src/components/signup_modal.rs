use leptos::prelude::*;
use shared_types::{AttendeeName, NewSignup, MAX_PARTY};
use thaw::*;

use crate::components::attendee_fields::{fresh_fields, AttendeeFields, NameFields};
use crate::components::ErrorView;
use crate::server::submit_signup;
use crate::utils::hours::fmt_hour;

/// The slot the signup modal is currently editing, with the effective
/// party-size cap (`min(MAX_PARTY, remaining)`) computed at click time.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedSlot {
    pub day: String,
    pub hour: u8,
    pub max_people: u32,
}

/// Party size after clamping to the slot's cap.
pub(crate) fn clamp_party(selected: u32, max_people: u32) -> u32 {
    selected.min(max_people).max(1)
}

/// Whether a party-size option is selectable for the given cap.
pub(crate) fn option_disabled(value: u32, max_people: u32) -> bool {
    value > max_people
}

#[component]
pub fn SignupModal(
    show: RwSignal<bool>,
    slot: RwSignal<Option<SelectedSlot>>,
    on_close: impl Fn() + 'static + Copy + Send + Sync,
) -> impl IntoView {
    let party_size = RwSignal::new(1u32);
    let fields: RwSignal<NameFields> = RwSignal::new(fresh_fields(1));
    let is_submitting = RwSignal::new(false);
    let submission_error = RwSignal::new(None::<String>);

    // Every open re-applies the cap and regenerates the name fields, so a
    // previous open with a different cap leaves nothing stale behind.
    Effect::new(move |_| {
        if let Some(selected) = slot.get() {
            let clamped = clamp_party(party_size.get_untracked(), selected.max_people);
            party_size.set(clamped);
            fields.set(fresh_fields(clamped));
            submission_error.set(None);
        }
    });

    let submit_action = Action::new(|request: &NewSignup| {
        let request = request.clone();
        async move { submit_signup(request).await }
    });

    let handle_submit = move || {
        if let Some(selected) = slot.get_untracked() {
            is_submitting.set(true);
            submission_error.set(None);

            let attendees: Vec<AttendeeName> = fields
                .get_untracked()
                .iter()
                .map(|(first, last)| AttendeeName {
                    first: first.get_untracked(),
                    last: last.get_untracked(),
                })
                .collect();

            submit_action.dispatch(NewSignup {
                day: selected.day,
                hour: selected.hour,
                attendees,
            });
        }
    };

    // The server confirmed or rejected the signup
    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            is_submitting.set(false);
            match result {
                Ok(()) => {
                    // Fresh load is the only way to see updated capacity
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().reload();
                    }
                }
                Err(e) => {
                    submission_error.set(Some(format!("Failed to sign up: {}", e)));
                }
            }
        }
    });

    let is_form_valid = move || {
        !fields.get().is_empty()
            && fields
                .get()
                .iter()
                .all(|(first, last)| {
                    !first.get().trim().is_empty() && !last.get().trim().is_empty()
                })
    };

    let is_button_disabled = Memo::new(move |_| !is_form_valid() || is_submitting.get());

    view! {
        <div
            id="modal"
            class=move || {
                if show.get() { "signup-modal-overlay show" } else { "signup-modal-overlay" }
            }
        >
            <div class="signup-modal">
                {move || {
                    slot.get()
                        .map(|selected| {
                            let max_people = selected.max_people;
                            let day = selected.day.clone();
                            let form_day = selected.day.clone();
                            let hour = selected.hour;
                            view! {
                                <div class="modal-header">
                                    <h2 id="modal-title">{format!("Sign up for {day}")}</h2>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| on_close()
                                        class="close-button"
                                    >
                                        "×"
                                    </Button>
                                </div>
                                <p id="modal-subtitle" class="modal-subtitle">{fmt_hour(hour)}</p>

                                <form
                                    class="signup-form"
                                    on:submit=move |ev| {
                                        ev.prevent_default();
                                        if is_form_valid() {
                                            handle_submit();
                                        }
                                    }
                                >
                                    <input type="hidden" id="form-day" name="day" value=form_day/>
                                    <input
                                        type="hidden"
                                        id="form-hour"
                                        name="hour"
                                        value=hour.to_string()
                                    />

                                    <div class="field">
                                        <label for="people-count">"Number of people"</label>
                                        <select
                                            id="people-count"
                                            name="people_count"
                                            prop:value=move || party_size.get().to_string()
                                            on:change=move |ev| {
                                                let requested = event_target_value(&ev)
                                                    .parse::<u32>()
                                                    .unwrap_or(1);
                                                let clamped = clamp_party(requested, max_people);
                                                party_size.set(clamped);
                                                fields.set(fresh_fields(clamped));
                                            }
                                        >
                                            {(1..=MAX_PARTY)
                                                .map(|value| {
                                                    view! {
                                                        <option
                                                            value=value.to_string()
                                                            disabled=option_disabled(value, max_people)
                                                            selected=move || party_size.get() == value
                                                        >
                                                            {value.to_string()}
                                                        </option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </div>

                                    <AttendeeFields fields=fields/>

                                    {move || {
                                        submission_error
                                            .get()
                                            .map(|error| {
                                                view! { <ErrorView message=error/> }
                                            })
                                    }}

                                    <div class="form-actions">
                                        <Button
                                            appearance=ButtonAppearance::Secondary
                                            on_click=move |_| on_close()
                                        >
                                            "Cancel"
                                        </Button>
                                        <Button
                                            button_type=ButtonType::Submit
                                            appearance=ButtonAppearance::Primary
                                            disabled=Signal::from(is_button_disabled)
                                            loading=is_submitting
                                        >
                                            {move || {
                                                if is_submitting.get() { "Signing up..." } else { "Sign Up" }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_leaves_in_range_selection_alone() {
        assert_eq!(clamp_party(2, 4), 2);
        assert_eq!(clamp_party(4, 4), 4);
    }

    #[test]
    fn clamp_pulls_selection_down_to_cap() {
        assert_eq!(clamp_party(4, 2), 2);
        assert_eq!(clamp_party(3, 1), 1);
    }

    #[test]
    fn clamp_never_drops_below_one() {
        assert_eq!(clamp_party(0, 4), 1);
    }

    #[test]
    fn options_above_cap_are_disabled() {
        assert!(!option_disabled(1, 2));
        assert!(!option_disabled(2, 2));
        assert!(option_disabled(3, 2));
        assert!(option_disabled(4, 2));
    }

    #[test]
    fn reopening_with_full_cap_re_enables_everything() {
        // Same predicate evaluated against the new cap, so no option
        // stays disabled from an earlier, smaller cap.
        for value in 1..=MAX_PARTY {
            assert!(!option_disabled(value, MAX_PARTY));
        }
    }
}
