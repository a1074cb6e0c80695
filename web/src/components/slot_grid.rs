use leptos::prelude::*;
use shared_types::{WeekSchedule, MAX_PARTY};

use crate::components::{DeleteTarget, SelectedSlot};
use crate::utils::hours::fmt_hour;

/// Effective party-size cap for a slot, or `None` when activating the
/// slot must be a no-op (unavailable or no capacity left).
pub(crate) fn party_cap(available: bool, remaining: u32) -> Option<u32> {
    if available && remaining > 0 {
        Some(remaining.min(MAX_PARTY))
    } else {
        None
    }
}

/// One panel of slot buttons per day; only the active day's panel is
/// visible. Slot state is re-checked inside the click handler, so a slot
/// that rendered clickable but has no capacity still never opens the
/// modal. Each listed signup carries its own delete control.
#[component]
pub fn SlotGrid(
    schedule: WeekSchedule,
    active_day: RwSignal<String>,
    on_slot_selected: impl Fn(SelectedSlot) + 'static + Copy + Send + Sync,
    on_delete_selected: impl Fn(DeleteTarget) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div id="signup-grid" class="signup-grid">
            {schedule
                .days
                .into_iter()
                .map(|day_schedule| {
                    let day = day_schedule.day.clone();
                    let panel_day = day.clone();
                    view! {
                        <section
                            class="day-panel"
                            role="tabpanel"
                            data-day=day.clone()
                            hidden=move || active_day.get() != panel_day
                        >
                            {day_schedule
                                .slots
                                .into_iter()
                                .map(|slot| {
                                    let slot_day = slot.day.clone();
                                    let btn_day = slot.day.clone();
                                    let hour = slot.hour;
                                    let available = slot.available;
                                    let remaining = slot.remaining;
                                    let disabled = !available;
                                    view! {
                                        <div class="slot-row">
                                            <button
                                                class="slot"
                                                disabled=disabled
                                                aria-disabled=if disabled { "true" } else { "false" }
                                                data-day=btn_day
                                                data-hour=hour.to_string()
                                                data-available=available.to_string()
                                                data-remaining=remaining.to_string()
                                                on:click=move |_| {
                                                    if let Some(cap) = party_cap(available, remaining) {
                                                        on_slot_selected(SelectedSlot {
                                                            day: slot_day.clone(),
                                                            hour,
                                                            max_people: cap,
                                                        });
                                                    }
                                                }
                                            >
                                                <span class="slot-hour">{fmt_hour(hour)}</span>
                                                <span class="slot-remaining">
                                                    {if available {
                                                        format!("{remaining} left")
                                                    } else {
                                                        "Closed".to_string()
                                                    }}
                                                </span>
                                            </button>
                                            <ul class="slot-entries">
                                                {slot
                                                    .entries
                                                    .iter()
                                                    .map(|entry| {
                                                        let signup_id = entry.id;
                                                        let entry_day = slot.day.clone();
                                                        let attr_day = slot.day.clone();
                                                        view! {
                                                            <li class="slot-entry">
                                                                <span class="entry-name">{entry.name.clone()}</span>
                                                                <button
                                                                    class="entry-delete"
                                                                    data-signup-id=signup_id.to_string()
                                                                    data-day=attr_day
                                                                    data-hour=hour.to_string()
                                                                    aria-label="Remove signup"
                                                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                                                        ev.stop_propagation();
                                                                        on_delete_selected(DeleteTarget {
                                                                            signup_id,
                                                                            day: entry_day.clone(),
                                                                            hour,
                                                                        });
                                                                    }
                                                                >
                                                                    "×"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </section>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_slots_never_open_the_modal() {
        assert_eq!(party_cap(false, 3), None);
        assert_eq!(party_cap(false, 0), None);
    }

    #[test]
    fn zero_capacity_slots_never_open_the_modal() {
        assert_eq!(party_cap(true, 0), None);
    }

    #[test]
    fn cap_is_remaining_when_below_max_party() {
        assert_eq!(party_cap(true, 1), Some(1));
        assert_eq!(party_cap(true, 3), Some(3));
    }

    #[test]
    fn cap_is_limited_by_max_party() {
        assert_eq!(party_cap(true, 4), Some(MAX_PARTY));
        assert_eq!(party_cap(true, 9), Some(MAX_PARTY));
    }
}
