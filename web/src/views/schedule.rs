use leptos::prelude::*;

use crate::components::{
    DayTabs, DeleteModal, DeleteTarget, ErrorView, SelectedSlot, SignupModal, SlotGrid,
};
use crate::server::get_week_schedule;

/// The public signup page: day tabs over a grid of hour slots, a signup
/// modal for open slots, and a delete modal for existing signups.
#[component]
pub fn SchedulePage() -> impl IntoView {
    let active_day = RwSignal::new("Monday".to_string());

    let show_signup_modal = RwSignal::new(false);
    let selected_slot = RwSignal::new(None::<SelectedSlot>);

    let show_delete_modal = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<DeleteTarget>);

    let schedule_resource = Resource::new(|| (), move |_| async move { get_week_schedule().await });

    let on_slot_selected = move |slot: SelectedSlot| {
        selected_slot.set(Some(slot));
        show_signup_modal.set(true);
    };

    let on_delete_selected = move |target: DeleteTarget| {
        delete_target.set(Some(target));
        show_delete_modal.set(true);
    };

    view! {
        <div class="schedule-page">
            <header class="schedule-header">
                <h1>"Volunteer Signup"</h1>
                <p class="schedule-tagline">"Pick a day, pick an hour, add your names."</p>
            </header>

            <DayTabs active_day=active_day/>

            <Suspense fallback=move || {
                view! {
                    <div class="schedule-loading">
                        <div class="loading-spinner"></div>
                        <p>"Loading this week's schedule..."</p>
                    </div>
                }
            }>
                {move || {
                    schedule_resource
                        .get()
                        .map(|result| match result {
                            Ok(week) => {
                                view! {
                                    <SlotGrid
                                        schedule=week
                                        active_day=active_day
                                        on_slot_selected=on_slot_selected
                                        on_delete_selected=on_delete_selected
                                    />
                                }
                                    .into_any()
                            }
                            Err(_) => {
                                view! {
                                    <ErrorView message="Could not load the schedule. Please refresh the page."
                                        .to_string()/>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <SignupModal
                show=show_signup_modal
                slot=selected_slot
                on_close=move || show_signup_modal.set(false)
            />
            <DeleteModal
                show=show_delete_modal
                target=delete_target
                on_close=move || show_delete_modal.set(false)
            />
        </div>
    }
}
