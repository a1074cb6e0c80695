use leptos::prelude::*;
use shared_types::DAYS;
use wasm_bindgen::JsCast;

/// Weekday name for a `js_sys::Date::get_day()` index (0 = Sunday).
fn weekday_name(js_day: u32) -> Option<&'static str> {
    const NAMES: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];
    NAMES.get(js_day as usize).copied()
}

/// The tab to select on load: today's weekday when a matching tab exists,
/// Monday otherwise.
pub(crate) fn initial_day(js_day: u32, tabs: &[&str]) -> String {
    weekday_name(js_day)
        .filter(|name| tabs.contains(name))
        .unwrap_or("Monday")
        .to_string()
}

/// Next tab index for arrow-key navigation, wrapping at both ends.
pub(crate) fn step_index(index: usize, len: usize, forward: bool) -> usize {
    let dir = if forward { 1 } else { len - 1 };
    (index + dir) % len
}

fn tab_id(day: &str) -> String {
    format!("day-tab-{day}")
}

fn scroll_tab_into_view(day: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&tab_id(day)))
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_inline(web_sys::ScrollLogicalPosition::Center);
        options.set_block(web_sys::ScrollLogicalPosition::Nearest);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn focus_tab(day: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&tab_id(day)))
    {
        if let Some(el) = el.dyn_ref::<web_sys::HtmlElement>() {
            let _ = el.focus();
        }
    }
}

/// Single-active-of-N day selector. Exactly one tab is selected and
/// focusable at a time; ArrowRight/ArrowLeft cycle through the tabs with
/// wrap-around. The matching day panel is shown by whoever owns
/// `active_day` (see `SlotGrid`).
#[component]
pub fn DayTabs(active_day: RwSignal<String>) -> impl IntoView {
    let activate = move |day: String| {
        active_day.set(day.clone());
        scroll_tab_into_view(&day);
    };

    // Jump to today's tab once the client is up; SSR renders Monday.
    Effect::new(move |_| {
        let js_day = js_sys::Date::new_0().get_day();
        activate(initial_day(js_day as u32, &DAYS));
    });

    view! {
        <div class="day-tabs" role="tablist" aria-label="Days of the week">
            {DAYS
                .iter()
                .enumerate()
                .map(|(index, &day)| {
                    let is_active = move || active_day.get() == day;
                    view! {
                        <button
                            id=tab_id(day)
                            class=move || if is_active() { "day-tab active" } else { "day-tab" }
                            role="tab"
                            data-day=day
                            aria-selected=move || if is_active() { "true" } else { "false" }
                            tabindex=move || if is_active() { "0" } else { "-1" }
                            on:click=move |_| activate(day.to_string())
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                let key = ev.key();
                                if key != "ArrowRight" && key != "ArrowLeft" {
                                    return;
                                }
                                ev.prevent_default();
                                let next = step_index(index, DAYS.len(), key == "ArrowRight");
                                let next_day = DAYS[next];
                                activate(next_day.to_string());
                                focus_tab(next_day);
                            }
                        >
                            {day}
                        </button>
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
    fn initial_day_uses_todays_tab() {
        assert_eq!(initial_day(0, &DAYS), "Sunday");
        assert_eq!(initial_day(3, &DAYS), "Wednesday");
        assert_eq!(initial_day(6, &DAYS), "Saturday");
    }

    #[test]
    fn initial_day_falls_back_to_monday() {
        // Out-of-range weekday index
        assert_eq!(initial_day(7, &DAYS), "Monday");
        // Today's tab is not rendered
        let weekdays_only = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
        assert_eq!(initial_day(0, &weekdays_only), "Monday");
    }

    #[test]
    fn step_index_moves_forward_and_back() {
        assert_eq!(step_index(2, 7, true), 3);
        assert_eq!(step_index(2, 7, false), 1);
    }

    #[test]
    fn step_index_wraps_at_both_ends() {
        assert_eq!(step_index(6, 7, true), 0);
        assert_eq!(step_index(0, 7, false), 6);
    }
}
