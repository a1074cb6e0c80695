use leptos::prelude::*;

/// One pair of first/last name signals per attendee. Rebuilding with
/// fresh signals is what discards previously typed names when the party
/// size changes.
pub(crate) type NameFields = Vec<(RwSignal<String>, RwSignal<String>)>;

pub(crate) fn fresh_fields(count: u32) -> NameFields {
    (0..count)
        .map(|_| (RwSignal::new(String::new()), RwSignal::new(String::new())))
        .collect()
}

/// Renders exactly one labeled first/last name input pair per attendee,
/// numbered from 1. Re-renders whenever the field set is rebuilt.
#[component]
pub fn AttendeeFields(fields: RwSignal<NameFields>) -> impl IntoView {
    view! {
        <div id="people-fields" class="people-fields">
            {move || {
                fields
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, (first, last))| {
                        let i = idx + 1;
                        let first_id = format!("first_name_{i}");
                        let last_id = format!("last_name_{i}");
                        view! {
                            <div class="people-row">
                                <div class="field inline">
                                    <label for=first_id.clone()>
                                        {format!("Person {i} First Name")}
                                    </label>
                                    <input
                                        type="text"
                                        id=first_id.clone()
                                        name=first_id
                                        required
                                        prop:value=move || first.get()
                                        on:input=move |ev| first.set(event_target_value(&ev))
                                    />
                                </div>
                                <div class="field inline">
                                    <label for=last_id.clone()>
                                        {format!("Person {i} Last Name")}
                                    </label>
                                    <input
                                        type="text"
                                        id=last_id.clone()
                                        name=last_id
                                        required
                                        prop:value=move || last.get()
                                        on:input=move |ev| last.set(event_target_value(&ev))
                                    />
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_fields_has_one_pair_per_attendee() {
        let owner = Owner::new();
        owner.set();
        let fields = fresh_fields(3);
        assert_eq!(fields.len(), 3);
        for (first, last) in &fields {
            assert_eq!(first.get_untracked(), "");
            assert_eq!(last.get_untracked(), "");
        }
    }

    #[test]
    fn rebuilding_discards_previous_values() {
        let owner = Owner::new();
        owner.set();
        let fields = fresh_fields(2);
        fields[0].0.set("Ada".to_string());
        fields[0].1.set("Lovelace".to_string());

        let rebuilt = fresh_fields(1);
        assert_eq!(rebuilt.len(), 1);
        assert_eq!(rebuilt[0].0.get_untracked(), "");
        assert_eq!(rebuilt[0].1.get_untracked(), "");
    }
}
