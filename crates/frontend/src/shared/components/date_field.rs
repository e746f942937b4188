use crate::shared::date_utils::{display_date, normalize, to_input_value};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Labelled date picker.
///
/// Shows the value as `05 de ene, 2025` over a native date input and
/// reports changes as `dd/mm/yyyy`. Unparsable input is ignored.
#[component]
pub fn DateField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="date-field">
            <span class="date-field__label">{label}</span>
            <span class="date-field__control">
                {icon("calendar")}
                <span
                    class="date-field__text"
                    class:date-field__text--empty=move || value.with(|v| to_input_value(v).is_empty())
                >
                    {move || value.with(|v| display_date(v))}
                </span>
                <input
                    type="date"
                    class="date-field__input"
                    prop:value=move || value.with(|v| to_input_value(v))
                    on:change=move |ev| {
                        match normalize(&event_target_value(&ev)) {
                            Ok(date) => on_change.run(date),
                            Err(e) => log::warn!("ignored date input: {}", e),
                        }
                    }
                />
            </span>
        </label>
    }
}
