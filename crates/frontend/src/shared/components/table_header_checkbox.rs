//! "Select all" checkbox for a table header.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// `all_selected` comes from the owning state so the "every row" rule lives in one place
pub fn checkbox_state(all_selected: bool, selected: usize) -> CheckboxState {
    if all_selected {
        CheckboxState::Checked
    } else if selected == 0 {
        CheckboxState::Unchecked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Checked when every row is selected, indeterminate for a partial selection.
/// `on_change(true)` selects all, `on_change(false)` clears.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    all_selected: Signal<bool>,
    #[prop(into)]
    selected: Signal<usize>,
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || checkbox_state(all_selected.get(), selected.get()));
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` has no HTML attribute, it must be set on the element
    Effect::new(move |_| {
        let is_indeterminate = state.get() == CheckboxState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(is_indeterminate);
            }
        }
    });

    view! {
        <th class="table__header-cell table__cell--checkbox table__cell--sticky-2">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckboxState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::separacion_ecd::aggregate::StatusColumns;
    use contracts::domain::separacion_ecd::{SeparacionEcdEvent, SeparacionEcdState, Subcuenta};

    fn sub(id: &str) -> Subcuenta {
        Subcuenta {
            id: id.to_string(),
            code: format!("SUB-{}", id),
            is_expanded: false,
            is_selected: false,
            columns: StatusColumns::new(),
            clients: Vec::new(),
        }
    }

    fn header_state(s: &SeparacionEcdState) -> CheckboxState {
        checkbox_state(s.all_selected(), s.selected_count())
    }

    #[test]
    fn test_checkbox_state() {
        assert_eq!(checkbox_state(false, 0), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(false, 2), CheckboxState::Indeterminate);
        assert_eq!(checkbox_state(true, 5), CheckboxState::Checked);
    }

    #[test]
    fn test_checkbox_follows_store_selection() {
        let mut s = SeparacionEcdState::new(vec![sub("1"), sub("2")], "01/01/2025", "31/01/2025");
        assert_eq!(header_state(&s), CheckboxState::Unchecked);

        s.apply(SeparacionEcdEvent::ToggleSelect("1".into()));
        assert_eq!(header_state(&s), CheckboxState::Indeterminate);

        s.apply(SeparacionEcdEvent::SelectAll(true));
        assert_eq!(header_state(&s), CheckboxState::Checked);

        // An empty table never shows as checked
        let empty = SeparacionEcdState::new(Vec::new(), "01/01/2025", "31/01/2025");
        assert_eq!(header_state(&empty), CheckboxState::Unchecked);
    }
}
