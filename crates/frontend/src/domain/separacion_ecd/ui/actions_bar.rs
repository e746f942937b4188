use crate::domain::separacion_ecd::state::use_store;
use crate::shared::components::confirmation_modal::ConfirmationModal;
use crate::shared::icons::icon;
use contracts::domain::separacion_ecd::{ConfirmationSummary, ProcessAction};
use contracts::enums::ActionMode;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Delay before the confirmation dialog closes after a submit
const CLOSE_DELAY_MS: u32 = 800;

/// Toggle `action` in the chosen list, keeping catalogue order
fn toggle_action(chosen: &mut Vec<ProcessAction>, action: ProcessAction) {
    if chosen.contains(&action) {
        chosen.retain(|a| *a != action);
    } else {
        chosen.push(action);
        chosen.sort_by_key(|a| ProcessAction::all().iter().position(|x| x == a));
    }
}

fn selected_label(count: usize) -> String {
    format!(
        "{} seleccionado{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Bulk actions: delete and execute dropdowns around the selection counter
#[component]
pub fn ActionsBar() -> impl IntoView {
    let store = use_store();
    let selected = move || store.state.with(|s| s.selected_count());

    let open_dropdown = RwSignal::new(None::<ActionMode>);
    let modal_open = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let summary = RwSignal::new(None::<ConfirmationSummary>);
    let pending_actions = StoredValue::new(Vec::<ProcessAction>::new());

    let on_choose = Callback::new(move |(mode, actions): (ActionMode, Vec<ProcessAction>)| {
        open_dropdown.set(None);
        let results = store.validate(&actions, mode);
        let batch = ConfirmationSummary::new(&results, mode);
        log::debug!(
            "separacion_ecd: {} validated, {} valid, {} excluded",
            mode,
            batch.valid_count(),
            batch.excluded_count()
        );
        pending_actions.set_value(actions);
        summary.set(Some(batch));
        modal_open.set(true);
    });

    let on_confirm = Callback::new(move |_| {
        let Some(batch) = summary.get_untracked() else {
            return;
        };
        if !batch.can_confirm() {
            return;
        }
        let actions = pending_actions.get_value();
        submitting.set(true);

        spawn_local(async move {
            let ids = batch.valid_ids.clone();
            let result = match batch.mode {
                ActionMode::Execute => store.execute_action(ids, &actions).await,
                ActionMode::Delete => store.delete_action(ids, &actions).await,
            };
            if let Err(e) = result {
                log::error!("separacion_ecd: {} failed: {}", batch.mode, e);
                store.error.set(Some(e));
            }
            TimeoutFuture::new(CLOSE_DELAY_MS).await;
            submitting.set(false);
            modal_open.set(false);
        });
    });

    view! {
        <div class="actions-bar">
            <ActionDropdown mode=ActionMode::Delete open=open_dropdown on_choose=on_choose />
            <span class="actions-bar__count">{move || selected_label(selected())}</span>
            <ActionDropdown mode=ActionMode::Execute open=open_dropdown on_choose=on_choose />
        </div>

        <ConfirmationModal
            open=modal_open
            summary=summary
            loading=submitting
            on_confirm=on_confirm
        />
    }
}

/// Button with a checkbox list of the actions.
///
/// Only one dropdown is open at a time; a click outside closes it.
#[component]
fn ActionDropdown(
    mode: ActionMode,
    open: RwSignal<Option<ActionMode>>,
    on_choose: Callback<(ActionMode, Vec<ProcessAction>)>,
) -> impl IntoView {
    let chosen = RwSignal::new(Vec::<ProcessAction>::new());
    let is_open = move || open.get() == Some(mode);
    let container = NodeRef::<leptos::html::Div>::new();

    let click_outside = window_event_listener(ev::click, move |event| {
        if open.get_untracked() != Some(mode) {
            return;
        }
        let inside = match (container.get_untracked(), event.target()) {
            (Some(el), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .is_some_and(|node| el.contains(Some(node))),
            _ => false,
        };
        if !inside {
            open.set(None);
        }
    });
    on_cleanup(move || click_outside.remove());

    let toggle_open = move |_| {
        open.update(|current| {
            *current = if *current == Some(mode) { None } else { Some(mode) };
        });
    };

    let confirm = move |_| {
        let actions = chosen.get_untracked();
        if actions.is_empty() {
            return;
        }
        chosen.set(Vec::new());
        on_choose.run((mode, actions));
    };

    let (button_class, button_icon) = match mode {
        ActionMode::Execute => ("button button--primary", "play"),
        ActionMode::Delete => ("button button--danger", "trash"),
    };

    view! {
        <div class="dropdown" node_ref=container>
            <button class=button_class on:click=toggle_open>
                {icon(button_icon)}
                <span>{mode.verb()}</span>
                {icon("chevron-down")}
            </button>
            <Show when=is_open>
                <div class=format!("dropdown__menu dropdown__menu--{}", mode.code())>
                    <p class="dropdown__heading">{mode.dropdown_heading()}</p>
                    <ul class="dropdown__list">
                        {ProcessAction::all().into_iter().map(|action| view! {
                            <li>
                                <label class="dropdown__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || chosen.with(|c| c.contains(&action))
                                        on:change=move |_| chosen.update(|c| toggle_action(c, action))
                                    />
                                    <span>{action.name()}</span>
                                </label>
                            </li>
                        }).collect_view()}
                    </ul>
                    <button
                        class=button_class
                        prop:disabled=move || chosen.with(|c| c.is_empty())
                        on:click=confirm
                    >
                        {mode.verb()}
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_action_keeps_catalogue_order() {
        let mut chosen = Vec::new();
        toggle_action(&mut chosen, ProcessAction::Revision);
        toggle_action(&mut chosen, ProcessAction::SegregacionMediciones);
        assert_eq!(
            chosen,
            vec![ProcessAction::SegregacionMediciones, ProcessAction::Revision]
        );

        toggle_action(&mut chosen, ProcessAction::Revision);
        assert_eq!(chosen, vec![ProcessAction::SegregacionMediciones]);
    }

    #[test]
    fn test_selected_label() {
        assert_eq!(selected_label(0), "0 seleccionados");
        assert_eq!(selected_label(1), "1 seleccionado");
        assert_eq!(selected_label(3), "3 seleccionados");
    }
}
