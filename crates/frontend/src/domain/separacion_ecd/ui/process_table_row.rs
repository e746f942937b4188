use crate::domain::separacion_ecd::state::use_store;
use crate::shared::components::status_icon::StatusIcon;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::date_utils::status_tooltip;
use crate::shared::icons::icon;
use contracts::domain::separacion_ecd::aggregate::StatusColumns;
use contracts::domain::separacion_ecd::columns::PROCESS_COLUMNS;
use contracts::domain::separacion_ecd::{SeparacionEcdEvent, StatusCell, StatusEntry, Subcuenta};
use contracts::enums::ProcessStatus;
use leptos::prelude::*;

fn entry_icon(entry: &StatusEntry, cell: &StatusCell) -> impl IntoView {
    let tooltip = status_tooltip(
        entry.status,
        entry.executed_by.as_deref(),
        cell.last_update.as_ref(),
    );
    view! { <StatusIcon status=entry.status tooltip=tooltip /> }
}

/// One status cell; a column without data renders as pending
fn status_cell(columns: &StatusColumns, column_id: &str) -> AnyView {
    match columns.get(column_id) {
        Some(cell) => {
            let primary = entry_icon(cell.primary(), cell);
            let secondary = cell.secondary().map(|entry| entry_icon(entry, cell));
            view! {
                <td class="table__cell table__cell--status">
                    <div class="status-cell" class:status-cell--dual=cell.is_dual()>
                        {primary}
                        {secondary}
                    </div>
                </td>
            }
            .into_any()
        }
        None => view! {
            <td class="table__cell table__cell--status">
                <div class="status-cell">
                    <StatusIcon
                        status=ProcessStatus::Pending
                        tooltip=ProcessStatus::Pending.tooltip()
                    />
                </div>
            </td>
        }
        .into_any(),
    }
}

/// Account row followed by its client rows when expanded
#[component]
pub fn ProcessTableRow(sub: Subcuenta) -> impl IntoView {
    let store = use_store();
    let id = sub.id.clone();
    let checked = Signal::derive({
        let id = id.clone();
        move || store.state.with(|s| s.is_selected(&id))
    });

    let on_select = Callback::new({
        let id = id.clone();
        move |_: bool| store.dispatch(SeparacionEcdEvent::ToggleSelect(id.clone()))
    });
    let on_expand = move |_| store.dispatch(SeparacionEcdEvent::ToggleExpand(id.clone()));

    let has_clients = sub.has_clients();
    let expanded = sub.is_expanded;
    let cells = PROCESS_COLUMNS
        .iter()
        .map(|column| status_cell(&sub.columns, column.id))
        .collect_view();

    let client_rows = expanded.then(|| {
        sub.clients
            .iter()
            .map(|client| {
                let cells = PROCESS_COLUMNS
                    .iter()
                    .map(|column| status_cell(&client.columns, column.id))
                    .collect_view();
                view! {
                    <tr class="table__row table__row--client">
                        <td class="table__cell table__cell--sticky-1"></td>
                        <td class="table__cell table__cell--sticky-2"></td>
                        <td class="table__cell table__cell--sticky-3 process-table__client">
                            {client.name.clone()}
                        </td>
                        {cells}
                    </tr>
                }
            })
            .collect_view()
    });

    view! {
        <tr
            class="table__row"
            class:table__row--selected=move || checked.get()
            class:table__row--expanded=expanded
        >
            <td class="table__cell table__cell--expand table__cell--sticky-1">
                {has_clients.then(|| view! {
                    <button
                        class="button button--icon process-table__chevron"
                        class:process-table__chevron--open=expanded
                        title=if expanded { "Contraer" } else { "Expandir" }
                        on:click=on_expand
                    >
                        {icon("chevron-right")}
                    </button>
                })}
            </td>
            <TableCheckbox checked=checked on_change=on_select />
            <td class="table__cell table__cell--sticky-3 process-table__code">
                {sub.code.clone()}
            </td>
            {cells}
        </tr>
        {client_rows}
    }
}
