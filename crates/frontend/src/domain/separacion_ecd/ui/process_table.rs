use super::process_table_row::ProcessTableRow;
use crate::domain::separacion_ecd::state::use_store;
use crate::shared::components::table_header_checkbox::TableHeaderCheckbox;
use contracts::domain::separacion_ecd::columns::{column_groups, PROCESS_COLUMNS};
use contracts::domain::separacion_ecd::SeparacionEcdEvent;
use leptos::prelude::*;

const SKELETON_ROWS: usize = 8;

/// Leading columns: expand chevron, checkbox, account code
const LEADING_COLUMNS: usize = 3;

fn showing_label(visible: usize) -> String {
    if visible == 0 {
        "Mostrando 0 de 0".to_string()
    } else {
        format!("Mostrando 1-{} de {}", visible, visible)
    }
}

#[component]
pub fn ProcessTable() -> impl IntoView {
    let store = use_store();
    let total_columns = LEADING_COLUMNS + PROCESS_COLUMNS.len();

    let all_selected = Signal::derive(move || store.state.with(|s| s.all_selected()));
    let selected = Signal::derive(move || store.state.with(|s| s.selected_count()));
    let rows = Memo::new(move |_| store.visible());

    let on_select_all = Callback::new(move |checked: bool| {
        store.dispatch(SeparacionEcdEvent::SelectAll(checked));
    });

    view! {
        <div class="table-container">
            <table class="table process-table">
                <thead>
                    <tr class="table__group-row">
                        <th class="table__header-cell table__cell--expand table__cell--sticky-1" rowspan="2"></th>
                        <TableHeaderCheckbox all_selected=all_selected selected=selected on_change=on_select_all />
                        <th class="table__header-cell table__cell--sticky-3" rowspan="2">"Subcuenta"</th>
                        {column_groups().into_iter().map(|(group, span)| view! {
                            <th class="table__group-cell" colspan=span>{group.label()}</th>
                        }).collect_view()}
                    </tr>
                    <tr>
                        {PROCESS_COLUMNS.iter().map(|column| view! {
                            <th class="table__header-cell table__header-cell--status" title=column.description>
                                {column.label}
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if store.loading.get() {
                            (0..SKELETON_ROWS).map(|_| view! {
                                <tr class="table__row table__row--skeleton">
                                    <td colspan=total_columns>
                                        <div class="skeleton"></div>
                                    </td>
                                </tr>
                            }).collect_view().into_any()
                        } else if rows.with(|r| r.is_empty()) {
                            view! {
                                <tr>
                                    <td class="table__empty" colspan=total_columns>
                                        "No hay subcuentas disponibles"
                                    </td>
                                </tr>
                            }.into_any()
                        } else {
                            rows.get().into_iter().map(|sub| view! {
                                <ProcessTableRow sub=sub />
                            }).collect_view().into_any()
                        }
                    }}
                </tbody>
            </table>
            <div class="table__footer">
                <span>{move || format!("{} seleccionado(s)", selected.get())}</span>
                <span>{move || showing_label(rows.with(|r| r.len()))}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showing_label() {
        assert_eq!(showing_label(0), "Mostrando 0 de 0");
        assert_eq!(showing_label(8), "Mostrando 1-8 de 8");
    }
}
