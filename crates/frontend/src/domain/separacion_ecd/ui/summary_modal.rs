use super::donut_chart::DonutChart;
use crate::domain::separacion_ecd::state::use_store;
use crate::shared::date_utils::display_date;
use crate::shared::modal::Modal;
use contracts::domain::separacion_ecd::summary::LARGE_DONUT_RADIUS;
use contracts::enums::ProcessStatus;
use leptos::prelude::*;

/// "Resumen de Procesamiento": overall donut, per-status cards and the
/// per-process breakdown
#[component]
pub fn SummaryModal(on_close: Callback<()>) -> impl IntoView {
    let store = use_store();
    let stats = Signal::derive(move || store.stats());

    let subtitle = store.state.with_untracked(|s| {
        format!("{} - {}", display_date(&s.start_date), display_date(&s.end_date))
    });
    let subcuentas = move || store.state.with(|s| s.subcuentas.len());

    view! {
        <Modal title="Resumen de Procesamiento" subtitle=subtitle class="modal--wide" on_close=on_close>
            <div class="summary">
                <div class="summary__top">
                    <DonutChart
                        stats=stats
                        radius=LARGE_DONUT_RADIUS
                        stroke_width=20.0
                        caption="Completado"
                    />
                    <div class="summary__cards">
                        {ProcessStatus::chart_order().into_iter().map(|status| view! {
                            <div class=format!("summary-card summary-card--{}", status.code())>
                                <div class="summary-card__header">
                                    <span>{status.display_name()}</span>
                                    <strong>{move || stats.get().count(status)}</strong>
                                </div>
                                <div class="summary-card__bar">
                                    <div
                                        class="summary-card__fill"
                                        style=move || format!(
                                            "width: {}%; background: {}",
                                            stats.get().percentage(status),
                                            status.color()
                                        )
                                    ></div>
                                </div>
                                <span class="summary-card__pct">
                                    {move || format!("{}%", stats.get().percentage(status))}
                                </span>
                            </div>
                        }).collect_view()}
                    </div>
                </div>

                <h3 class="summary__heading">"Desglose por Proceso"</h3>
                <div class="summary__processes">
                    {move || store.column_stats().into_iter().map(|row| {
                        let total = row.stats.total;
                        view! {
                            <div class="process-bar">
                                <span class="process-bar__label" title=row.column.description>
                                    {row.column.label}
                                </span>
                                <div class="process-bar__track">
                                    {ProcessStatus::chart_order().into_iter()
                                        .filter(|s| row.stats.count(*s) > 0)
                                        .map(|status| view! {
                                            <div
                                                class="process-bar__segment"
                                                title=format!("{}: {}", status.display_name(), row.stats.count(status))
                                                style=format!(
                                                    "width: {:.2}%; background: {}",
                                                    row.stats.width_pct(status),
                                                    status.color()
                                                )
                                            ></div>
                                        })
                                        .collect_view()}
                                </div>
                                <span class="process-bar__total">{total}</span>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="summary__stats">
                    <div class="summary-stat">
                        <span class="summary-stat__label">"Subcuentas"</span>
                        <strong>{subcuentas}</strong>
                    </div>
                    <div class="summary-stat">
                        <span class="summary-stat__label">"Completado"</span>
                        <strong>{move || format!("{}%", stats.get().completed_pct())}</strong>
                    </div>
                    <div class="summary-stat summary-stat--error">
                        <span class="summary-stat__label">"Con error"</span>
                        <strong>{move || stats.get().error}</strong>
                    </div>
                    <div class="summary-stat summary-stat--in-progress">
                        <span class="summary-stat__label">"En progreso"</span>
                        <strong>{move || stats.get().in_progress}</strong>
                    </div>
                </div>
            </div>
        </Modal>
    }
}
