use crate::shared::components::status_badge::StatusBadge;
use crate::shared::modal::Modal;
use contracts::domain::separacion_ecd::StatusStats;
use contracts::enums::ProcessStatus;
use leptos::prelude::*;

#[component]
pub fn LegendModal(
    #[prop(into)]
    stats: Signal<StatusStats>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal title="Leyenda de Estados" subtitle="Significado de cada estado del proceso" on_close=on_close>
            <ul class="legend">
                {ProcessStatus::chart_order().into_iter().map(|status| view! {
                    <li class="legend__item">
                        <StatusBadge status=status />
                        <p class="legend__description">{status.description()}</p>
                        <span class="legend__count">
                            {move || {
                                let s = stats.get();
                                format!("{} ({}%)", s.count(status), s.percentage(status))
                            }}
                        </span>
                    </li>
                }).collect_view()}
            </ul>
        </Modal>
    }
}
