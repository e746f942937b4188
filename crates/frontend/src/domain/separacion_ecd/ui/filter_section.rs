use super::donut_chart::DonutChart;
use super::legend_modal::LegendModal;
use super::summary_modal::SummaryModal;
use crate::domain::separacion_ecd::state::use_store;
use crate::shared::components::date_field::DateField;
use crate::shared::icons::icon;
use contracts::domain::separacion_ecd::summary::SMALL_DONUT_RADIUS;
use contracts::enums::ProcessStatus;
use leptos::prelude::*;

/// Date range, status overview, search and refresh
#[component]
pub fn FilterSection() -> impl IntoView {
    let store = use_store();
    let show_legend = RwSignal::new(false);
    let show_summary = RwSignal::new(false);

    let start_date = Signal::derive(move || store.state.with(|s| s.start_date.clone()));
    let end_date = Signal::derive(move || store.state.with(|s| s.end_date.clone()));
    let stats = Signal::derive(move || store.stats());

    let on_start = Callback::new(move |start: String| {
        store.set_date_range(start, end_date.get_untracked());
    });
    let on_end = Callback::new(move |end: String| {
        store.set_date_range(start_date.get_untracked(), end);
    });

    view! {
        <section class="filter-section">
            <div class="filter-section__dates">
                <DateField label="Inicio" value=start_date on_change=on_start />
                <DateField label="Fin" value=end_date on_change=on_end />
            </div>

            <div class="filter-section__overview">
                <button
                    class="filter-section__donut"
                    title="Ver resumen"
                    on:click=move |_| show_summary.set(true)
                >
                    <DonutChart stats=stats radius=SMALL_DONUT_RADIUS stroke_width=10.0 />
                </button>
                <div class="filter-section__pills">
                    {ProcessStatus::chart_order().into_iter().map(|status| view! {
                        <span class=format!("stat-pill stat-pill--{}", status.code())>
                            <span class="stat-pill__dot" style=format!("background: {}", status.color())></span>
                            <span class="stat-pill__label">{status.display_name()}</span>
                            <strong class="stat-pill__count">{move || stats.get().count(status)}</strong>
                        </span>
                    }).collect_view()}
                </div>
            </div>

            <div class="filter-section__tools">
                <div class="search-box">
                    {icon("search")}
                    <input
                        type="text"
                        class="search-box__input"
                        placeholder="Buscar..."
                        prop:value=move || store.search.get()
                        on:input=move |ev| store.search.set(event_target_value(&ev))
                    />
                </div>
                <button
                    class="button button--icon"
                    title="Actualizar"
                    prop:disabled=move || store.loading.get()
                    on:click=move |_| store.load()
                >
                    {icon("rotate-ccw")}
                </button>
                <button
                    class="button button--icon"
                    title="Leyenda"
                    on:click=move |_| show_legend.set(true)
                >
                    {icon("info")}
                </button>
            </div>
        </section>

        <Show when=move || show_legend.get()>
            <LegendModal stats=stats on_close=Callback::new(move |_| show_legend.set(false)) />
        </Show>
        <Show when=move || show_summary.get()>
            <SummaryModal on_close=Callback::new(move |_| show_summary.set(false)) />
        </Show>
    }
}
