use super::actions_bar::ActionsBar;
use super::filter_section::FilterSection;
use super::process_table::ProcessTable;
use crate::domain::separacion_ecd::state::provide_store;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::progress_card::ProgressCard;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Separación ECD dashboard
#[component]
pub fn SeparacionEcdPage() -> impl IntoView {
    let store = provide_store();

    // Initial load with the server's default range
    Effect::new(move |_| store.load());

    let completed = Signal::derive(move || store.stats().completed_pct());

    view! {
        <div class="page separacion-ecd">
            <PageHeader
                title="Separación de Estado de Cuenta Diario"
                breadcrumb=vec!["Procesos MEM", "Separación ECD"]
            >
                <ProgressCard percentage=completed />
            </PageHeader>

            {move || store.error.get().map(|err| view! {
                <div class="alert alert--error">
                    {icon("alert-circle")}
                    <span>{err}</span>
                    <button class="button button--icon" on:click=move |_| store.error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}

            <FilterSection />
            <ActionsBar />
            <ProcessTable />
        </div>
    }
}
