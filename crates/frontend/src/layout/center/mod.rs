use crate::domain::separacion_ecd::ui::SeparacionEcdPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::page_label;
use crate::shared::components::empty_state::EmptyState;
use leptos::prelude::*;

/// Renders the page selected in the sidebar
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div data-zone="center" class="app-center">
            {move || {
                let key = ctx.active.get();
                match key.as_str() {
                    "separacion_ecd" => view! { <SeparacionEcdPage /> }.into_any(),
                    other => view! {
                        <EmptyState
                            title=page_label(other).to_string()
                            description="Módulo en construcción"
                            icon="file-text"
                        />
                    }.into_any(),
                }
            }}
        </div>
    }
}
