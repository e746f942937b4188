//! Top bar: sidebar toggle, notifications and user buttons.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_left()
                title=move || if is_sidebar_visible() { "Ocultar navegación" } else { "Mostrar navegación" }
            >
                {icon("menu")}
            </button>

            <div class="top-header__actions">
                <button class="top-header__icon-btn" title="Notificaciones">
                    {icon("bell")}
                </button>
                <button class="top-header__icon-btn" title="Usuario">
                    {icon("user")}
                </button>
            </div>
        </header>
    }
}
