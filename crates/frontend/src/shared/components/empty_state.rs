use crate::shared::icons;
use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Label and handler of an optional call to action
    #[prop(optional)]
    action: Option<(&'static str, Callback<()>)>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icons::icon(icon.unwrap_or("file-text"))}</div>
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__description">{description}</p>
            {action.map(|(label, on_click)| view! {
                <button class="button button--primary" on:click=move |_| on_click.run(())>
                    {label}
                </button>
            })}
        </div>
    }
}
