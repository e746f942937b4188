use leptos::prelude::*;

/// Page title with a breadcrumb trail; the last crumb is the current page
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    breadcrumb: Vec<&'static str>,
    /// Actions aligned to the right (pass an empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    let last = breadcrumb.len().saturating_sub(1);

    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                <nav class="page-header__breadcrumb">
                    {breadcrumb.into_iter().enumerate().map(|(idx, label)| view! {
                        {(idx > 0).then(|| view! { <span class="page-header__separator">"/"</span> })}
                        <span
                            class="page-header__crumb"
                            class:page-header__crumb--current=idx == last
                        >
                            {label}
                        </span>
                    }).collect_view()}
                </nav>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
