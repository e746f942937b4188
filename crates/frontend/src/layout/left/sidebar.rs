//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::{initially_expanded, menu_groups};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(initially_expanded(&ctx.active.get_untracked()));

    view! {
        <div class="app-sidebar__brand">
            <span class="app-sidebar__logo">"PS"</span>
            <span class="app-sidebar__title">"PowerSphere"</span>
        </div>
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_id = StoredValue::new(group.id.to_string());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && ctx.active.get() == group_id.get_value()
                            }
                            on:click=move |_| {
                                let gid = group_id.get_value();
                                if has_children {
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open(&gid);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&group_id.get_value())
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&group_id.get_value())>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item app-sidebar__item--child"
                                                    class:app-sidebar__item--active=move || ctx.active.get() == id
                                                    on:click=move |_| ctx.open(id)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}
