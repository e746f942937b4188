use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Keeps `?active=` in the address bar in sync with the open page
    ctx.init_router_integration();

    view! {
        <ConfigProvider>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <Center /> }.into_any()
            />
        </ConfigProvider>
    }
}
