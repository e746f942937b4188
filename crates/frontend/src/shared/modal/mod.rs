use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Overlay dialog closed by Escape, the close button or a click outside
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    /// Secondary line under the title
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Extra class on the dialog box, e.g. `modal--wide`
    #[prop(optional, into)]
    class: MaybeProp<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div
                class=move || format!("modal {}", class.get().unwrap_or_default())
                on:click=stop_propagation
            >
                <div class="modal-header">
                    <div>
                        <h2 class="modal-title">{title}</h2>
                        {move || subtitle.get().map(|s| view! {
                            <p class="modal-subtitle">{s}</p>
                        })}
                    </div>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
