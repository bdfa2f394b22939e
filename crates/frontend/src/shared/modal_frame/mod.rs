use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dialog shell: overlay, surface, title row with a close button, body.
/// Action buttons go into the body inside `div.modal-footer`.
///
/// The overlay closes the dialog only when both mouse down and click happen on
/// the overlay itself, so selecting text inside and releasing outside keeps it open.
#[component]
pub fn ModalFrame(
    #[prop(into)]
    title: String,
    /// Called on overlay click and on the close button.
    on_close: Callback<()>,
    /// Extra class for the surface (`div.modal`).
    #[prop(optional)]
    modal_class: &'static str,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        matches!((ev.target(), ev.current_target()), (Some(t), Some(ct)) if t == ct)
    };

    let close_later = move || {
        // the overlay must not be removed inside its own click dispatch
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            close_later();
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev| overlay_mouse_down.set(is_direct_overlay_event(&ev))
            on:click=handle_overlay_click
        >
            <div
                class=format!("modal {}", modal_class)
                on:click=|ev: ev::MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="modal-close" title="Close" on:click=move |_| close_later()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
