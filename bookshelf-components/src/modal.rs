//! An overlay dialog that asks to be closed on Escape or on a click next to it
//!
//! Closing can be locked, e.g. while the dialogs content is being submitted.

use leptos::{ev::keydown, prelude::*};
use leptos_use::{use_document, use_event_listener};

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    /// Called on Escape and on clicks on the overlay; the owner decides whether to close
    #[prop(into)]
    on_request_close: Callback<()>,
    /// While true, close requests are ignored
    #[prop(into, default = Signal::stored(false))]
    locked: Signal<bool>,
    /// Accessible name of the dialog
    content_label: &'static str,
    children: Children,
) -> impl IntoView {
    let request_close = move || {
        if !locked.get_untracked() {
            on_request_close.run(());
        }
    };
    let _cleanup = use_event_listener(use_document(), keydown, move |evt| {
        // <esc>
        if open.get_untracked() && evt.key_code() == 27 {
            request_close();
        }
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex justify-center items-center bg-black/50"
            class=("hidden", move || !open.get())
            role="dialog"
            aria-modal="true"
            aria-label=content_label
            on:click=move |_| request_close()
        >
            // clicks inside the panel must not reach the overlay
            <div
                class="bg-white p-6 rounded-lg shadow-lg w-96"
                on:click=|ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}
