use crate::icons::SpinIcon;
use leptos::prelude::*;
use web_sys::MouseEvent;

/// A button that shows a spinner and ignores clicks while `busy_reader` is true
#[component]
pub fn Button(
    #[prop(into)] busy_reader: Signal<bool>,
    on_click: impl Fn(MouseEvent) + 'static,
    #[prop(default = "")] label: &'static str,
    #[prop(default = "")] busy_label: &'static str,
    #[prop(default = crate::PRIMARY_BUTTON_CLASSES)] class: &'static str,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class=format!("inline-flex justify-center items-center {class}")
            disabled=move || busy_reader.get() || disabled.get()
            on:click=move |ev| {
                if !busy_reader.get() && !disabled.get() {
                    on_click(ev);
                }
            }
        >

            <Show when=move || busy_reader.get()>
                <SpinIcon inner_class="animate-spin h-5 w-5 mr-2 text-white" />
            </Show>

            {move || if busy_reader.get() && !busy_label.is_empty() { busy_label } else { label }}
        </button>
    }
}
