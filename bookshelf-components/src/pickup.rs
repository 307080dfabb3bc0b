//! The dialog to pick a date and time for collecting a borrowed book

use bookshelf_shared::{
    datetime::{format_local_input, parse_local_input},
    pickup::PickupModal,
};
use leptos::prelude::*;

use crate::{
    browser::local_offset_at, buttons::Button, modal::Modal, CONFIRM_BUTTON_CLASSES,
    NEUTRAL_BUTTON_CLASSES,
};

/// Step of the time picker in seconds, 15 minutes
const PICKER_STEP_SECONDS: &str = "900";

#[component]
pub fn PickupDialog(
    modal: RwSignal<PickupModal>,
    /// true while a submitted schedule awaits the backends answer
    #[prop(into)]
    submit_pending: Signal<bool>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let open = Signal::derive(move || modal.with(|m| m.is_open()));
    let picked = move || {
        modal.with(|m| m.datetime().map(|dt| format_local_input(&dt)).unwrap_or_default())
    };
    let (never_busy, _) = signal(false);

    view! {
        <Modal
            open=open
            on_request_close=move |_| modal.update(|m| m.cancel())
            locked=submit_pending
            content_label="Select Pickup DateTime"
        >
            <h2 class="text-xl font-semibold mb-4">"Select Pickup Date and Time"</h2>
            <p class="text-sm text-gray-600 mb-2">
                <strong>"Edition Number:"</strong>" "
                {move || modal.with(|m| m.edition().unwrap_or_default().to_string())}
            </p>
            <input
                type="datetime-local"
                step=PICKER_STEP_SECONDS
                class="w-full p-2 border rounded-lg mb-4"
                prop:value=picked
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    let datetime = parse_local_input(&value, local_offset_at(&value));
                    modal.update(|m| m.select_datetime(datetime));
                }
            />
            <div class="flex justify-end space-x-4">
                <Button
                    busy_reader=never_busy
                    on_click=move |_| modal.update(|m| m.cancel())
                    label="Cancel"
                    class=NEUTRAL_BUTTON_CLASSES
                    disabled=submit_pending
                />
                <Button
                    busy_reader=submit_pending
                    on_click=move |_| on_submit.run(())
                    label="Submit Schedule"
                    busy_label="Scheduling..."
                    class=CONFIRM_BUTTON_CLASSES
                />
            </div>
        </Modal>
    }
}
