//! Thin wrappers around browser APIs
//!
//! They are only ever called from event handlers and effects, which do not run during server side
//! rendering. The non-hydrate variants exist so the crate builds for the server.

use time::{OffsetDateTime, UtcOffset};

/// Show a blocking message to the user
#[cfg(feature = "hydrate")]
pub fn alert(message: &str) {
    if let Err(e) = leptos::prelude::window().alert_with_message(message) {
        leptos::logging::error!("Unable to show alert {message:?}: {e:?}");
    }
}
#[cfg(not(feature = "hydrate"))]
pub fn alert(message: &str) {
    leptos::logging::log!("alert: {message}");
}

/// The offset of the browsers local time zone at the wall clock time `local_input`
///
/// `local_input` is the value of a datetime-local input. The offset is taken for that moment, so
/// picking a date on the other side of a DST change yields the offset valid then.
#[cfg(feature = "hydrate")]
pub fn local_offset_at(local_input: &str) -> UtcOffset {
    use web_sys::{js_sys::Date, wasm_bindgen::JsValue};
    let date = Date::new(&JsValue::from_str(local_input));
    // minutes to add to local time to get UTC, NaN for unparsable input
    let minutes = date.get_timezone_offset();
    if minutes.is_nan() {
        return UtcOffset::UTC;
    }
    UtcOffset::from_whole_seconds(-(minutes as i32) * 60).unwrap_or(UtcOffset::UTC)
}
#[cfg(not(feature = "hydrate"))]
pub fn local_offset_at(_local_input: &str) -> UtcOffset {
    UtcOffset::UTC
}

/// Render a timestamp in the browsers locale and time zone
#[cfg(feature = "hydrate")]
pub fn locale_datetime(value: &OffsetDateTime) -> String {
    use web_sys::{js_sys::Date, wasm_bindgen::JsValue};
    let millis = (value.unix_timestamp_nanos() / 1_000_000) as f64;
    Date::new(&JsValue::from_f64(millis))
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
#[cfg(not(feature = "hydrate"))]
pub fn locale_datetime(value: &OffsetDateTime) -> String {
    bookshelf_shared::datetime::format_utc(value)
}
