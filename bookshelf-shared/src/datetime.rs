//! Conversion between `<input type="datetime-local">` values and timestamps

use time::{
    format_description::{well_known::Rfc3339, BorrowedFormatItem},
    macros::format_description,
    Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset,
};

/// The format browsers use for datetime-local inputs with minute precision
const LOCAL_INPUT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");
/// Same as [`LOCAL_INPUT`], but browsers add seconds when `step` is below a minute
const LOCAL_INPUT_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
/// ISO 8601 without an offset, as some backends send local timestamps
const ISO_WITHOUT_OFFSET: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);
/// Used where no browser locale is available
const FALLBACK_DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

/// Shown for a pickup time the backend sent in a form we cannot read
pub const INVALID_DATE: &str = "Invalid Date";

/// The picker offers one slot per this many minutes
pub const PICKUP_SLOT_MINUTES: u8 = 15;

/// Move `value` back to the start of its pickup slot
pub fn snap_to_slot(value: OffsetDateTime) -> OffsetDateTime {
    let excess = Duration::minutes(i64::from(value.minute() % PICKUP_SLOT_MINUTES))
        + Duration::seconds(i64::from(value.second()))
        + Duration::nanoseconds(i64::from(value.nanosecond()));
    value - excess
}

/// Read a timestamp sent by the backend
///
/// RFC 3339 is expected. ISO 8601 timestamps without an offset are taken as UTC.
pub fn parse_backend_datetime(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    OffsetDateTime::parse(value, &Rfc3339).ok().or_else(|| {
        PrimitiveDateTime::parse(value, ISO_WITHOUT_OFFSET)
            .ok()
            .map(PrimitiveDateTime::assume_utc)
    })
}

/// Interpret the value of a datetime-local input as wall clock time at `offset`
///
/// Returns None for an empty or malformed value, which is what the input reports while the user
/// has not finished picking. Browsers treat the `step` of the input as a hint only, so the result
/// is snapped to its pickup slot.
pub fn parse_local_input(value: &str, offset: UtcOffset) -> Option<OffsetDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    PrimitiveDateTime::parse(value, LOCAL_INPUT)
        .or_else(|_| PrimitiveDateTime::parse(value, LOCAL_INPUT_SECONDS))
        .ok()
        .map(|naive| snap_to_slot(naive.assume_offset(offset)))
}

/// Render a timestamp back into the value a datetime-local input expects
///
/// The wall clock time is taken in the offset the timestamp carries.
pub fn format_local_input(value: &OffsetDateTime) -> String {
    value.format(LOCAL_INPUT).unwrap_or_default()
}

pub fn format_utc(value: &OffsetDateTime) -> String {
    value
        .to_offset(UtcOffset::UTC)
        .format(FALLBACK_DISPLAY)
        .unwrap_or_default()
}
