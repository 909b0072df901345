//! Wall-clock access via the browser `Date` API.
//!
//! The pure crates are clock-free by design; timestamps and the
//! footer year are sampled here and passed down.

/// Current moment as an ISO-8601 string, e.g. `2026-08-29T12:00:00.000Z`.
#[must_use]
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}

/// Current year for the footer copyright line.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // year values are tiny
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
