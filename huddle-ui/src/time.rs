/*
 * Copyright 2025 Huddle Contributors
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Browser-local time helpers.
//!
//! Scheduled times travel as UTC on the wire; the browser's `Date` handles
//! the local-timezone edges (the `datetime-local` input and human-readable
//! display).

use chrono::{DateTime, TimeZone, Utc};
use wasm_bindgen::JsValue;

/// The current local time as `YYYY-MM-DDTHH:MM`, for the `min`/`value` of a
/// `datetime-local` input.
pub fn datetime_local_now() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date(),
        date.get_hours(),
        date.get_minutes()
    )
}

/// Interpret a `datetime-local` value in the browser's timezone.
pub fn parse_datetime_local(value: &str) -> Option<DateTime<Utc>> {
    let ms = js_sys::Date::new(&JsValue::from_str(value)).get_time();
    if ms.is_nan() {
        return None;
    }
    Utc.timestamp_millis_opt(ms as i64).single()
}

/// Human-readable rendering of an instant, in the browser locale.
pub fn format_locale(instant: DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(instant.timestamp_millis() as f64));
    date.to_locale_string("en-US", &JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| instant.to_rfc3339())
}
