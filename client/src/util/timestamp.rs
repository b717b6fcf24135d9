//! Display formatting for the server's ISO 8601 timestamps.
//!
//! In the browser the labels come from `Date.toLocale*String` so they follow
//! the user's locale. Outside the browser (SSR, tests) they fall back to the
//! ISO date/time prefix.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

/// `YYYY-MM-DD` prefix of an ISO timestamp, or the input when it is shorter.
pub fn iso_date(ts: &str) -> &str {
    ts.get(..10).unwrap_or(ts)
}

/// `YYYY-MM-DD HH:MM` from an ISO timestamp.
pub fn iso_datetime(ts: &str) -> String {
    match (ts.get(..10), ts.get(11..16)) {
        (Some(date), Some(time)) => format!("{date} {time}"),
        _ => ts.to_owned(),
    }
}

#[cfg(feature = "hydrate")]
fn js_date(ts: &str) -> Option<js_sys::Date> {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(ts));
    (!date.get_time().is_nan()).then_some(date)
}

/// Date-only label for list rows.
pub fn date_label(ts: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(date) = js_date(ts) {
            return String::from(date.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    iso_date(ts).to_owned()
}

/// Date and time label for the page footer.
pub fn datetime_label(ts: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(date) = js_date(ts) {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    iso_datetime(ts)
}
