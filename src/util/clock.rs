//! Wall-clock labels for chat messages.
//!
//! In the browser the label comes from `Intl.DateTimeFormat` in the viewer's
//! locale with two-digit hour and minute. Off-browser there is no locale, so
//! the label is UTC `HH:MM`.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Zero-padded `HH:MM`.
#[must_use]
pub fn format_clock(hour: u32, minute: u32) -> String {
    format!("{hour:02}:{minute:02}")
}

/// UTC `HH:MM` for a unix timestamp in seconds.
#[must_use]
pub fn utc_clock(unix_secs: u64) -> String {
    let secs_of_day = unix_secs % 86_400;
    let hour = u32::try_from(secs_of_day / 3_600).unwrap_or(0);
    let minute = u32::try_from(secs_of_day % 3_600 / 60).unwrap_or(0);
    format_clock(hour, minute)
}

/// Label for "now".
#[must_use]
pub fn now_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsValue;

        let options = js_sys::Object::new();
        for field in ["hour", "minute"] {
            let _ = js_sys::Reflect::set(
                &options,
                &JsValue::from_str(field),
                &JsValue::from_str("2-digit"),
            );
        }
        let formatter = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &options);
        formatter
            .format()
            .call1(&JsValue::UNDEFINED, &js_sys::Date::new_0())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| {
                let now = js_sys::Date::new_0();
                format_clock(now.get_hours(), now.get_minutes())
            })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        utc_clock(secs)
    }
}
