//! Timestamp helper for the browser environment.

/// Current wall-clock time as an ISO-8601 string, from the browser clock.
/// On the server this returns a Unix-epoch-seconds string; the backend
/// treats the field as opaque.
#[must_use]
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        secs.to_string()
    }
}
