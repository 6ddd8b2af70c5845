//! Wall-clock helpers that work on both the server and in the browser

/// Current time as an ISO-8601 UTC string with milliseconds
pub fn now_iso8601() -> String {
    #[cfg(not(feature = "ssr"))]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(feature = "ssr")]
    {
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    }
}

/// Current calendar year, for the footer
pub fn current_year() -> i32 {
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(feature = "ssr")]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_iso8601_format() {
        let now = now_iso8601();
        // e.g. 2026-10-18T09:30:00.123Z
        assert_eq!(now.len(), 24);
        assert!(now.ends_with('Z'));
        assert_eq!(&now[10..11], "T");
        assert_eq!(&now[19..20], ".");
    }

    #[test]
    fn test_current_year_is_plausible() {
        assert!(current_year() >= 2025);
    }
}
