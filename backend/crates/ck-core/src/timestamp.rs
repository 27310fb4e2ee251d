use chrono::{DateTime, Utc};

/// Placeholder for a missing timestamp
pub const MISSING: &str = "-";

/// Render a backend timestamp for display.
///
/// RFC 3339 values are shown as `dd/mm/yyyy, HH:MM:SS` in UTC; anything else
/// is passed through untouched.
pub fn display(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return MISSING.to_string();
    };

    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%d/%m/%Y, %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
