use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DecodeWarning;

/// Records extracted from one operation, together with the decode warnings
/// raised while building them.
#[derive(Debug, Clone, Serialize)]
pub struct Scraped<T> {
    pub data: T,
    pub warnings: Vec<DecodeWarning>,
}

impl<T> Scraped<T> {
    /// Discard the warnings and keep only the records.
    pub fn into_inner(self) -> T {
        self.data
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Convert a millisecond `data-unix` attribute into a timestamp.
pub(crate) fn parse_unix_millis(raw: &str) -> Option<DateTime<Utc>> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unix_millis() {
        let date = parse_unix_millis("1700000000000").unwrap();
        assert_eq!(date.timestamp(), 1_700_000_000);
        assert!(parse_unix_millis("Now").is_none());
        assert!(parse_unix_millis("").is_none());
    }
}
