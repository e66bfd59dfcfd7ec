//! Date and timestamp parsing for source columns.
//!
//! Parsing never fails loudly: anything unrecognized becomes `None`.

use chrono::{NaiveDate, NaiveDateTime};

/// Accepted date and timestamp layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatConfig {
    /// Date formats tried in order
    pub date_formats: Vec<String>,
    /// Timestamp formats tried in order
    pub timestamp_formats: Vec<String>,
    /// Guess the format from separators when no listed format matches
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(),
                "%Y/%m/%d".to_string(),
                "%d/%m/%Y".to_string(),
                "%d.%m.%Y".to_string(),
                "%Y%m%d".to_string(),
            ],
            timestamp_formats: vec![
                "%Y-%m-%d %H:%M:%S".to_string(),
                "%Y-%m-%dT%H:%M:%S".to_string(),
                "%Y-%m-%d %H:%M:%S%.f".to_string(),
                "%Y-%m-%dT%H:%M:%S%.f".to_string(),
                "%Y-%m-%d %H:%M".to_string(),
                "%Y/%m/%d %H:%M:%S".to_string(),
                "%d/%m/%Y %H:%M:%S".to_string(),
                "%d/%m/%Y %H:%M".to_string(),
                "%d.%m.%Y %H:%M:%S".to_string(),
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
///
/// Timestamp strings are accepted too; their date part is kept.
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = parse_date_only(s, config) {
        return Some(date);
    }

    if let Some(timestamp) = parse_timestamp_only(s, config) {
        return Some(timestamp.date());
    }

    // Non-ISO dates followed by a time: parse the leading date token alone
    let date_part = s
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .filter(|part| part.len() < s.len())?;
    parse_date_only(date_part, config)
}

fn parse_date_only(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    if let Some(date) = config
        .date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
    {
        return Some(date);
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            return NaiveDate::parse_from_str(s, detected_format).ok();
        }
    }

    None
}

/// Parse a timestamp string; a bare date is read as midnight
#[must_use]
pub fn parse_timestamp_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    parse_timestamp_only(s, config).or_else(|| {
        parse_date_string(s, config).and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

fn parse_timestamp_only(s: &str, config: &DateFormatConfig) -> Option<NaiveDateTime> {
    config
        .timestamp_formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // YYYY-MM-DD
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d");
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d");
            } else if parts[2].len() == 4 {
                // Day-first is the local convention
                return Some("%d/%m/%Y");
            }
        }
    }

    if s.contains('-') {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d-%m-%Y");
        }
    }

    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y");
        }
    }

    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}
