//! Newest-first ordering of feed entries by publication date.

use crate::feed::types::FeedEntry;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

/// Parses an RSS/Atom publication date.
///
/// Accepts RFC 2822 (including a `UTC`/`UT` zone), RFC 3339,
/// `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM:SS` and bare `YYYY-MM-DD`;
/// the last three are read as UTC.
pub fn parse_pub_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc2822(&utc_zone_to_offset(s)) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// chrono's RFC 2822 parser rejects the `UTC` and `UT` zone names.
fn utc_zone_to_offset(s: &str) -> String {
    for zone in [" UTC", " UT"] {
        if let Some(head) = s.strip_suffix(zone) {
            return format!("{head} +0000");
        }
    }
    s.to_string()
}

/// Orders entries newest first.
///
/// Entries whose date does not parse are logged and stay in their original
/// slot; the dated entries are stably sorted into the remaining slots.
pub fn sort_by_pub_date(entries: Vec<FeedEntry>) -> Vec<FeedEntry> {
    let mut slots: Vec<Option<FeedEntry>> = Vec::with_capacity(entries.len());
    let mut dated: Vec<(usize, DateTime<Utc>, FeedEntry)> = Vec::new();

    for (i, entry) in entries.into_iter().enumerate() {
        match parse_pub_date(&entry.pub_date) {
            Some(ts) => {
                dated.push((i, ts, entry));
                slots.push(None);
            }
            None => {
                warn!(pub_date = %entry.pub_date, link = %entry.link, "Invalid date found");
                slots.push(Some(entry));
            }
        }
    }

    let free: Vec<usize> = dated.iter().map(|(i, _, _)| *i).collect();
    dated.sort_by(|a, b| b.1.cmp(&a.1));

    for (slot, (_, _, entry)) in free.into_iter().zip(dated) {
        slots[slot] = Some(entry);
    }

    slots.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(pub_date: &str, link: &str) -> FeedEntry {
        FeedEntry {
            pub_date: pub_date.to_string(),
            link: link.to_string(),
            ..Default::default()
        }
    }

    fn links(entries: &[FeedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.link.as_str()).collect()
    }

    #[test]
    fn test_parse_formats() {
        let expected = "2024-03-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(parse_pub_date("2024-03-01"), Some(expected));
        assert_eq!(parse_pub_date("2024-03-01T00:00:00"), Some(expected));
        assert_eq!(parse_pub_date("2024-03-01T01:00:00+01:00"), Some(expected));
        assert_eq!(parse_pub_date("Fri, 01 Mar 2024 00:00:00 GMT"), Some(expected));
        assert_eq!(parse_pub_date(" Fri, 01 Mar 2024 00:00:00 +0000 "), Some(expected));
        assert_eq!(parse_pub_date("Fri, 01 Mar 2024 00:00:00 UTC"), Some(expected));
        assert_eq!(parse_pub_date("Fri, 01 Mar 2024 00:00:00 UT"), Some(expected));
        assert_eq!(parse_pub_date("2024-03-01 00:00:00"), Some(expected));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_pub_date(""), None);
        assert_eq!(parse_pub_date("last tuesday"), None);
        assert_eq!(parse_pub_date("2024-13-45"), None);
    }

    #[test]
    fn test_sorts_newest_first() {
        let sorted = sort_by_pub_date(vec![
            dated("2024-01-01", "jan"),
            dated("Fri, 01 Mar 2024 12:00:00 GMT", "mar"),
            dated("2024-02-10T08:00:00Z", "feb"),
        ]);
        assert_eq!(links(&sorted), vec!["mar", "feb", "jan"]);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let sorted = sort_by_pub_date(vec![
            dated("2024-01-01", "first"),
            dated("2024-05-01", "newest"),
            dated("2024-01-01", "second"),
        ]);
        assert_eq!(links(&sorted), vec!["newest", "first", "second"]);
    }

    #[test]
    fn test_invalid_dates_keep_their_slot() {
        let sorted = sort_by_pub_date(vec![
            dated("2024-01-01", "jan"),
            dated("not a date", "bad"),
            dated("2024-03-01", "mar"),
        ]);
        assert_eq!(links(&sorted), vec!["mar", "bad", "jan"]);
    }

    #[test]
    fn test_utc_zone_and_space_separated_dates_are_sorted() {
        let sorted = sort_by_pub_date(vec![
            dated("Mon, 29 Apr 2024 00:00:00 UTC", "apr"),
            dated("2024-05-02", "may"),
            dated("2024-04-30 10:00:00", "apr30"),
        ]);
        assert_eq!(links(&sorted), vec!["may", "apr30", "apr"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(sort_by_pub_date(Vec::new()).is_empty());
    }
}
