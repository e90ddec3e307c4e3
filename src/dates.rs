//! Flexible parsing of date mentions found in résumé text.
//!
//! DATE entities arrive as free-form strings ("January 2015", "03/2016",
//! "March 3, 2015"). Each form is tried in turn; missing components default
//! to the first day/month so the experience arithmetic stays deterministic.
//! Anything unrecognized is `None` and gets discarded by the caller.

use chrono::NaiveDate;
use regex::Regex;

/// Parse a free-form date mention into a calendar date.
pub fn parse_flexible(s: &str) -> Option<NaiveDate> {
    let cleaned = clean(s);
    if cleaned.is_empty() {
        return None;
    }

    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    match parts.len() {
        1 => parse_numeric(parts[0]),
        2 => parse_month_year(parts[0], parts[1]),
        3 => parse_month_day_year(parts[0], parts[1], parts[2])
            .or_else(|| parse_day_month_year(parts[0], parts[1], parts[2])),
        _ => None,
    }
}

/// Collapse whitespace, strip ordinal suffixes ("3rd" → "3") and trailing
/// punctuation from each part.
fn clean(s: &str) -> String {
    let ordinal = Regex::new(r"(?i)\b(\d{1,2})(st|nd|rd|th)\b").unwrap();
    let s = ordinal.replace_all(s.trim(), "$1");
    s.split_whitespace()
        .map(|part| part.trim_matches(|c: char| c == ',' || c == ';'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-token numeric forms.
fn parse_numeric(s: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    // Month/year: "03/2015" or "03-2015"
    let month_year = Regex::new(r"^(\d{1,2})[/-](\d{4})$").unwrap();
    if let Some(caps) = month_year.captures(s) {
        let month: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[2].parse().ok()?;
        return ymd(year, month, 1);
    }

    // Year/month: "2015-03"
    let year_month = Regex::new(r"^(\d{4})[/-](\d{1,2})$").unwrap();
    if let Some(caps) = year_month.captures(s) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        return ymd(year, month, 1);
    }

    // Bare year
    if s.len() == 4 {
        if let Ok(year) = s.parse::<i32>() {
            return ymd(year, 1, 1);
        }
    }

    None
}

/// "January 2015", "Jan 2015"
fn parse_month_year(month: &str, year: &str) -> Option<NaiveDate> {
    let month = month_from_name(month)?;
    let year = parse_year(year)?;
    ymd(year, month, 1)
}

/// "January 5 2015" (comma already stripped)
fn parse_month_day_year(month: &str, day: &str, year: &str) -> Option<NaiveDate> {
    let month = month_from_name(month)?;
    let day: u32 = day.parse().ok()?;
    let year = parse_year(year)?;
    ymd(year, month, day)
}

/// "5 January 2015"
fn parse_day_month_year(day: &str, month: &str, year: &str) -> Option<NaiveDate> {
    let day: u32 = day.parse().ok()?;
    let month = month_from_name(month)?;
    let year = parse_year(year)?;
    ymd(year, month, day)
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() != 4 {
        return None;
    }
    s.parse().ok()
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !(1000..=2999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolve an English month name or abbreviation (min. 3 letters).
pub(crate) fn month_from_name(name: &str) -> Option<u32> {
    const MONTHS: [(&str, u32); 12] = [
        ("january", 1),
        ("february", 2),
        ("march", 3),
        ("april", 4),
        ("may", 5),
        ("june", 6),
        ("july", 7),
        ("august", 8),
        ("september", 9),
        ("october", 10),
        ("november", 11),
        ("december", 12),
    ];

    let name = name.trim_end_matches('.').to_lowercase();
    if name.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .find(|(full, _)| full.starts_with(&name) || name == *full)
        .map(|(_, num)| *num)
}
