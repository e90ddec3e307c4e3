//! Built-in recognizers for DATE and ORG spans.
//!
//! Dates cover the forms résumés actually carry: month-name dates
//! ("January 2015", "March 3, 2015", "3 March 2015"), single-token numeric
//! dates ("03/2016", "03/07/2016"), dash-separated numeric dates
//! ("2015-03", "2015-03-07"), and bare years. A year range like
//! "2015 - 2019" surfaces as its two endpoint years. Organizations are
//! capitalized runs ending in a corporate suffix ("Acme Corp").

use std::collections::HashSet;

use regex::Regex;

use crate::dates::month_from_name;
use crate::model::{EntityLabel, Token};

/// A candidate entity span over a token range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NerMatch {
    pub token_start: usize,
    pub token_end: usize,
    pub label: EntityLabel,
}

pub struct NerRecognizer {
    single_date_re: Regex,
    org_suffixes: HashSet<&'static str>,
}

impl NerRecognizer {
    pub fn new() -> Self {
        Self {
            single_date_re: Regex::new(r"^(?:\d{1,2}/\d{4}|\d{4}/\d{1,2}|\d{1,2}/\d{1,2}/\d{4})$")
                .unwrap(),
            org_suffixes: [
                "corp", "inc", "llc", "ltd", "co", "plc", "gmbh", "technologies", "labs",
                "systems", "solutions", "software", "group", "consulting", "partners",
            ]
            .into_iter()
            .collect(),
        }
    }

    /// Scan left to right; a match claims its tokens and the scan resumes
    /// after it. Dates are tried before organizations.
    pub fn find_matches(&self, tokens: &[Token]) -> Vec<NerMatch> {
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if let Some(end) = self.date_at(tokens, i) {
                matches.push(NerMatch {
                    token_start: i,
                    token_end: end,
                    label: EntityLabel::Date,
                });
                i = end;
            } else if let Some(end) = self.org_at(tokens, i) {
                matches.push(NerMatch {
                    token_start: i,
                    token_end: end,
                    label: EntityLabel::Org,
                });
                i = end;
            } else {
                i += 1;
            }
        }

        matches
    }

    fn date_at(&self, tokens: &[Token], i: usize) -> Option<usize> {
        if month_from_name(&tokens[i].lower()).is_some() {
            // Month Day, Year
            if is_day(tokens, i + 1) && is_text(tokens, i + 2, ",") && is_year(tokens, i + 3) {
                return Some(i + 4);
            }
            // Month Day Year
            if is_day(tokens, i + 1) && is_year(tokens, i + 2) {
                return Some(i + 3);
            }
            // Month Year
            if is_year(tokens, i + 1) {
                return Some(i + 2);
            }
            return None;
        }

        // Day Month Year
        if is_day(tokens, i)
            && tokens
                .get(i + 1)
                .is_some_and(|t| month_from_name(&t.lower()).is_some())
            && is_year(tokens, i + 2)
        {
            return Some(i + 3);
        }

        // Slash-separated forms are single tokens
        if self.single_date_re.is_match(&tokens[i].text) {
            return Some(i + 1);
        }

        if is_year(tokens, i) {
            // Year-Month[-Day]; a second 4-digit number is a range, and the
            // endpoint years match on their own.
            if is_text(tokens, i + 1, "-") && is_month_num(tokens, i + 2) {
                if is_text(tokens, i + 3, "-") && is_day(tokens, i + 4) {
                    return Some(i + 5);
                }
                return Some(i + 3);
            }
            return Some(i + 1);
        }

        None
    }

    fn org_at(&self, tokens: &[Token], i: usize) -> Option<usize> {
        if !capitalized(&tokens[i]) {
            return None;
        }

        let mut j = i;
        while j < tokens.len() && (capitalized(&tokens[j]) || tokens[j].text == "&") {
            j += 1;
        }

        // The run is an organization only if a later token is a corporate
        // suffix; the span ends at the last suffix in the run.
        let last_suffix = (i + 1..j)
            .rev()
            .find(|&k| {
                let lower = tokens[k].lower();
                self.org_suffixes.contains(lower.trim_end_matches('.'))
            })?;
        Some(last_suffix + 1)
    }
}

impl Default for NerRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalized(token: &Token) -> bool {
    token.text.chars().next().is_some_and(|c| c.is_uppercase())
}

fn is_text(tokens: &[Token], i: usize, s: &str) -> bool {
    tokens.get(i).is_some_and(|t| t.text == s)
}

fn is_year(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| {
        t.text.len() == 4
            && t.text.chars().all(|c| c.is_ascii_digit())
            && (1900..=2099).contains(&t.text.parse::<i32>().unwrap_or(0))
    })
}

fn is_day(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| {
        t.text.len() <= 2
            && !t.text.is_empty()
            && t.text.chars().all(|c| c.is_ascii_digit())
            && (1..=31).contains(&t.text.parse::<u32>().unwrap_or(0))
    })
}

fn is_month_num(tokens: &[Token], i: usize) -> bool {
    tokens.get(i).is_some_and(|t| {
        t.text.len() <= 2
            && !t.text.is_empty()
            && t.text.chars().all(|c| c.is_ascii_digit())
            && (1..=12).contains(&t.text.parse::<u32>().unwrap_or(0))
    })
}
