//! Configurable entity rules matched over token sequences.
//!
//! A rule is a label plus a sequence of token patterns; rule sets are plain
//! data and deserialize from JSON, so the built-in vocabularies can be
//! replaced or extended at startup without touching code.

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{EntityLabel, Token};

/// A matcher for one token position.
///
/// Serialized in a compact shorthand: `{"lower": "certified"}`,
/// `{"lower_in": ["java", "python"]}`, `{"lower_regex": "^[a-z]+"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPattern {
    /// Exact match against the lowercased token
    Lower(String),
    /// Lowercased token is a member of the set
    LowerIn(Vec<String>),
    /// Regex applied to the lowercased token
    LowerRegex(String),
}

/// One labeling rule: a token-pattern sequence and the label it assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRule {
    pub label: EntityLabel,
    pub pattern: Vec<TokenPattern>,
}

impl EntityRule {
    fn new(label: EntityLabel, pattern: Vec<TokenPattern>) -> Self {
        Self { label, pattern }
    }

    /// The built-in rule sets: TECH and TOOL vocabularies, the
    /// "certified ..." certification pattern, and job-title phrases.
    pub fn defaults() -> Vec<EntityRule> {
        fn lower_in(words: &[&str]) -> TokenPattern {
            TokenPattern::LowerIn(words.iter().map(|w| w.to_string()).collect())
        }

        const SENIORITY: &[&str] = &["senior", "junior", "lead", "principal", "staff", "chief"];
        const DOMAIN: &[&str] = &[
            "software", "data", "devops", "systems", "cloud", "backend", "frontend", "platform",
            "security", "infrastructure",
        ];
        const ROLE: &[&str] = &[
            "engineer", "developer", "architect", "manager", "analyst", "consultant",
            "administrator", "scientist",
        ];

        vec![
            EntityRule::new(
                EntityLabel::Tech,
                vec![lower_in(&["java", "python", "aws"])],
            ),
            EntityRule::new(
                EntityLabel::Tool,
                vec![lower_in(&["docker", "jenkins", "kubernetes"])],
            ),
            EntityRule::new(
                EntityLabel::Certification,
                vec![
                    TokenPattern::Lower("certified".to_string()),
                    TokenPattern::LowerRegex("^[a-z]+".to_string()),
                ],
            ),
            // Longer title rules first so they win ties at a position.
            EntityRule::new(
                EntityLabel::Title,
                vec![lower_in(SENIORITY), lower_in(DOMAIN), lower_in(ROLE)],
            ),
            EntityRule::new(EntityLabel::Title, vec![lower_in(SENIORITY), lower_in(ROLE)]),
            EntityRule::new(EntityLabel::Title, vec![lower_in(DOMAIN), lower_in(ROLE)]),
        ]
    }
}

enum Matcher {
    Literal(String),
    Set(HashSet<String>),
    Pattern(Regex),
}

impl Matcher {
    fn matches(&self, lower: &str) -> bool {
        match self {
            Matcher::Literal(word) => word == lower,
            Matcher::Set(words) => words.contains(lower),
            Matcher::Pattern(re) => re.is_match(lower),
        }
    }
}

struct CompiledRule {
    label: EntityLabel,
    matchers: Vec<Matcher>,
}

/// A ruler match over a token range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulerMatch {
    pub token_start: usize,
    pub token_end: usize,
    pub label: EntityLabel,
}

/// Compiled rule sets, built once and reused across documents.
pub struct EntityRuler {
    rules: Vec<CompiledRule>,
}

impl EntityRuler {
    /// Compile the given rules. Fails on an invalid regex pattern.
    pub fn new(rules: &[EntityRule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let mut matchers = Vec::with_capacity(rule.pattern.len());
            for pattern in &rule.pattern {
                matchers.push(match pattern {
                    TokenPattern::Lower(word) => Matcher::Literal(word.to_lowercase()),
                    TokenPattern::LowerIn(words) => {
                        Matcher::Set(words.iter().map(|w| w.to_lowercase()).collect())
                    }
                    TokenPattern::LowerRegex(source) => Matcher::Pattern(
                        Regex::new(source)
                            .map_err(|e| Error::Config(format!("invalid rule pattern: {}", e)))?,
                    ),
                });
            }
            compiled.push(CompiledRule {
                label: rule.label,
                matchers,
            });
        }
        Ok(Self { rules: compiled })
    }

    /// Greedy left-to-right matching: at each position the longest matching
    /// rule wins (earlier rules win length ties), claims its tokens, and
    /// the scan resumes after it.
    pub fn find_matches(&self, tokens: &[Token]) -> Vec<RulerMatch> {
        let lowers: Vec<String> = tokens.iter().map(|t| t.lower()).collect();
        let mut matches = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let mut best: Option<(usize, EntityLabel)> = None;
            for rule in &self.rules {
                let len = rule.matchers.len();
                if i + len > tokens.len() {
                    continue;
                }
                let hit = rule
                    .matchers
                    .iter()
                    .zip(&lowers[i..i + len])
                    .all(|(matcher, lower)| matcher.matches(lower));
                if hit && best.map_or(true, |(best_len, _)| len > best_len) {
                    best = Some((len, rule.label));
                }
            }

            match best {
                Some((len, label)) => {
                    matches.push(RulerMatch {
                        token_start: i,
                        token_end: i + len,
                        label,
                    });
                    i += len;
                }
                None => i += 1,
            }
        }

        matches
    }
}
