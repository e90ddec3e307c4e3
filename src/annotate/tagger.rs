//! Part-of-speech tagging, lemmatization, and shallow dependency roles.
//!
//! A lexicon-plus-heuristics tagger: closed-class words and common résumé
//! verbs come from fixed tables, everything else falls through suffix and
//! capitalization rules. The lemma table is exhaustive for the verbs the
//! skills extractor keys on (develop, design, build); other verbs get a
//! best-effort suffix strip.

use std::collections::{HashMap, HashSet};

use crate::model::{DepRole, PosTag, Sentence, Token};

pub struct Tagger {
    determiners: HashSet<&'static str>,
    adpositions: HashSet<&'static str>,
    pronouns: HashSet<&'static str>,
    conjunctions: HashSet<&'static str>,
    adjectives: HashSet<&'static str>,
    verb_lemmas: HashMap<&'static str, &'static str>,
}

impl Tagger {
    pub fn new() -> Self {
        let verb_lemmas: HashMap<&'static str, &'static str> = [
            // copula and auxiliaries
            ("be", "be"),
            ("am", "be"),
            ("is", "be"),
            ("are", "be"),
            ("was", "be"),
            ("were", "be"),
            ("been", "be"),
            ("being", "be"),
            ("have", "have"),
            ("has", "have"),
            ("had", "have"),
            // the verbs the skills extractor keys on, all inflections
            ("develop", "develop"),
            ("develops", "develop"),
            ("developed", "develop"),
            ("developing", "develop"),
            ("design", "design"),
            ("designs", "design"),
            ("designed", "design"),
            ("designing", "design"),
            ("build", "build"),
            ("builds", "build"),
            ("built", "build"),
            ("building", "build"),
            // common résumé verbs
            ("work", "work"),
            ("works", "work"),
            ("worked", "work"),
            ("working", "work"),
            ("manage", "manage"),
            ("manages", "manage"),
            ("managed", "manage"),
            ("managing", "manage"),
            ("lead", "lead"),
            ("leads", "lead"),
            ("led", "lead"),
            ("leading", "lead"),
            ("create", "create"),
            ("creates", "create"),
            ("created", "create"),
            ("creating", "create"),
            ("implement", "implement"),
            ("implements", "implement"),
            ("implemented", "implement"),
            ("implementing", "implement"),
            ("deploy", "deploy"),
            ("deploys", "deploy"),
            ("deployed", "deploy"),
            ("deploying", "deploy"),
            ("maintain", "maintain"),
            ("maintains", "maintain"),
            ("maintained", "maintain"),
            ("maintaining", "maintain"),
            ("deliver", "deliver"),
            ("delivers", "deliver"),
            ("delivered", "deliver"),
            ("delivering", "deliver"),
            ("ship", "ship"),
            ("ships", "ship"),
            ("shipped", "ship"),
            ("shipping", "ship"),
            ("write", "write"),
            ("writes", "write"),
            ("wrote", "write"),
            ("written", "write"),
            ("architect", "architect"),
            ("architected", "architect"),
            ("migrate", "migrate"),
            ("migrated", "migrate"),
            ("automate", "automate"),
            ("automated", "automate"),
        ]
        .into_iter()
        .collect();

        Self {
            determiners: ["the", "a", "an", "this", "that", "these", "those"]
                .into_iter()
                .collect(),
            adpositions: [
                "at", "in", "on", "of", "for", "with", "from", "to", "by", "as", "over", "under",
                "during", "since", "across", "through",
            ]
            .into_iter()
            .collect(),
            pronouns: [
                "i", "we", "he", "she", "they", "you", "it", "me", "us", "them", "my", "our",
                "his", "her", "their", "its", "your",
            ]
            .into_iter()
            .collect(),
            conjunctions: ["and", "or", "but", "nor"].into_iter().collect(),
            adjectives: [
                "senior", "junior", "scalable", "distributed", "technical", "certified",
                "professional", "experienced", "strong", "robust", "agile", "responsible",
                "proficient", "new", "large", "full", "current",
            ]
            .into_iter()
            .collect(),
            verb_lemmas,
        }
    }

    /// Assign a part-of-speech tag and lemma to every token, then mark
    /// copula attributes.
    pub fn tag(&self, tokens: &mut [Token], sentences: &[Sentence]) {
        let initials: HashSet<usize> = sentences.iter().map(|s| s.token_start).collect();

        for (i, token) in tokens.iter_mut().enumerate() {
            let lower = token.text.to_lowercase();
            let (pos, lemma) = self.classify(&token.text, &lower, initials.contains(&i));
            token.pos = pos;
            token.lemma = lemma;
        }

        self.assign_attributes(tokens, sentences);
    }

    fn classify(&self, surface: &str, lower: &str, sentence_initial: bool) -> (PosTag, String) {
        if !surface.chars().any(|c| c.is_alphanumeric()) {
            return (PosTag::Punctuation, surface.to_string());
        }
        if surface.starts_with(|c: char| c.is_ascii_digit()) {
            return (PosTag::Number, lower.to_string());
        }
        if self.determiners.contains(lower) {
            return (PosTag::Determiner, lower.to_string());
        }
        if self.adpositions.contains(lower) {
            return (PosTag::Adposition, lower.to_string());
        }
        if self.pronouns.contains(lower) {
            return (PosTag::Pronoun, lower.to_string());
        }
        if self.conjunctions.contains(lower) {
            return (PosTag::Conjunction, lower.to_string());
        }
        if let Some(lemma) = self.verb_lemmas.get(lower) {
            return (PosTag::Verb, lemma.to_string());
        }
        if self.adjectives.contains(lower) {
            return (PosTag::Adjective, lower.to_string());
        }
        if lower.len() > 3 && lower.ends_with("ly") {
            return (PosTag::Adverb, lower.to_string());
        }
        if lower.len() >= 5 && (lower.ends_with("ing") || lower.ends_with("ed")) {
            return (PosTag::Verb, strip_verb_suffix(lower));
        }
        if lower.len() >= 5
            && ["able", "ible", "ous", "ful"]
                .iter()
                .any(|s| lower.ends_with(s))
        {
            return (PosTag::Adjective, lower.to_string());
        }
        let capitalized = surface.chars().next().is_some_and(|c| c.is_uppercase());
        if capitalized && !sentence_initial {
            return (PosTag::ProperNoun, lower.to_string());
        }
        (PosTag::Noun, lower.to_string())
    }

    /// Mark nominal complements of a copula: "is a senior engineer" marks
    /// "engineer" (and the nominal run it sits in) as an attribute.
    fn assign_attributes(&self, tokens: &mut [Token], sentences: &[Sentence]) {
        for sentence in sentences {
            let mut i = sentence.token_start;
            while i < sentence.token_end {
                if tokens[i].pos == PosTag::Verb && tokens[i].lemma == "be" {
                    let mut j = i + 1;
                    while j < sentence.token_end
                        && matches!(
                            tokens[j].pos,
                            PosTag::Determiner
                                | PosTag::Adjective
                                | PosTag::Adverb
                                | PosTag::Number
                        )
                    {
                        j += 1;
                    }
                    while j < sentence.token_end && tokens[j].pos.is_nominal() {
                        tokens[j].dep = DepRole::Attribute;
                        j += 1;
                    }
                    i = j;
                } else {
                    i += 1;
                }
            }
        }
    }
}

impl Default for Tagger {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort stem for verbs outside the lemma table.
fn strip_verb_suffix(lower: &str) -> String {
    let stem = lower
        .strip_suffix("ing")
        .or_else(|| lower.strip_suffix("ed"))
        .unwrap_or(lower);

    // Collapse a doubled final consonant ("shipp" -> "ship")
    let bytes = stem.as_bytes();
    if bytes.len() >= 3
        && bytes[bytes.len() - 1] == bytes[bytes.len() - 2]
        && !matches!(bytes[bytes.len() - 1], b'a' | b'e' | b'i' | b'o' | b'u' | b's' | b'l')
    {
        return stem[..stem.len() - 1].to_string();
    }
    stem.to_string()
}
