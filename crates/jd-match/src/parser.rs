//! JD Parser: picks the vocabulary terms a raw job description mentions.
//!
//! Matching is plain substring containment on the lowercased text, not
//! word-boundary matching: `"go"` is found inside `"mongodb"` and `"google"`.
//! Overlapping terms all match (`"react"` and `"react native"` together).

use serde::{Deserialize, Serialize};

use crate::vocabulary::Vocabulary;

/// Terms found in one job description. Created fresh per call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedJd {
    /// Technical terms, in vocabulary order.
    pub keywords: Vec<String>,
    /// Position/role terms, in vocabulary order.
    pub positions: Vec<String>,
    pub raw_text: String,
}

impl ParsedJd {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.positions.is_empty()
    }
}

/// Scans `jd_text` against both term lists. Total over any input.
pub fn parse(vocabulary: &Vocabulary, jd_text: &str) -> ParsedJd {
    let lowered = jd_text.to_lowercase();

    ParsedJd {
        keywords: contained_terms(vocabulary.keywords(), &lowered),
        positions: contained_terms(vocabulary.positions(), &lowered),
        raw_text: jd_text.to_string(),
    }
}

fn contained_terms(terms: &[String], haystack: &str) -> Vec<String> {
    terms
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .cloned()
        .collect()
}
