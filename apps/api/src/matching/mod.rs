//! JD matching over the stored catalog.
//!
//! Thin layer over `jd_match`: ranks `ProjectRecord`s and attaches each
//! project's score and highlight keywords for display.

pub mod handlers;

use jd_match::{matched_keywords_parsed, JdMatcher, ParsedJd};
use serde::Serialize;

use crate::models::project::ProjectRecord;

/// A catalog project in ranked order, with what the admin UI renders next to it.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProject {
    #[serde(flatten)]
    pub record: ProjectRecord,
    pub score: u32,
    pub matched_keywords: Vec<String>,
}

/// Ranks the catalog against `jd_text`. Ties keep catalog order.
pub fn rank_catalog(
    matcher: &JdMatcher,
    records: &[ProjectRecord],
    jd_text: &str,
) -> (ParsedJd, Vec<RankedProject>) {
    let parsed_jd = matcher.parse(jd_text);

    let ranked = matcher
        .rank_scored(records, &parsed_jd)
        .into_iter()
        .map(|(record, score)| RankedProject {
            score,
            matched_keywords: matched_keywords_parsed(&record.project, &parsed_jd),
            record,
        })
        .collect();

    (parsed_jd, ranked)
}
