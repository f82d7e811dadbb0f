//! Project Scorer: integer relevance of one project against a parsed JD.
//!
//! Additive, uncapped:
//! 1. every JD keyword found in the project corpus → `corpus_keyword`
//! 2. every declared project tag equal (case-insensitive) to a JD keyword → `exact_tag`
//! 3. every JD position found in the project corpus → `position`
//!
//! Rules 1 and 2 overlap on purpose: a tagged keyword scores both.

use serde::{Deserialize, Serialize};

use crate::parser::ParsedJd;
use crate::project::Project;

/// Points awarded per signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub corpus_keyword: u32,
    pub exact_tag: u32,
    pub position: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            corpus_keyword: 10,
            exact_tag: 15,
            position: 5,
        }
    }
}

/// Lowercase, space-joined text of every descriptive field and tag.
///
/// Fields are joined with a plain space, so a term may match across a field
/// boundary.
pub fn project_corpus(project: &Project) -> String {
    [
        project.name.as_str(),
        project.role.as_str(),
        project.situation.as_str(),
        project.task.as_str(),
        project.action.as_str(),
        project.result.as_str(),
    ]
    .into_iter()
    .chain(project.keywords.iter().map(String::as_str))
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Scores with the default weights (10 / 15 / 5).
pub fn score(project: &Project, parsed_jd: &ParsedJd) -> u32 {
    score_with(project, parsed_jd, &MatchWeights::default())
}

pub fn score_with(project: &Project, parsed_jd: &ParsedJd, weights: &MatchWeights) -> u32 {
    let corpus = project_corpus(project);

    let corpus_hits = count_contained(&parsed_jd.keywords, &corpus);
    let position_hits = count_contained(&parsed_jd.positions, &corpus);
    let tag_hits = project
        .keywords
        .iter()
        .map(|tag| tag.to_lowercase())
        .filter(|tag| parsed_jd.keywords.iter().any(|kw| kw == tag))
        .count() as u32;

    // Saturates at u32::MAX so oversized custom weights cannot wrap the ordering.
    corpus_hits
        .saturating_mul(weights.corpus_keyword)
        .saturating_add(tag_hits.saturating_mul(weights.exact_tag))
        .saturating_add(position_hits.saturating_mul(weights.position))
}

fn count_contained(terms: &[String], corpus: &str) -> u32 {
    terms.iter().filter(|t| corpus.contains(t.as_str())).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::vocabulary::Vocabulary;

    fn vocab() -> Vocabulary {
        Vocabulary::new(["react", "typescript", "docker"], ["前端", "架构师"])
    }

    fn project(keywords: &[&str], action: &str) -> Project {
        Project {
            name: "Portfolio".to_string(),
            action: action.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_corpus_joins_fields_and_tags_lowercased() {
        let p = Project {
            name: "Shop".to_string(),
            role: "Lead".to_string(),
            situation: "S".to_string(),
            task: "T".to_string(),
            action: "A".to_string(),
            result: "R".to_string(),
            keywords: vec!["React".to_string(), "Go".to_string()],
        };
        assert_eq!(project_corpus(&p), "shop lead s t a r react go");
    }

    #[test]
    fn test_tag_and_corpus_signals_double_count() {
        let p = project(&["React"], "Rebuilt the dashboard in react");
        let parsed = parse(&vocab(), "react");
        // corpus hit (+10) plus exact tag hit (+15)
        assert_eq!(score(&p, &parsed), 25);
    }

    #[test]
    fn test_tag_alone_still_counts_corpus_hit() {
        // Tags are part of the corpus, so a tag match always brings the corpus hit too.
        let p = project(&["Docker"], "nothing relevant");
        let parsed = parse(&vocab(), "docker");
        assert_eq!(score(&p, &parsed), 25);
    }

    #[test]
    fn test_tag_match_is_exact_not_substring() {
        let p = project(&["React Hooks"], "");
        let parsed = parse(&vocab(), "react");
        // corpus contains "react" (+10), tag "react hooks" != "react"
        assert_eq!(score(&p, &parsed), 10);
    }

    #[test]
    fn test_duplicate_tags_count_each() {
        let p = project(&["react", "React"], "");
        let parsed = parse(&vocab(), "react");
        assert_eq!(score(&p, &parsed), 10 + 15 + 15);
    }

    #[test]
    fn test_position_terms_add_five_each() {
        let p = Project {
            name: "Design system".to_string(),
            role: "前端架构师".to_string(),
            ..Default::default()
        };
        let parsed = parse(&vocab(), "招聘前端架构师");
        assert_eq!(score(&p, &parsed), 10);
    }

    #[test]
    fn test_no_relevance_scores_zero() {
        let p = project(&["Python"], "Built a crawler");
        let parsed = parse(&vocab(), "react typescript 前端");
        assert_eq!(score(&p, &parsed), 0);
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let p = project(&["React"], "react everywhere");
        assert_eq!(score(&p, &parse(&vocab(), "")), 0);
    }

    #[test]
    fn test_custom_weights() {
        let p = project(&["React"], "");
        let parsed = parse(&vocab(), "react 前端");
        let weights = MatchWeights {
            corpus_keyword: 1,
            exact_tag: 2,
            position: 100,
        };
        assert_eq!(score_with(&p, &parsed, &weights), 3);
    }

    #[test]
    fn test_oversized_weights_saturate_instead_of_overflowing() {
        let weights = MatchWeights {
            corpus_keyword: u32::MAX / 2 + 1,
            exact_tag: 1,
            position: 1,
        };
        let parsed = parse(&vocab(), "react docker");
        let both = project(&[], "react and docker");
        let one = project(&[], "docker only");

        assert_eq!(score_with(&both, &parsed, &weights), u32::MAX);
        assert_eq!(score_with(&one, &parsed, &weights), u32::MAX / 2 + 1);
        assert!(score_with(&both, &parsed, &weights) > score_with(&one, &parsed, &weights));
    }

    #[test]
    fn test_default_weights() {
        let w = MatchWeights::default();
        assert_eq!((w.corpus_keyword, w.exact_tag, w.position), (10, 15, 5));
    }
}
