//! Keyword Highlighter: which JD keywords a project can show evidence for.
//!
//! Evidence is narrower than the scorer's corpus: a declared tag (exact,
//! case-insensitive), the `action` text, or the `result` text. Name, role,
//! situation and task are not consulted.

use crate::parser::{parse, ParsedJd};
use crate::project::Project;
use crate::vocabulary::Vocabulary;

/// Parses `jd_text` and returns the evidenced keywords in vocabulary order.
pub fn matched_keywords(vocabulary: &Vocabulary, project: &Project, jd_text: &str) -> Vec<String> {
    matched_keywords_parsed(project, &parse(vocabulary, jd_text))
}

/// Same as [`matched_keywords`] for a JD that is already parsed.
pub fn matched_keywords_parsed(project: &Project, parsed_jd: &ParsedJd) -> Vec<String> {
    let tags: Vec<String> = project.keywords.iter().map(|k| k.to_lowercase()).collect();
    let action = project.action.to_lowercase();
    let result = project.result.to_lowercase();

    parsed_jd
        .keywords
        .iter()
        .filter(|kw| {
            tags.iter().any(|t| t == *kw)
                || action.contains(kw.as_str())
                || result.contains(kw.as_str())
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: &str = "We need a 前端 engineer skilled in React and Docker.";

    fn vocab() -> Vocabulary {
        Vocabulary::new(["react", "typescript", "docker"], ["前端", "架构师"])
    }

    #[test]
    fn test_tag_and_action_evidence() {
        let a = Project {
            name: "A".to_string(),
            action: "Owned the Docker deployment".to_string(),
            keywords: vec!["React".to_string(), "Vue".to_string()],
            ..Default::default()
        };
        assert_eq!(matched_keywords(&vocab(), &a, JD), vec!["react", "docker"]);
    }

    #[test]
    fn test_no_evidence_is_empty() {
        let b = Project {
            name: "B".to_string(),
            action: "Wrote internal tooling".to_string(),
            keywords: vec!["Python".to_string()],
            ..Default::default()
        };
        assert!(matched_keywords(&vocab(), &b, JD).is_empty());
    }

    #[test]
    fn test_result_field_counts_as_evidence() {
        let p = Project {
            result: "Cut TypeScript build times in half".to_string(),
            ..Default::default()
        };
        assert_eq!(matched_keywords(&vocab(), &p, "typescript"), vec!["typescript"]);
    }

    #[test]
    fn test_name_role_situation_task_are_ignored() {
        let p = Project {
            name: "React storefront".to_string(),
            role: "Docker admin".to_string(),
            situation: "typescript migration".to_string(),
            task: "react rewrite".to_string(),
            ..Default::default()
        };
        assert!(matched_keywords(&vocab(), &p, "react docker typescript").is_empty());
    }

    #[test]
    fn test_positions_are_never_highlighted() {
        let p = Project {
            action: "前端 work".to_string(),
            ..Default::default()
        };
        assert!(matched_keywords(&vocab(), &p, "前端").is_empty());
    }

    #[test]
    fn test_empty_jd_highlights_nothing() {
        let p = Project {
            action: "react docker".to_string(),
            keywords: vec!["React".to_string()],
            ..Default::default()
        };
        assert!(matched_keywords(&vocab(), &p, "").is_empty());
    }
}
