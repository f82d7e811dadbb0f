//! Project Ranker: orders a catalog by descending relevance to a JD.

use tracing::debug;

use crate::parser::{parse, ParsedJd};
use crate::project::Project;
use crate::scorer::{score_with, MatchWeights};
use crate::vocabulary::Vocabulary;

/// Ranks `projects` against `jd_text` with the default weights.
///
/// Returns a new vector; the input is left untouched. Equal scores keep
/// their input order, so an empty JD returns the catalog as given.
pub fn rank<P>(vocabulary: &Vocabulary, projects: &[P], jd_text: &str) -> Vec<P>
where
    P: AsRef<Project> + Clone,
{
    rank_with(vocabulary, &MatchWeights::default(), projects, jd_text)
}

pub fn rank_with<P>(
    vocabulary: &Vocabulary,
    weights: &MatchWeights,
    projects: &[P],
    jd_text: &str,
) -> Vec<P>
where
    P: AsRef<Project> + Clone,
{
    let parsed_jd = parse(vocabulary, jd_text);

    rank_scored(&parsed_jd, weights, projects)
        .into_iter()
        .map(|(p, _)| p)
        .collect()
}

/// Ranks against an already parsed JD and keeps each project's score.
///
/// Same ordering as [`rank_with`]; for callers that also display the score.
pub fn rank_scored<P>(
    parsed_jd: &ParsedJd,
    weights: &MatchWeights,
    projects: &[P],
) -> Vec<(P, u32)>
where
    P: AsRef<Project> + Clone,
{
    let mut scored: Vec<(u32, &P)> = projects
        .iter()
        .map(|p| (score_with(p.as_ref(), parsed_jd, weights), p))
        .collect();

    // `sort_by` is stable: ties keep catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    debug!(
        projects = projects.len(),
        keywords = parsed_jd.keywords.len(),
        positions = parsed_jd.positions.len(),
        top_score = scored.first().map(|(s, _)| *s).unwrap_or(0),
        "ranked projects against JD"
    );

    scored.into_iter().map(|(s, p)| (p.clone(), s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::new(["react", "typescript", "docker"], ["前端", "架构师"])
    }

    fn named(name: &str, keywords: &[&str], action: &str) -> Project {
        Project {
            name: name.to_string(),
            action: action.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        }
    }

    fn names(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_catalog_returns_empty() {
        let ranked: Vec<Project> = rank(&vocab(), &[], "react docker");
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_jd_is_identity() {
        let catalog = vec![
            named("a", &["Docker"], ""),
            named("b", &["React"], "react"),
            named("c", &[], ""),
        ];
        assert_eq!(rank(&vocab(), &catalog, ""), catalog);
        assert_eq!(rank(&vocab(), &catalog, "   "), catalog);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let catalog = vec![
            named("first", &["Python"], "crawler"),
            named("second", &["Kotlin"], "android"),
            named("third", &["Perl"], "scripts"),
        ];
        let ranked = rank(&vocab(), &catalog, "react typescript docker");
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_higher_score_moves_first() {
        let catalog = vec![
            named("low", &[], "docker"),
            named("high", &["React", "Docker"], "react with docker"),
            named("none", &[], ""),
        ];
        let ranked = rank(&vocab(), &catalog, "react docker");
        assert_eq!(names(&ranked), vec!["high", "low", "none"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let catalog = vec![named("none", &[], ""), named("hit", &["React"], "")];
        let before = catalog.clone();
        let _ = rank(&vocab(), &catalog, "react");
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let catalog = vec![
            named("a", &["React"], ""),
            named("b", &["Docker"], ""),
            named("c", &["React"], ""),
        ];
        let jd = "react docker 前端";
        assert_eq!(rank(&vocab(), &catalog, jd), rank(&vocab(), &catalog, jd));
    }

    #[test]
    fn test_concrete_scenario_ordering() {
        let a = named("A", &["React", "Vue"], "Led the Docker deployment");
        let b = named("B", &["Python"], "Wrote internal tooling");
        let jd = "We need a 前端 engineer skilled in React and Docker.";
        let ranked = rank(&vocab(), &[a.clone(), b.clone()], jd);
        assert_eq!(ranked, vec![a, b]);
    }

    #[test]
    fn test_rank_scored_matches_rank_and_scores() {
        let catalog = vec![
            named("low", &[], "docker"),
            named("high", &["React"], "react with docker"),
            named("none", &[], ""),
        ];
        let jd = "react docker";
        let parsed = parse(&vocab(), jd);
        let scored = rank_scored(&parsed, &MatchWeights::default(), &catalog);

        let order: Vec<Project> = scored.iter().map(|(p, _)| p.clone()).collect();
        assert_eq!(order, rank(&vocab(), &catalog, jd));
        let scores: Vec<u32> = scored.iter().map(|(_, s)| *s).collect();
        assert_eq!(scores, vec![35, 10, 0]);
    }

    #[derive(Clone)]
    struct Record {
        id: u32,
        project: Project,
    }

    impl AsRef<Project> for Record {
        fn as_ref(&self) -> &Project {
            &self.project
        }
    }

    #[test]
    fn test_wrapped_records_keep_their_identity() {
        let records = vec![
            Record { id: 1, project: named("x", &[], "") },
            Record { id: 2, project: named("y", &["TypeScript"], "") },
        ];
        let ranked = rank(&vocab(), &records, "typescript");
        assert_eq!(ranked.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }
}
