//! JD matching core: extract vocabulary terms from a job description, score
//! and rank portfolio projects against them, and pick the keywords a project
//! can be highlighted for.
//!
//! Every operation is pure and total. The only shared input is an immutable
//! [`Vocabulary`], which callers build once and pass in (or hold through a
//! [`JdMatcher`]).

pub mod highlight;
pub mod parser;
pub mod project;
pub mod ranker;
pub mod scorer;
pub mod vocabulary;

use std::sync::Arc;

pub use highlight::{matched_keywords, matched_keywords_parsed};
pub use parser::{parse, ParsedJd};
pub use project::Project;
pub use ranker::{rank, rank_scored, rank_with};
pub use scorer::{project_corpus, score, score_with, MatchWeights};
pub use vocabulary::Vocabulary;

/// A vocabulary and weight set bundled for injection into an application.
///
/// Cheap to clone; the vocabulary is shared, never mutated.
#[derive(Debug, Clone)]
pub struct JdMatcher {
    vocabulary: Arc<Vocabulary>,
    weights: MatchWeights,
}

impl JdMatcher {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
            weights: MatchWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn parse(&self, jd_text: &str) -> ParsedJd {
        parse(&self.vocabulary, jd_text)
    }

    pub fn score(&self, project: &Project, parsed_jd: &ParsedJd) -> u32 {
        score_with(project, parsed_jd, &self.weights)
    }

    pub fn rank<P>(&self, projects: &[P], jd_text: &str) -> Vec<P>
    where
        P: AsRef<Project> + Clone,
    {
        rank_with(&self.vocabulary, &self.weights, projects, jd_text)
    }

    /// Ranks against a JD the caller already parsed, returning each score.
    pub fn rank_scored<P>(&self, projects: &[P], parsed_jd: &ParsedJd) -> Vec<(P, u32)>
    where
        P: AsRef<Project> + Clone,
    {
        rank_scored(parsed_jd, &self.weights, projects)
    }

    pub fn matched_keywords(&self, project: &Project, jd_text: &str) -> Vec<String> {
        matched_keywords(&self.vocabulary, project, jd_text)
    }
}

impl Default for JdMatcher {
    fn default() -> Self {
        Self::new(Vocabulary::builtin().clone())
    }
}
