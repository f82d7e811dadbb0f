//! Resume tailoring: rank the catalog against a JD, keep the top projects,
//! and have the text generator rewrite them for that JD.
//!
//! Flow: list catalog → rank_catalog → take top `limit` → build prompt → generate.

use jd_match::{JdMatcher, ParsedJd};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::prompts::{TAILOR_PROMPT_TEMPLATE, TAILOR_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, LANGUAGE_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::matching::{rank_catalog, RankedProject};
use crate::models::project::ProjectRecord;

const DEFAULT_LIMIT: usize = 3;
const MAX_LIMIT: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct TailorRequest {
    pub jd_text: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TailorResponse {
    pub parsed_jd: ParsedJd,
    pub selected_projects: Vec<RankedProject>,
    pub resume_markdown: String,
}

/// Runs the tailoring pipeline over an already-loaded catalog.
pub async fn tailor_resume(
    matcher: &JdMatcher,
    generator: &dyn TextGenerator,
    records: &[ProjectRecord],
    request: &TailorRequest,
) -> Result<TailorResponse, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    if records.is_empty() {
        return Err(AppError::Validation(
            "No projects found. Add projects before tailoring a resume.".to_string(),
        ));
    }

    let limit = request.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let (parsed_jd, mut ranked) = rank_catalog(matcher, records, &request.jd_text);
    ranked.truncate(limit);

    info!(
        "Tailoring resume with {} projects (top score {})",
        ranked.len(),
        ranked.first().map(|r| r.score).unwrap_or(0)
    );

    let prompt = build_tailor_prompt(&ranked, &request.jd_text);
    let resume_markdown = generator
        .complete(&prompt, TAILOR_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume tailoring failed: {e}")))?;

    Ok(TailorResponse {
        parsed_jd,
        selected_projects: ranked,
        resume_markdown,
    })
}

fn build_tailor_prompt(ranked: &[RankedProject], jd_text: &str) -> String {
    let projects = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| format_project(i + 1, r))
        .collect::<Vec<_>>()
        .join("\n\n");

    TAILOR_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{language_instruction}", LANGUAGE_INSTRUCTION)
        .replace("{projects}", &projects)
        .replace("{jd_text}", jd_text.trim())
}

fn format_project(rank: usize, ranked: &RankedProject) -> String {
    let p = &ranked.record.project;
    let matched = if ranked.matched_keywords.is_empty() {
        "(none)".to_string()
    } else {
        ranked.matched_keywords.join(", ")
    };

    format!(
        "{rank}. {name} (role: {role})\n   Situation: {situation}\n   Task: {task}\n   Action: {action}\n   Result: {result}\n   Tags: {tags}\n   Matched keywords: {matched}",
        name = p.name,
        role = p.role,
        situation = p.situation,
        task = p.task,
        action = p.action,
        result = p.result,
        tags = p.keywords.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::tests::RecordingGenerator;
    use jd_match::{Project, Vocabulary};

    const JD: &str = "We need a 前端 engineer skilled in React and Docker.";

    fn matcher() -> JdMatcher {
        JdMatcher::new(Vocabulary::new(["react", "typescript", "docker"], ["前端", "架构师"]))
    }

    fn record(name: &str, keywords: &[&str], action: &str) -> ProjectRecord {
        ProjectRecord::new(Project {
            name: name.to_string(),
            role: "Lead".to_string(),
            action: action.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..Default::default()
        })
    }

    fn catalog() -> Vec<ProjectRecord> {
        vec![
            record("Crawler", &["Python"], "Scraped listings"),
            record("Storefront", &["React", "Vue"], "Docker deployment"),
            record("Dashboards", &["TypeScript"], "Charts"),
        ]
    }

    fn request(jd_text: &str, limit: Option<usize>) -> TailorRequest {
        TailorRequest {
            jd_text: jd_text.to_string(),
            limit,
        }
    }

    #[tokio::test]
    async fn test_blank_jd_is_rejected_before_generation() {
        let generator = RecordingGenerator::replying("unused");
        let err = tailor_resume(&matcher(), &generator, &catalog(), &request("  ", None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_empty_catalog_is_rejected() {
        let generator = RecordingGenerator::replying("unused");
        let err = tailor_resume(&matcher(), &generator, &[], &request(JD, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_selects_top_projects_and_returns_generated_text() {
        let generator = RecordingGenerator::replying("### Storefront");
        let response = tailor_resume(&matcher(), &generator, &catalog(), &request(JD, Some(1)))
            .await
            .unwrap();

        assert_eq!(response.selected_projects.len(), 1);
        assert_eq!(response.selected_projects[0].record.project.name, "Storefront");
        assert_eq!(response.resume_markdown, "### Storefront");

        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Storefront"));
        assert!(prompts[0].contains("Matched keywords: react, docker"));
        assert!(!prompts[0].contains("Crawler"), "Unselected projects must stay out of the prompt");
        assert!(prompts[0].contains(JD));
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        let generator = RecordingGenerator::replying("ok");
        let response = tailor_resume(&matcher(), &generator, &catalog(), &request(JD, Some(0)))
            .await
            .unwrap();
        assert_eq!(response.selected_projects.len(), 1);

        let response = tailor_resume(&matcher(), &generator, &catalog(), &request(JD, Some(500)))
            .await
            .unwrap();
        assert_eq!(response.selected_projects.len(), 3);
    }

    #[tokio::test]
    async fn test_generator_failure_maps_to_llm_error() {
        let generator = RecordingGenerator::failing();
        let err = tailor_resume(&matcher(), &generator, &catalog(), &request(JD, None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[test]
    fn test_prompt_marks_projects_without_matches() {
        let records = catalog();
        let (_, ranked) = rank_catalog(&matcher(), &records, JD);
        let prompt = build_tailor_prompt(&ranked, JD);
        assert!(prompt.contains("Matched keywords: (none)"));
        assert!(prompt.contains("1. Storefront (role: Lead)"));
        assert!(!prompt.contains("{projects}"));
    }
}
