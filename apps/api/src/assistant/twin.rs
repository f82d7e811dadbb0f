//! Digital twin: answers visitor questions in the owner's voice, grounded
//! in the project catalog.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::prompts::{TWIN_PROMPT_TEMPLATE, TWIN_SYSTEM_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, LANGUAGE_INSTRUCTION};
use crate::llm_client::TextGenerator;
use crate::models::project::ProjectRecord;

/// Questions longer than this are rejected rather than sent upstream.
const MAX_QUESTION_CHARS: usize = 2000;

#[derive(Debug, Clone, Deserialize)]
pub struct TwinRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwinResponse {
    pub answer: String,
}

pub async fn ask_twin(
    generator: &dyn TextGenerator,
    owner_name: &str,
    records: &[ProjectRecord],
    request: &TwinRequest,
) -> Result<TwinResponse, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if question.chars().count() > MAX_QUESTION_CHARS {
        return Err(AppError::Validation(format!(
            "question exceeds {MAX_QUESTION_CHARS} characters"
        )));
    }

    let system = build_twin_system(owner_name);
    let prompt = build_twin_prompt(records, question);

    info!("Digital twin answering over {} projects", records.len());

    let answer = generator
        .complete(&prompt, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Digital twin failed: {e}")))?;

    Ok(TwinResponse { answer })
}

fn build_twin_system(owner_name: &str) -> String {
    TWIN_SYSTEM_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{language_instruction}", LANGUAGE_INSTRUCTION)
        .replace("{owner_name}", owner_name)
}

fn build_twin_prompt(records: &[ProjectRecord], question: &str) -> String {
    let projects = if records.is_empty() {
        "(no projects published yet)".to_string()
    } else {
        records
            .iter()
            .map(|r| {
                let p = &r.project;
                format!(
                    "- {} ({}): {} Result: {} [{}]",
                    p.name,
                    p.role,
                    p.action,
                    p.result,
                    p.keywords.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    TWIN_PROMPT_TEMPLATE
        .replace("{projects}", &projects)
        .replace("{question}", question)
}
