// Cross-cutting prompt fragments shared by the assistant features.
// Feature-specific templates live in `assistant/prompts.rs`.

/// Keeps generated text tied to the catalog the prompt supplies.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Only state facts that appear in the projects provided below. \
    Do NOT invent employers, dates, metrics or technologies. \
    If the projects do not support a claim, leave it out.";

/// Instruction for answering in the same language the reader wrote in.
pub const LANGUAGE_INSTRUCTION: &str = "\
    Answer in the language the input is written in. \
    If the input mixes Chinese and English, answer in Chinese and keep \
    technology names in their original English form.";
