// AI features: JD-driven resume tailoring and the digital-twin chat.
// All generation goes through the `TextGenerator` trait in llm_client.

pub mod handlers;
pub mod prompts;
pub mod tailor;
pub mod twin;
