use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jd_match::Vocabulary;

const DEFAULT_OWNER_NAME: &str = "the portfolio owner";

/// Application configuration loaded from environment variables.
///
/// Everything is optional: without `DATABASE_URL` projects live in memory,
/// without `ANTHROPIC_API_KEY` the AI endpoints answer 503.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub vocabulary_path: Option<PathBuf>,
    pub owner_name: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            database_url: optional("DATABASE_URL"),
            anthropic_api_key: optional("ANTHROPIC_API_KEY"),
            vocabulary_path: optional("VOCABULARY_PATH").map(PathBuf::from),
            owner_name: optional("OWNER_NAME").unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string()),
            port: optional("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// The vocabulary to match against: the file at `VOCABULARY_PATH`, or the builtin one.
    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary_path {
            Some(path) => load_vocabulary_file(path),
            None => Ok(Vocabulary::builtin().clone()),
        }
    }
}

fn load_vocabulary_file(path: &Path) -> Result<Vocabulary> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read vocabulary file '{}'", path.display()))?;
    let vocabulary: Vocabulary = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse vocabulary file '{}'", path.display()))?;
    if vocabulary.is_empty() {
        anyhow::bail!("Vocabulary file '{}' contains no terms", path.display());
    }
    Ok(vocabulary)
}
