use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DEFAULT_COURSES_PDF: &str = "courses/detailed_courses.pdf";

/// Application configuration loaded from environment variables.
/// The API key is optional here: a missing key is reported when a
/// recommendation is requested, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub courses_pdf: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model: env_or("OPENAI_MODEL", DEFAULT_MODEL),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            courses_pdf: env_or("COURSES_PDF", DEFAULT_COURSES_PDF),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Blank values count as unset, so `OPENAI_API_KEY=` in a .env file behaves
/// like a missing key.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
