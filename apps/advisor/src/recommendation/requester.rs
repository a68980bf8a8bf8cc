//! Recommendation requester — one prompt, one completion call, no retries.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::corpus::CourseCorpus;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::StudentPreferences;
use crate::recommendation::prompts::render_prompt;

/// The model's answer, shown to the student unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "recommendation")]
    pub text: String,
    pub model: String,
}

/// Validates the preferences, renders the prompt against `course_data` and
/// issues exactly one generation call.
pub async fn request_recommendation(
    course_data: &str,
    prefs: &StudentPreferences,
    generator: &dyn TextGenerator,
) -> Result<Recommendation, AppError> {
    prefs.validate()?;

    let prompt = render_prompt(course_data, prefs);
    info!(
        "Requesting recommendation (model: {}, goal: {}, experience: {})",
        generator.model(),
        prefs.goal.label(),
        prefs.experience.label()
    );

    let text = generator
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Request(e.to_string()))?;

    Ok(Recommendation {
        text,
        model: generator.model().to_string(),
    })
}

/// Full submission pipeline: validate, fetch the cached corpus, request.
/// Validation runs first so a blank form never touches the corpus or the API.
pub async fn recommend(
    corpus: &Arc<CourseCorpus>,
    generator: &dyn TextGenerator,
    prefs: &StudentPreferences,
) -> Result<Recommendation, AppError> {
    prefs.validate()?;
    let course_data = load_corpus(corpus.clone()).await?;
    request_recommendation(&course_data, prefs, generator).await
}

/// Reads the corpus on a blocking thread; a no-op clone once it is cached.
pub async fn load_corpus(corpus: Arc<CourseCorpus>) -> Result<Arc<str>, AppError> {
    if corpus.is_loaded() {
        return corpus.text();
    }
    tokio::task::spawn_blocking(move || corpus.text())
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("corpus loader task failed: {e}")))?
}
