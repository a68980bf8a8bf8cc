//! Axum route handlers for the advisor form and the recommendation API.

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    response::Html,
    Form, Json,
};

use crate::errors::AppError;
use crate::models::StudentPreferences;
use crate::recommendation::page::{render_page, Outcome};
use crate::recommendation::requester::{recommend, Recommendation};
use crate::state::AppState;

/// GET /
pub async fn handle_form() -> Html<String> {
    Html(render_page(&StudentPreferences::default(), None))
}

/// POST /recommend
///
/// Always answers with the page. Failures are rendered above the form so the
/// student can correct the input or simply submit again. A body that does not
/// decode (e.g. an unknown goal) is shown as a validation error.
pub async fn handle_recommend(
    State(state): State<AppState>,
    form: Result<Form<StudentPreferences>, FormRejection>,
) -> Html<String> {
    let prefs = match form {
        Ok(Form(prefs)) => prefs,
        Err(rejection) => {
            let err = AppError::Validation(invalid_submission(&rejection.body_text()));
            return Html(render_page(
                &StudentPreferences::default(),
                Some(Outcome::Failed(&err)),
            ));
        }
    };

    let result = recommend(&state.corpus, state.llm.as_ref(), &prefs).await;

    let outcome = match &result {
        Ok(rec) => Outcome::Recommended(rec),
        Err(err) => {
            match err {
                AppError::Validation(_) => {}
                AppError::FileAccess(msg) => tracing::error!("Course corpus error: {msg}"),
                other => tracing::warn!("Recommendation failed: {other}"),
            }
            Outcome::Failed(err)
        }
    };

    Html(render_page(&prefs, Some(outcome)))
}

/// POST /api/v1/recommendations
pub async fn handle_api_recommend(
    State(state): State<AppState>,
    payload: Result<Json<StudentPreferences>, JsonRejection>,
) -> Result<Json<Recommendation>, AppError> {
    let Json(prefs) = payload
        .map_err(|rejection| AppError::Validation(invalid_submission(&rejection.body_text())))?;
    let recommendation = recommend(&state.corpus, state.llm.as_ref(), &prefs).await?;
    Ok(Json(recommendation))
}

fn invalid_submission(detail: &str) -> String {
    format!("Invalid submission: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::corpus::CourseCorpus;
    use crate::models::{Experience, Goal};
    use crate::recommendation::requester::tests::{ScriptedGenerator, StaticSource};

    const COURSES: &str = "Course X: Intro to Web Development\nCourse Y: Data Analysis";

    fn state_with(generator: Arc<ScriptedGenerator>) -> AppState {
        AppState {
            llm: generator,
            corpus: Arc::new(CourseCorpus::new(StaticSource(COURSES))),
        }
    }

    fn web_beginner(interest: &str) -> StudentPreferences {
        StudentPreferences {
            interest: interest.to_string(),
            goal: Goal::JobSkill,
            experience: Experience::Beginner,
        }
    }

    #[tokio::test]
    async fn test_form_page_renders_empty_form() {
        let Html(html) = handle_form().await;
        assert!(html.contains("What is your area of interest?"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[tokio::test]
    async fn test_successful_submission_displays_recommendation() {
        let generator = Arc::new(ScriptedGenerator::replying("Try Course X"));
        let state = state_with(generator.clone());

        let Html(html) =
            handle_recommend(State(state), Ok(Form(web_beginner("web development")))).await;

        assert!(html.contains("Try Course X"));
        assert!(html.contains("Recommended Course"));
        assert_eq!(generator.call_count(), 1);

        let prompt = generator.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("Interest: web development"));
        assert!(prompt.contains("Goal: Learn a skill for a job"));
        assert!(prompt.contains("Coding experience: Beginner"));
        assert!(prompt.contains(COURSES));
    }

    #[tokio::test]
    async fn test_empty_interest_shows_validation_message_without_remote_call() {
        let generator = Arc::new(ScriptedGenerator::replying("unused"));
        let state = state_with(generator.clone());

        let Html(html) = handle_recommend(State(state), Ok(Form(web_beginner("")))).await;

        assert!(html.contains("Please fill in your area of interest."));
        assert!(!html.contains("Recommended Course"));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_timeout_is_reported_and_next_submission_still_works() {
        let generator = Arc::new(ScriptedGenerator::new(vec![
            Err("Request timed out"),
            Ok("Try Course Y"),
        ]));
        let state = state_with(generator.clone());

        let Html(first) =
            handle_recommend(State(state.clone()), Ok(Form(web_beginner("data analysis")))).await;
        assert!(first.contains("Error: "));
        assert!(first.contains("Request timed out"));
        assert!(!first.contains("Recommended Course"));

        let Html(second) =
            handle_recommend(State(state), Ok(Form(web_beginner("data analysis")))).await;
        assert!(second.contains("Try Course Y"));
        assert!(!second.contains("role=\"alert\""));
        assert_eq!(generator.call_count(), 2);
    }

    #[tokio::test]
    async fn test_api_returns_recommendation_json() {
        let generator = Arc::new(ScriptedGenerator::replying("Try Course X"));
        let Json(rec) = handle_api_recommend(
            State(state_with(generator)),
            Ok(Json(web_beginner("web development"))),
        )
        .await
        .unwrap();
        assert_eq!(rec.text, "Try Course X");
        assert_eq!(rec.model, "stub-model");
    }

    #[tokio::test]
    async fn test_api_rejects_blank_interest() {
        let generator = Arc::new(ScriptedGenerator::replying("unused"));
        let err = handle_api_recommend(
            State(state_with(generator.clone())),
            Ok(Json(web_beginner("  "))),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(generator.call_count(), 0);
    }
}
