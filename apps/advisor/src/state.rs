use std::sync::Arc;

use crate::corpus::CourseCorpus;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup. Default: `LlmClient`; tests swap in stubs.
    pub llm: Arc<dyn TextGenerator>,
    /// Course text, read at most once per process.
    pub corpus: Arc<CourseCorpus>,
}
