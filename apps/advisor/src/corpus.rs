//! Course corpus — the text of the course-description PDF, read once and shared.
//!
//! `CourseCorpus` memoizes the joined page text behind a `OnceCell`. The first
//! successful `text()` call performs the only document read of the process;
//! every later call hands out a clone of the same `Arc<str>`. A failed read is
//! not cached, so the next caller tries again.
//!
//! Extraction is CPU-bound: call `text()` from `tokio::task::spawn_blocking`.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use crate::errors::AppError;

/// Where course pages come from. One call is one underlying document read.
pub trait CorpusSource: Send + Sync {
    fn read_pages(&self) -> Result<Vec<String>, AppError>;
}

/// The course-description PDF on disk.
#[derive(Debug, Clone)]
pub struct PdfCourseDocument {
    path: PathBuf,
}

impl PdfCourseDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for PdfCourseDocument {
    fn read_pages(&self) -> Result<Vec<String>, AppError> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            AppError::FileAccess(format!("cannot read {}: {e}", self.path.display()))
        })?;

        let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes).map_err(|e| {
            AppError::FileAccess(format!(
                "cannot extract text from {}: {e}",
                self.path.display()
            ))
        })?;

        info!(
            "Extracted {} pages from {}",
            pages.len(),
            self.path.display()
        );
        Ok(pages)
    }
}

/// Lazily loaded, process-lifetime course text.
pub struct CourseCorpus {
    source: Box<dyn CorpusSource>,
    text: OnceCell<Arc<str>>,
}

impl CourseCorpus {
    pub fn new(source: impl CorpusSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            text: OnceCell::new(),
        }
    }

    /// Returns the cached corpus, reading the source on first use.
    pub fn text(&self) -> Result<Arc<str>, AppError> {
        self.text
            .get_or_try_init(|| {
                let pages = self.source.read_pages()?;
                Ok(Arc::from(pages.join("\n")))
            })
            .cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.text.get().is_some()
    }
}
