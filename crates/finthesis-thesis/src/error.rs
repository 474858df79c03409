use finthesis_summarizer::ExtractError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThesisError {
    #[error("summarization failed: {0}")]
    Summarize(#[from] ExtractError),
}
