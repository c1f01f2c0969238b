use thiserror::Error;

use crate::probe::Page;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CheckError {
    #[error("unexpected status code: expected {expected}, got {actual}")]
    StatusMismatch { expected: u16, actual: u16 },
    #[error("response body does not contain {snippet:?}")]
    SnippetMissing { snippet: String },
}

/// Status is checked before the body, so a failing page reports the
/// status mismatch even when the body is also wrong.
pub(crate) fn verify(page: &Page, expected_status: u16, snippet: &str) -> Result<(), CheckError> {
    if page.status != expected_status {
        return Err(CheckError::StatusMismatch {
            expected: expected_status,
            actual: page.status,
        });
    }

    if !page.body.contains(snippet) {
        return Err(CheckError::SnippetMissing {
            snippet: snippet.to_string(),
        });
    }

    Ok(())
}
