//! Caller-facing submission result.

use serde::Serialize;

/// Error text for a request missing its sentence or style.
pub const MISSING_FIELDS_MESSAGE: &str = "Sentence and style are required.";

/// Error text used when a dispatch error has no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send data to webhook.";

/// Outcome of a submission as presented to the caller.
///
/// A failed result never carries a styled sentence and a successful one
/// never carries an error. A success may still lack a sentence when the
/// webhook answered without one.
///
/// Serializes as `{"success": .., "styledSentence"?: .., "error"?: ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledSentenceResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    styled_sentence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl StyledSentenceResult {
    /// A successful result, with or without a styled sentence.
    #[must_use]
    pub const fn styled(styled_sentence: Option<String>) -> Self {
        Self {
            success: true,
            styled_sentence,
            error: None,
        }
    }

    /// A failed result carrying an error message.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            styled_sentence: None,
            error: Some(error.into()),
        }
    }

    /// Returns true if the submission succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// The styled sentence, if the webhook supplied one.
    #[must_use]
    pub fn styled_sentence(&self) -> Option<&str> {
        self.styled_sentence.as_deref()
    }

    /// The error message of a failed submission.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
