//! Submission input types.

use std::fmt;

/// Styles offered to users.
///
/// The label is what travels to the webhook as `selected_style`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// "Gen Z"
    GenZ,
    /// "Academic"
    Academic,
    /// "British slang"
    BritishSlang,
    /// "Valley Girl"
    ValleyGirl,
    /// "Pirate"
    Pirate,
    /// "Caveman"
    Caveman,
    /// "Robot"
    Robot,
    /// "Overly Dramatic"
    OverlyDramatic,
}

impl Style {
    /// Returns the display label sent to the webhook.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GenZ => "Gen Z",
            Self::Academic => "Academic",
            Self::BritishSlang => "British slang",
            Self::ValleyGirl => "Valley Girl",
            Self::Pirate => "Pirate",
            Self::Caveman => "Caveman",
            Self::Robot => "Robot",
            Self::OverlyDramatic => "Overly Dramatic",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A sentence and the style to render it in.
///
/// Fields are plain text so programmatic callers can build requests the
/// submitter will reject; [`RequestSubmitter`](super::RequestSubmitter)
/// re-checks them before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    sentence: String,
    style: String,
}

impl SubmissionRequest {
    /// Creates a request from raw text.
    #[must_use]
    pub fn new(sentence: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
            style: style.into(),
        }
    }

    /// Creates a request for one of the known styles.
    #[must_use]
    pub fn styled(sentence: impl Into<String>, style: Style) -> Self {
        Self::new(sentence, style.label())
    }

    /// The sentence to restyle.
    #[must_use]
    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// The requested style label.
    #[must_use]
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns true if both fields are non-empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.sentence.is_empty() && !self.style.is_empty()
    }
}
