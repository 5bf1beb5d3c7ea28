//! Submission layer: turns a sentence and a style into a rendered result.
//!
//! This module provides:
//! - Input types ([`SubmissionRequest`], [`Style`])
//! - The caller-facing result ([`StyledSentenceResult`])
//! - The submission flow ([`RequestSubmitter`])

mod request;
mod result;
mod submitter;


pub use request::{Style, SubmissionRequest};
pub use result::{GENERIC_FAILURE_MESSAGE, MISSING_FIELDS_MESSAGE, StyledSentenceResult};
pub use submitter::{DEFAULT_RESULT_FIELD, RequestSubmitter};
