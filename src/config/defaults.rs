//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

use crate::webhook::{HttpWebhook, ReqwestClient};

/// Default name of the JSON field holding the styled sentence.
pub const RESULT_FIELD: &str = crate::submit::DEFAULT_RESULT_FIELD;

/// Default webhook response deadline in seconds.
pub const TIMEOUT_SECS: u64 = HttpWebhook::<ReqwestClient>::DEFAULT_TIMEOUT.as_secs();

/// Default address the receiver binds to.
pub const LISTEN: &str = "127.0.0.1:3000";

/// Default webhook response deadline as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
