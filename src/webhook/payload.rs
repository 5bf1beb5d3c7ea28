//! Wire payload sent to the webhook.

use std::time::SystemTime;

use serde::Serialize;

use crate::time::iso8601;

/// JSON body posted to the webhook.
///
/// Serializes as `{"text_input": .., "selected_style": .., "timestamp": ..}`
/// with the timestamp in ISO-8601 UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundPayload {
    /// The sentence to restyle.
    pub text_input: String,
    /// Label of the requested style.
    pub selected_style: String,
    /// Dispatch instant, ISO-8601.
    pub timestamp: String,
}

impl OutboundPayload {
    /// Creates a payload stamped with the given instant.
    #[must_use]
    pub fn new(
        text_input: impl Into<String>,
        selected_style: impl Into<String>,
        at: SystemTime,
    ) -> Self {
        Self {
            text_input: text_input.into(),
            selected_style: selected_style.into(),
            timestamp: iso8601(at),
        }
    }

    /// Serializes the payload as a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; plain string fields make this
    /// practically unreachable.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
