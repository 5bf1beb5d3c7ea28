//! Webhook layer for sending HTTP requests to the styling workflow.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The outbound wire payload ([`OutboundPayload`])
//! - Dispatching and classifying responses ([`WebhookClient`], [`HttpWebhook`], [`WebhookOutcome`])

mod client;
mod dispatcher;
mod error;
mod outcome;
mod payload;
mod transport;

#[cfg(test)]
mod dispatcher_tests;

pub use client::ReqwestClient;
pub use dispatcher::{HttpWebhook, WebhookClient};
pub use error::{DispatchError, HttpError};
pub use outcome::WebhookOutcome;
pub use payload::OutboundPayload;
pub use transport::{HttpClient, HttpRequest, HttpResponse};
