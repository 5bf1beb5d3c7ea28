//! Restyle: webhook dispatch and response normalization
//!
//! A library for sending a sentence and a style to an external workflow
//! webhook and turning whatever the webhook answers into a uniform result.

pub mod config;
pub mod receiver;
pub mod submit;
pub mod time;
pub mod webhook;
