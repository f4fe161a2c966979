//! Google Gemini API client.
//!
//! Implements `ChatBackend` via the Generative Language API
//! `generateContent` method.

mod api;
mod client;
mod config;


pub use client::{GeminiClient, MAX_OUTPUT_TOKENS, TEMPERATURE, TOP_P};
pub use config::GeminiConfig;
