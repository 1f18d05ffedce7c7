//! Gemini text-generation client for the risk analysis service.
//!
//! Wraps the `generateContent` REST endpoint with [`reqwest`], builds the
//! analysis prompt from an [`archrisk_core::input::ArchitectureInput`], and
//! parses the model's free-text reply back into an
//! [`archrisk_core::report::AnalysisReport`]. Every failure mode here is
//! recoverable: the API crate falls back to the local generator.

pub mod client;
pub mod prompt;
pub mod response;

pub use client::{GeminiClient, GeminiConfig, GeminiError};
