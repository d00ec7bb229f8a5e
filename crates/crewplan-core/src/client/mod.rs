//! Transport to the external model service.
//!
//! The generator never talks HTTP directly: it holds a [`Transport`], which is
//! either `Offline` (no credential configured, deterministic built-in data) or
//! `Live` around any [`ModelClient`]. The choice is made once, when the
//! [`GeneratorBuilder`](crate::GeneratorBuilder) builds the generator.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub mod gemini;

pub use gemini::GeminiClient;

/// A single structured-output completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Instruction and context text
    pub prompt: String,
    /// Schema the response is asked to follow
    pub response_schema: Value,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, response_schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema,
        }
    }
}

/// A client able to run one text completion against a model.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Provider name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the request and returns the raw response text.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Transport` or `GeneratorError::Api` when the
    /// service cannot be reached or rejects the request, and
    /// `GeneratorError::EmptyResponse` when it answers without text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

/// Live or offline access to the model.
#[derive(Clone)]
pub enum Transport {
    Live(Arc<dyn ModelClient>),
    Offline,
}

impl Transport {
    pub fn is_offline(&self) -> bool {
        matches!(self, Transport::Offline)
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Live(client) => write!(f, "Live({})", client.name()),
            Transport::Offline => write!(f, "Offline"),
        }
    }
}
