//! Error types for the generation library.
//!
//! None of these errors cross the public generation operations: the
//! [`Generator`](crate::Generator) absorbs them into its fallback ladder. They
//! surface from the builder, the transport, and the parsing helpers.

use thiserror::Error;

/// Comprehensive error type for all generation operations.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The HTTP request to the model service failed
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// The model service answered with a non-success status
    #[error("Model API error ({status}): {message}")]
    Api { status: u16, message: String },
    /// The model returned no text
    #[error("Model returned an empty response")]
    EmptyResponse,
    /// The model text could not be parsed as the expected JSON object
    #[error("Malformed model response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors outside the model pipeline
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating transport errors with context.
pub struct TransportErrorBuilder {
    message: String,
}

impl TransportErrorBuilder {
    /// Create a new transport error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: reqwest::Error) -> GeneratorError {
        GeneratorError::Transport {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GeneratorError {
        GeneratorError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GeneratorError {
    /// Creates a builder for transport errors.
    pub fn transport(message: impl Into<String>) -> TransportErrorBuilder {
        TransportErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a parse failure of model output.
    pub fn malformed(source: serde_json::Error) -> Self {
        Self::MalformedResponse { source }
    }
}

/// Extension trait mapping `reqwest` failures into [`GeneratorError`].
pub trait TransportResultExt<T> {
    /// Map transport errors with a message.
    fn transport_context(self, message: &str) -> Result<T>;
}

impl<T> TransportResultExt<T> for std::result::Result<T, reqwest::Error> {
    fn transport_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GeneratorError::transport(message).with_source(e))
    }
}

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
