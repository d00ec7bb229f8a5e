//! Builder for creating and configuring Generator instances.

use std::{sync::Arc, time::Duration};

use log::debug;

use super::Generator;
use crate::{
    client::{
        GeminiClient, ModelClient, Transport,
        gemini::{DEFAULT_MODEL, DEFAULT_TIMEOUT},
    },
    error::{GeneratorError, Result},
};

/// Builder for creating and configuring Generator instances.
///
/// The presence of an API key is the only switch between live and offline
/// behavior. Nothing is read from the environment here; callers pass the key
/// in explicitly.
#[derive(Clone)]
pub struct GeneratorBuilder {
    api_key: Option<String>,
    model: String,
    base_url: Option<String>,
    timeout: Duration,
    client: Option<Arc<dyn ModelClient>>,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Sets the model service credential.
    ///
    /// Empty or whitespace-only keys count as absent.
    pub fn with_api_key<S: Into<String>>(mut self, api_key: Option<S>) -> Self {
        self.api_key = api_key
            .map(Into::into)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self
    }

    /// Sets the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets a custom service base URL.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(url) = base_url {
            self.base_url = Some(url.into());
        }
        self
    }

    /// Sets the per-request timeout of the live transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a custom model client instead of the built-in HTTP client.
    ///
    /// The client is used regardless of whether an API key was given.
    pub fn with_client(mut self, client: Arc<dyn ModelClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidInput` if the model name is blank or the
    /// base URL is not an http(s) URL, and `GeneratorError::Configuration` if
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Generator> {
        if let Some(client) = self.client {
            debug!("Using injected model client '{}'", client.name());
            return Ok(Generator::new(Transport::Live(client)));
        }

        let Some(api_key) = self.api_key else {
            debug!("No API key configured, generator runs offline");
            return Ok(Generator::new(Transport::Offline));
        };

        let model = self.model.trim();
        if model.is_empty() {
            return Err(GeneratorError::invalid_input("model").with_reason("must not be empty"));
        }

        let mut client = GeminiClient::new(api_key, model, self.timeout)?;
        if let Some(url) = self.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(GeneratorError::invalid_input("base_url")
                    .with_reason(format!("expected an http(s) URL, got '{url}'")));
            }
            client = client.with_base_url(url);
        }

        debug!("Generator configured for model '{}'", client.model());
        Ok(Generator::new(Transport::Live(Arc::new(client))))
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
