//! Translation backends and the client that fronts them.
//!
//! A `TranslationBackend` talks to some remote service and may fail in many
//! ways. `TranslationClient` is what the rest of the application uses: it
//! folds every failure, including a panicking backend, into a
//! `TranslationError` so callers always get a definite outcome. Replies that
//! do arrive are passed through as the backend returned them.

pub mod providers;

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

pub use providers::build_backend;

/// Errors surfaced by a translation call. `Display` is the message shown to
/// the user after the "Translation error: " prefix.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    #[error("backend responded with {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("backend returned no translation")]
    EmptyResult,
    #[error("{0}")]
    Backend(String),
    #[error("translation was interrupted: {0}")]
    Interrupted(String),
}

/// The interface every translation service implements.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Name used in the status bar and logs.
    fn name(&self) -> &str;

    /// Translates `text` into the language identified by `target_code`.
    async fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslationError>;
}

/// Thin, cloneable front for a shared backend.
#[derive(Clone)]
pub struct TranslationClient {
    backend: Arc<dyn TranslationBackend>,
}

impl TranslationClient {
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Runs one translation.
    ///
    /// The backend call runs on its own task so that a panic inside it is
    /// reported as `TranslationError::Interrupted` instead of unwinding into
    /// the caller.
    pub async fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslationError> {
        let backend = Arc::clone(&self.backend);
        let text = text.to_string();
        let target = target_code.to_string();
        debug!("Translating {} chars to '{}' via {}", text.len(), target, backend.name());

        let outcome = tokio::spawn(async move { backend.translate(&text, &target).await }).await;
        match outcome {
            Ok(result) => result,
            Err(join_err) => {
                warn!("Translation task ended abnormally: {join_err}");
                let reason = if join_err.is_cancelled() {
                    "cancelled".to_string()
                } else {
                    "backend task panicked".to_string()
                };
                Err(TranslationError::Interrupted(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<&'static str, &'static str>);

    #[async_trait]
    impl TranslationBackend for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn translate(&self, _text: &str, _target: &str) -> Result<String, TranslationError> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(message) => Err(TranslationError::Backend(message.to_string())),
            }
        }
    }

    struct Panicking;

    #[async_trait]
    impl TranslationBackend for Panicking {
        fn name(&self) -> &str {
            "panicking"
        }

        async fn translate(&self, _text: &str, _target: &str) -> Result<String, TranslationError> {
            panic!("backend exploded")
        }
    }

    #[tokio::test]
    async fn passes_success_through() {
        let client = TranslationClient::new(Arc::new(Fixed(Ok("bonjour"))));
        assert_eq!(client.translate("hello", "fr").await.unwrap(), "bonjour");
        assert_eq!(client.backend_name(), "fixed");
    }

    #[tokio::test]
    async fn backend_error_message_is_preserved() {
        let client = TranslationClient::new(Arc::new(Fixed(Err("timeout"))));
        let err = client.translate("hello", "fr").await.unwrap_err();
        assert_eq!(err.to_string(), "timeout");
    }

    #[tokio::test]
    async fn blank_result_passes_through() {
        let client = TranslationClient::new(Arc::new(Fixed(Ok("  "))));
        assert_eq!(client.translate("hello", "fr").await.unwrap(), "  ");
    }

    #[tokio::test]
    async fn panicking_backend_becomes_an_error() {
        let client = TranslationClient::new(Arc::new(Panicking));
        let err = client.translate("hello", "fr").await.unwrap_err();
        assert_eq!(err.to_string(), "translation was interrupted: backend task panicked");
    }
}
