//! The translate action: validation, dispatch and result delivery.
//!
//! One cycle walks `Idle → Validating → Translating → Displaying → Idle`.
//! Validation runs inline; the remote call runs on a tokio task and its
//! outcome comes back over a channel that the UI drains on every tick.
//! While a request is in flight further triggers are ignored.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::catalog::{LanguageCatalog, PLACEHOLDER};
use crate::fonts::{FontChoice, select_font};
use crate::translation::{TranslationBackend, TranslationClient};

/// Prefix put in front of backend failure messages.
pub const TRANSLATION_ERROR_PREFIX: &str = "Translation error: ";

/// Reasons a translate action is rejected before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Input text is empty, please enter text for translation.")]
    EmptyInput,
    #[error("Please select a target language.")]
    NoLanguageSelected,
    #[error("Error: Selected language is not supported.")]
    UnsupportedLanguage(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Validating,
    Translating,
    Displaying,
}

/// A validated request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_text: String,
    pub target_code: String,
    pub font: FontChoice,
}

/// How a cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Validation failed before any remote call.
    Rejected,
    /// The backend returned a translation.
    Translated,
    /// The backend call failed.
    Failed,
}

/// What the output panel should show after a cycle.
///
/// `font` is `None` when the current font should be kept, which is the case
/// for every validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub text: String,
    pub font: Option<FontChoice>,
    pub outcome: Outcome,
}

impl From<RequestError> for DisplayUpdate {
    fn from(err: RequestError) -> Self {
        Self {
            text: err.to_string(),
            font: None,
            outcome: Outcome::Rejected,
        }
    }
}

/// Result of `TranslationController::submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The request passed validation and is now running.
    Dispatched(TranslationRequest),
    /// Validation failed; show this right away.
    Rejected(DisplayUpdate),
    /// Another request is still in flight; nothing was done.
    Busy,
}

pub struct TranslationController {
    catalog: Arc<LanguageCatalog>,
    client: TranslationClient,
    state: ControllerState,
    in_flight: Option<JoinHandle<()>>,
    events_tx: UnboundedSender<DisplayUpdate>,
    events_rx: UnboundedReceiver<DisplayUpdate>,
}

impl TranslationController {
    pub fn new(catalog: Arc<LanguageCatalog>, backend: Arc<dyn TranslationBackend>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            client: TranslationClient::new(backend),
            state: ControllerState::Idle,
            in_flight: None,
            events_tx: tx,
            events_rx: rx,
        }
    }

    pub fn catalog(&self) -> &LanguageCatalog {
        &self.catalog
    }

    pub fn backend_name(&self) -> &str {
        self.client.backend_name()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == ControllerState::Translating
    }

    /// Validates the user's input and selection.
    ///
    /// Checks run in a fixed order: empty input first, then the placeholder
    /// selection, then the catalog lookup.
    pub fn prepare(&self, input: &str, selection: &str) -> Result<TranslationRequest, RequestError> {
        if input.trim().is_empty() {
            return Err(RequestError::EmptyInput);
        }
        if selection.to_lowercase() == PLACEHOLDER.to_lowercase() {
            return Err(RequestError::NoLanguageSelected);
        }
        let code = self
            .catalog
            .resolve(selection)
            .map_err(|_| RequestError::UnsupportedLanguage(selection.to_string()))?;
        Ok(TranslationRequest {
            source_text: input.to_string(),
            target_code: code.to_string(),
            font: select_font(code),
        })
    }

    /// Runs a whole cycle inline and returns what to display.
    pub async fn run(&mut self, input: &str, selection: &str) -> DisplayUpdate {
        self.state = ControllerState::Validating;
        let request = match self.prepare(input, selection) {
            Ok(request) => request,
            Err(err) => {
                debug!("Translate rejected: {err}");
                self.state = ControllerState::Idle;
                return err.into();
            }
        };
        self.state = ControllerState::Translating;
        let update = execute(&self.client, &request).await;
        self.state = ControllerState::Displaying;
        self.displayed();
        update
    }

    /// Starts a cycle without waiting for the remote call.
    ///
    /// Must be called from within a tokio runtime. The outcome is picked up
    /// later through `poll`.
    pub fn submit(&mut self, input: &str, selection: &str) -> Submission {
        if self.is_busy() {
            debug!("Translate ignored: a request is already in flight");
            return Submission::Busy;
        }
        self.state = ControllerState::Validating;
        let request = match self.prepare(input, selection) {
            Ok(request) => request,
            Err(err) => {
                debug!("Translate rejected: {err}");
                self.state = ControllerState::Idle;
                return Submission::Rejected(err.into());
            }
        };

        info!(
            "Dispatching translation to '{}' via {}",
            request.target_code,
            self.client.backend_name()
        );
        self.state = ControllerState::Translating;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let task_request = request.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let update = execute(&client, &task_request).await;
            let _ = tx.send(update);
        }));
        Submission::Dispatched(request)
    }

    /// Returns a finished result, if one has arrived.
    pub fn poll(&mut self) -> Option<DisplayUpdate> {
        let update = self.events_rx.try_recv().ok()?;
        self.state = ControllerState::Displaying;
        self.in_flight = None;
        Some(update)
    }

    /// Marks the last update as shown, closing the cycle.
    pub fn displayed(&mut self) {
        if self.state == ControllerState::Displaying {
            self.state = ControllerState::Idle;
        }
    }

    /// Aborts the in-flight request. Returns `false` when nothing was running.
    pub fn cancel(&mut self) -> bool {
        let Some(handle) = self.in_flight.take() else {
            return false;
        };
        handle.abort();
        // A result that raced the abort is stale now.
        while self.events_rx.try_recv().is_ok() {}
        self.state = ControllerState::Idle;
        info!("Translation cancelled");
        true
    }
}

impl Drop for TranslationController {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

async fn execute(client: &TranslationClient, request: &TranslationRequest) -> DisplayUpdate {
    let (text, outcome) = match client
        .translate(&request.source_text, &request.target_code)
        .await
    {
        Ok(translated) => (translated, Outcome::Translated),
        Err(err) => {
            warn!("Translation to '{}' failed: {err}", request.target_code);
            (format!("{TRANSLATION_ERROR_PREFIX}{err}"), Outcome::Failed)
        }
    };
    DisplayUpdate {
        text,
        font: Some(request.font),
        outcome,
    }
}
