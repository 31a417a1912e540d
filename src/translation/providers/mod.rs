//! Concrete translation backends.

pub mod http;

use std::sync::Arc;

use anyhow::Result;

use super::TranslationBackend;
use crate::config::BackendSettings;

/// Builds the backend selected in the settings.
pub fn build_backend(settings: &BackendSettings) -> Result<Arc<dyn TranslationBackend>> {
    let backend = http::HttpBackend::new(settings)?;
    Ok(Arc::new(backend))
}
