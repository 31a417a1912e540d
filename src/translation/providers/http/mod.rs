use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::config::{BackendSettings, Provider};
use crate::translation::{TranslationBackend, TranslationError};

mod models;

const GOOGLE_URL: &str = "https://translate.googleapis.com/translate_a/single";
const LIBRE_URL: &str = "https://libretranslate.com";

/// HTTP implementation of `TranslationBackend` for the supported providers.
pub struct HttpBackend {
    provider: Provider,
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpBackend {
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let base_url = match &settings.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => default_base_url(settings.provider)?,
        };
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            provider: settings.provider,
            base_url,
            api_key: settings.resolved_api_key(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn translate_google(&self, text: &str, target: &str) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;
        let body: serde_json::Value = checked(response).await?.json().await?;
        parse_google_response(&body)
    }

    async fn translate_libre(&self, text: &str, target: &str) -> Result<String, TranslationError> {
        use models::{LibrePayload, LibreResponse};

        let payload = LibrePayload {
            q: text,
            source: "auto",
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };
        let url = format!("{}/translate", self.base_url);
        let response = self.client.post(url).json(&payload).send().await?;
        let body: LibreResponse = checked(response).await?.json().await?;
        if let Some(error) = body.error {
            return Err(TranslationError::Backend(error));
        }
        body.translated_text
            .ok_or_else(|| TranslationError::MalformedResponse("missing translatedText".into()))
    }

    async fn translate_custom(&self, text: &str, target: &str) -> Result<String, TranslationError> {
        use models::{CustomPayload, CustomResponse};

        let payload = CustomPayload { text, target };
        let response = self
            .client
            .post(&self.base_url)
            .headers(self.auth_headers()?)
            .json(&payload)
            .send()
            .await?;
        let body: CustomResponse = checked(response).await?.json().await?;
        body.text
            .or(body.translated_text)
            .ok_or_else(|| TranslationError::MalformedResponse("missing text field".into()))
    }

    fn auth_headers(&self) -> Result<HeaderMap, TranslationError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|err| TranslationError::Backend(format!("invalid API key: {err}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    fn name(&self) -> &str {
        self.provider.display_name()
    }

    async fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslationError> {
        match self.provider {
            Provider::Google => self.translate_google(text, target_code).await,
            Provider::Libre => self.translate_libre(text, target_code).await,
            Provider::Custom => self.translate_custom(text, target_code).await,
        }
    }
}

fn default_base_url(provider: Provider) -> Result<String> {
    Ok(match provider {
        Provider::Google => GOOGLE_URL.into(),
        Provider::Libre => LIBRE_URL.into(),
        Provider::Custom => return Err(anyhow!("the custom provider needs backend.base_url")),
    })
}

/// Turns a non-success status into `TranslationError::Status` with the body.
async fn checked(response: reqwest::Response) -> Result<reqwest::Response, TranslationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(TranslationError::Status {
        status: status.as_u16(),
        body: body.trim().chars().take(200).collect(),
    })
}

/// Extracts the translation from a `translate_a/single?dt=t` body.
///
/// The body is a nested array whose first element lists sentence segments;
/// each segment's first element is the translated sentence.
pub(crate) fn parse_google_response(body: &serde_json::Value) -> Result<String, TranslationError> {
    let segments = body
        .get(0)
        .and_then(|value| value.as_array())
        .ok_or_else(|| TranslationError::MalformedResponse("expected a segment list".into()))?;
    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|part| part.as_str()))
        .collect();
    if translated.is_empty() {
        return Err(TranslationError::EmptyResult);
    }
    Ok(translated)
}
