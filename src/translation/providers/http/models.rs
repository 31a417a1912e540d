//! Request and response bodies for the HTTP translation providers.

// --- LibreTranslate ---
#[derive(serde::Serialize)]
pub struct LibrePayload<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<&'a str>,
}

#[derive(serde::Deserialize)]
pub struct LibreResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// --- Custom ---
#[derive(serde::Serialize)]
pub struct CustomPayload<'a> {
    pub text: &'a str,
    pub target: &'a str,
}

#[derive(serde::Deserialize)]
pub struct CustomResponse {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "translatedText")]
    pub translated_text: Option<String>,
}
