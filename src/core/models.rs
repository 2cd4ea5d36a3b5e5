//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Sentinel accepted wherever an email is configured as a string
pub const GENERATE_EMAIL: &str = "gen";

/// Value sent as the `de` parameter to raise the caller's rate limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactEmail {
    /// Send this value as-is
    Address(String),
    /// Synthesize a random address once per `translate` call
    Generate,
}

impl From<&str> for ContactEmail {
    fn from(s: &str) -> Self {
        if s == GENERATE_EMAIL {
            ContactEmail::Generate
        } else {
            ContactEmail::Address(s.to_string())
        }
    }
}

impl FromStr for ContactEmail {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ContactEmail::from(s))
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactEmail::Address(address) => write!(f, "{}", address),
            ContactEmail::Generate => write!(f, "{}", GENERATE_EMAIL),
        }
    }
}

/// Translation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    /// Carried for callers, never sent to the service
    pub mime_type: Option<String>,
    pub api_key: Option<String>,
    pub email: Option<ContactEmail>,
    /// Zero or unset falls back to the client default
    pub timeout: Option<Duration>,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            ..Default::default()
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_email(mut self, email: ContactEmail) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Same parameters, different text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

/// Translation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub text: String,
    /// Service-reported confidence, or 1.0 for reassembled text
    pub match_level: f64,
    /// Set when the text went through the splitting path
    pub split: bool,
}

/// Raw `/get` response body
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(rename = "responseData")]
    pub data: ResponseData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    #[serde(rename = "translatedText")]
    pub text: String,
    #[serde(rename = "match")]
    pub match_level: f64,
}

impl From<ApiResponse> for TranslationResult {
    fn from(response: ApiResponse) -> Self {
        Self {
            text: response.data.text,
            match_level: response.data.match_level,
            split: false,
        }
    }
}

/// Either one text or an ordered list of texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationInput {
    Single(String),
    Batch(Vec<String>),
}

/// Translated counterpart of [`TranslationInput`], same shape as the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TranslationOutput {
    Single(String),
    Batch(Vec<String>),
}
