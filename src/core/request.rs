//! `/get` query construction and response decoding

use reqwest::{StatusCode, Url};

use crate::core::errors::{Result, TranslationError};
use crate::core::models::{ApiResponse, TranslationResult};

/// Endpoint path, replaces whatever path the base URL carries
pub const GET_PATH: &str = "/get";

/// Everything that ends up in one query string
#[derive(Debug, Clone, Copy)]
pub struct QueryParams<'a> {
    pub text: &'a str,
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    pub api_key: Option<&'a str>,
    pub email: Option<&'a str>,
}

impl QueryParams<'_> {
    /// Both language codes must be non-blank
    pub fn validate(&self) -> Result<()> {
        validate_langs(self.source_lang, self.target_lang)
    }

    pub fn langpair(&self) -> String {
        format!("{}|{}", self.source_lang, self.target_lang)
    }
}

pub(crate) fn validate_langs(source_lang: &str, target_lang: &str) -> Result<()> {
    if source_lang.trim().is_empty() {
        return Err(TranslationError::missing("source_lang"));
    }
    if target_lang.trim().is_empty() {
        return Err(TranslationError::missing("target_lang"));
    }
    Ok(())
}

/// Full request URL for `params` against `base_url`
pub fn build_url(base_url: &str, params: &QueryParams<'_>) -> Result<Url> {
    params.validate()?;

    let mut url = Url::parse(base_url).map_err(|e| TranslationError::ConfigError {
        message: format!("invalid base URL {:?}: {}", base_url, e),
    })?;
    url.set_path(GET_PATH);

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        query.append_pair("q", params.text);
        query.append_pair("langpair", &params.langpair());
        if let Some(key) = params.api_key.filter(|k| !k.is_empty()) {
            query.append_pair("key", key);
        }
        if let Some(email) = params.email.filter(|e| !e.is_empty()) {
            query.append_pair("de", email);
        }
    }

    Ok(url)
}

/// Turn a status and raw body into a result; anything but 200 is an error
pub fn parse_response(status: StatusCode, body: &str) -> Result<TranslationResult> {
    if status != StatusCode::OK {
        return Err(TranslationError::HttpStatusError {
            status: status.as_u16(),
        });
    }

    let response: ApiResponse = serde_json::from_str(body)?;
    Ok(response.into())
}
