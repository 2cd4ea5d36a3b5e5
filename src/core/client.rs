//! Async MyMemory client with transparent splitting of long text

use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::chunking::{needs_split, reassemble, split_fragments};
use crate::core::config::ClientConfig;
use crate::core::email::EmailDomainPool;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::{
    ContactEmail, TranslationInput, TranslationOutput, TranslationRequest, TranslationResult,
};
use crate::core::request::{build_url, parse_response, validate_langs, QueryParams};

/// Translation client for the MyMemory `/get` endpoint
#[derive(Debug, Clone)]
pub struct MyMemoryClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl MyMemoryClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Translate one request, splitting it on `.` when it is too long for the service.
    ///
    /// A generated email is drawn once here and shared by every fragment.
    /// Split results always report a match level of 1.0.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        validate_langs(&request.source_lang, &request.target_lang)?;

        let email = self.resolve_email(request.email.as_ref())?;

        if !needs_split(&request.text, self.config.split_threshold) {
            return self
                .send_text(&request.text, request, email.as_deref())
                .await;
        }

        let fragments = split_fragments(&request.text);
        info!(
            "Splitting {} bytes into {} fragments",
            request.text.len(),
            fragments.len()
        );

        // buffered() yields in fragment order and stops pulling on the first error
        let translations: Vec<String> = stream::iter(fragments)
            .map(|fragment| self.send_text(fragment, request, email.as_deref()))
            .buffered(self.config.max_concurrent)
            .map_ok(|result| result.text)
            .try_collect()
            .await?;

        Ok(TranslationResult {
            text: reassemble(&translations),
            match_level: 1.0,
            split: true,
        })
    }

    /// Issue exactly one `/get` request for `request.text`, no splitting.
    pub async fn send_one(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let email = self.resolve_email(request.email.as_ref())?;
        self.send_text(&request.text, request, email.as_deref()).await
    }

    /// Translate texts one after another with shared parameters.
    ///
    /// The first failure aborts the batch.
    pub async fn translate_many<S: AsRef<str>>(
        &self,
        texts: &[S],
        template: &TranslationRequest,
    ) -> Result<Vec<TranslationResult>> {
        let mut results = Vec::with_capacity(texts.len());

        for text in texts {
            let request = template.with_text(text.as_ref());
            results.push(self.translate(&request).await?);
        }

        Ok(results)
    }

    /// Translate a single text or a batch, returning the same shape
    pub async fn translate_input(
        &self,
        input: &TranslationInput,
        template: &TranslationRequest,
    ) -> Result<TranslationOutput> {
        match input {
            TranslationInput::Single(text) => {
                let result = self.translate(&template.with_text(text.as_str())).await?;
                Ok(TranslationOutput::Single(result.text))
            }
            TranslationInput::Batch(texts) => {
                let results = self.translate_many(texts.as_slice(), template).await?;
                Ok(TranslationOutput::Batch(
                    results.into_iter().map(|r| r.text).collect(),
                ))
            }
        }
    }

    fn resolve_email(&self, email: Option<&ContactEmail>) -> Result<Option<String>> {
        match email {
            None => Ok(None),
            Some(ContactEmail::Address(address)) => Ok(Some(address.clone())),
            Some(ContactEmail::Generate) => {
                let pool = EmailDomainPool::new(&self.config.email_domains).ok_or_else(|| {
                    TranslationError::ConfigError {
                        message: "email_domains must not be empty".to_string(),
                    }
                })?;
                Ok(Some(pool.generate()))
            }
        }
    }

    fn request_timeout(&self, request: &TranslationRequest) -> Duration {
        request
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or_else(|| self.config.timeout())
    }

    /// Send actual HTTP request
    async fn send_text(
        &self,
        text: &str,
        request: &TranslationRequest,
        email: Option<&str>,
    ) -> Result<TranslationResult> {
        let params = QueryParams {
            text,
            source_lang: &request.source_lang,
            target_lang: &request.target_lang,
            api_key: request.api_key.as_deref(),
            email,
        };
        let url = build_url(&self.config.base_url, &params)?;

        debug!(
            "GET /get langpair={} bytes={}",
            params.langpair(),
            text.len()
        );

        let response = self
            .client
            .get(url)
            .timeout(self.request_timeout(request))
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(TranslationError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(config: ClientConfig) -> MyMemoryClient {
        MyMemoryClient::new(config).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = MyMemoryClient::new(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let config = ClientConfig {
            max_concurrent: 0,
            ..Default::default()
        };

        assert!(matches!(
            MyMemoryClient::new(config),
            Err(TranslationError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_request_timeout_defaults() {
        let client = client_with(ClientConfig::default());
        let request = TranslationRequest::new("hi", "en", "de");
        assert_eq!(client.request_timeout(&request), Duration::from_secs(10));

        let request = request.with_timeout(Duration::ZERO);
        assert_eq!(client.request_timeout(&request), Duration::from_secs(10));

        let request = request.with_timeout(Duration::from_millis(250));
        assert_eq!(client.request_timeout(&request), Duration::from_millis(250));
    }

    #[test]
    fn test_resolve_email() {
        let client = client_with(ClientConfig {
            email_domains: vec!["example.org".to_string()],
            ..Default::default()
        });

        assert_eq!(client.resolve_email(None).unwrap(), None);

        let literal = ContactEmail::Address("me@home.net".to_string());
        assert_eq!(
            client.resolve_email(Some(&literal)).unwrap().as_deref(),
            Some("me@home.net")
        );

        let generated = client
            .resolve_email(Some(&ContactEmail::Generate))
            .unwrap()
            .unwrap();
        assert!(generated.ends_with("@example.org"));
    }

    #[tokio::test]
    async fn test_missing_language_fails_before_network() {
        // Unroutable base URL: any request would fail with a transport error instead
        let client = client_with(ClientConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..Default::default()
        });

        let short = TranslationRequest::new("Hello", "", "ru");
        assert!(matches!(
            client.translate(&short).await,
            Err(TranslationError::MissingParameter { .. })
        ));

        let long = TranslationRequest::new("Sentence. ".repeat(60), "en", " ");
        assert!(matches!(
            client.translate(&long).await,
            Err(TranslationError::MissingParameter { .. })
        ));
    }

    #[tokio::test]
    async fn test_only_delimiters_issue_no_request() {
        let client = client_with(ClientConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            ..Default::default()
        });

        let request = TranslationRequest::new(".".repeat(450), "en", "ru");
        let result = client.translate(&request).await.unwrap();

        assert_eq!(result.text, "");
        assert_eq!(result.match_level, 1.0);
        assert!(result.split);
    }
}
