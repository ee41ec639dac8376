use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::api::loading::LoadingTracker;
use crate::api::request::ApiRequest;
use crate::config::AppConfig;
use crate::error::RequestError;
use crate::session::token::TokenStore;
use crate::types::Envelope;

/// Sends a resolved request and returns the decoded envelope
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<Envelope, RequestError>;
}

/// `reqwest`-backed transport. Pass-through only: no retry, no cache.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    dev_base_url: Option<String>,
    development: bool,
    log_requests: bool,
    tokens: Arc<dyn TokenStore>,
    loading: LoadingTracker,
}

impl HttpTransport {
    pub fn new(config: &AppConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, RequestError> {
        let base_url = validate_base_url(&config.api.base_url)?;
        let dev_base_url = config
            .api
            .dev_base_url
            .as_deref()
            .map(validate_base_url)
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            dev_base_url,
            development: config.is_development(),
            log_requests: config.api.enable_request_logging,
            tokens,
            loading: LoadingTracker::new(),
        })
    }

    pub fn loading(&self) -> LoadingTracker {
        self.loading.clone()
    }

    /// Resolve the absolute URL, honoring `custom_dev` in development
    pub fn url_for(&self, request: &ApiRequest) -> String {
        let base = match (&self.dev_base_url, request.options.custom_dev && self.development) {
            (Some(dev), true) => dev,
            _ => &self.base_url,
        };
        format!("{}{}", base, request.path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Envelope, RequestError> {
        let url = self.url_for(request);
        if self.log_requests {
            tracing::debug!("{} {}", request.method.as_str(), url);
        }

        let mut builder = self.client.request(request.method.into(), &url);

        if request.options.token {
            if let Some(token) = self.tokens.get() {
                builder = builder.bearer_auth(token);
            }
        }

        if let Some(params) = &request.params {
            builder = if request.method.sends_body() {
                builder.json(params)
            } else {
                builder.query(&request.query_pairs())
            };
        }

        let _loading = request.options.loading.then(|| self.loading.begin());

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        let result = decode_response(status, &body);
        if let Err(e) = &result {
            tracing::debug!("{} {} failed: {}", request.method.as_str(), request.path, e);
        }
        result
    }
}

fn validate_base_url(raw: &str) -> Result<String, RequestError> {
    Url::parse(raw)
        .map_err(|e| RequestError::Transport(format!("invalid base url '{}': {}", raw, e)))?;
    Ok(raw.trim_end_matches('/').to_string())
}

/// Map a raw HTTP response onto the envelope / error taxonomy
pub fn decode_response(status: u16, body: &[u8]) -> Result<Envelope, RequestError> {
    let parsed = if body.is_empty() {
        None
    } else {
        serde_json::from_slice::<Envelope>(body).ok()
    };

    if !(200..300).contains(&status) {
        let (code, message) = match parsed {
            Some(envelope) if !envelope.message.is_empty() => {
                (Some(envelope.code), envelope.message)
            }
            _ => (None, canonical_reason(status)),
        };
        return Err(RequestError::from_status(status, code, message));
    }

    let envelope = match parsed {
        Some(envelope) => envelope,
        None if body.is_empty() => Envelope::default(),
        None => serde_json::from_slice::<Envelope>(body)?,
    };

    if envelope.code != 0 {
        return Err(RequestError::Business {
            code: envelope.code,
            message: envelope.message,
        });
    }

    Ok(envelope)
}

fn canonical_reason(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Request failed")
        .to_string()
}
