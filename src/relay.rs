//! Server side of the contact form: forwards messages to the hosted form relay.

use std::{sync::OnceLock, time::Duration};

use http::Uri;
use reqwest::{header::ACCEPT, StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::contact::{FormData, SubmissionClient, SubmitError};

pub const DEFAULT_ENDPOINT: &str = "https://formsubmit.co/ajax/manuga.dewhan@gmail.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub const ENDPOINT_VAR: &str = "CONTACT_RELAY_URL";
pub const TIMEOUT_VAR: &str = "CONTACT_RELAY_TIMEOUT_SECS";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

static RELAY: OnceLock<RelayClient> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayConfigError {
    #[error("CONTACT_RELAY_URL is not an http(s) URL: {0}")]
    Endpoint(String),
    #[error("CONTACT_RELAY_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    Timeout(String),
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RelayConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENDPOINT_VAR) {
            config.endpoint = validate_endpoint(url)?;
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            config.timeout = match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => Duration::from_secs(n),
                _ => return Err(RelayConfigError::Timeout(secs)),
            };
        }
        Ok(config)
    }
}

fn validate_endpoint(url: String) -> Result<String, RelayConfigError> {
    let Ok(uri) = url.parse::<Uri>() else {
        return Err(RelayConfigError::Endpoint(url));
    };
    match (uri.scheme_str(), uri.host()) {
        (Some("http" | "https"), Some(_)) => Ok(url),
        _ => Err(RelayConfigError::Endpoint(url)),
    }
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay responded with {0}")]
    Rejected(StatusCode),
}

impl From<RelayError> for SubmitError {
    fn from(value: RelayError) -> Self {
        SubmitError::new(value.to_string())
    }
}

#[derive(Serialize, Debug)]
struct RelayPayload<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    // turns off the relay's captcha page so the ajax endpoint answers directly
    #[serde(rename = "_captcha")]
    captcha: &'static str,
}

impl<'a> From<&'a FormData> for RelayPayload<'a> {
    fn from(value: &'a FormData) -> Self {
        Self {
            name: &value.name,
            email: &value.email,
            subject: &value.subject,
            message: &value.message,
            captcha: "false",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST, no retry. Any 2xx is a delivery.
    pub async fn forward(&self, data: &FormData) -> Result<(), RelayError> {
        let status = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .json(&RelayPayload::from(data))
            .send()
            .await?
            .status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected(status))
        }
    }
}

impl SubmissionClient for RelayClient {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError> {
        self.forward(data).await.map_err(|e| {
            tracing::warn!(error = %e, endpoint = %self.endpoint, "contact relay failed");
            e.into()
        })
    }
}

/// Makes `client` the relay used by the contact server function.
///
/// Returns `false` if one was already installed.
pub fn install(client: RelayClient) -> bool {
    RELAY.set(client).is_ok()
}

pub fn installed() -> Option<&'static RelayClient> {
    RELAY.get()
}
