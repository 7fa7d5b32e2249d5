use reqwest::Client;
use url::{ParseError, Url};

use crate::domain::DEFAULT_LOCALE;

/// Shown when the relay gives no usable reason for a failure
pub const FALLBACK_ERROR_MESSAGE: &str = "Your subscription could not be saved. Please try again.";

/// Values read from the signup form on submit
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FormValues {
    pub email: String,
    pub locale: String,
    /// Hidden honeypot input, empty unless a bot filled it in
    pub email_address_check: String,
}

impl FormValues {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            locale: DEFAULT_LOCALE.into(),
            email_address_check: String::new(),
        }
    }
}

/// Signup submission failure
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to reach the newsletter endpoint")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Message to display next to the form
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected(message) => message,
            Self::Transport(_) => FALLBACK_ERROR_MESSAGE,
        }
    }
}

/// HTTP client for the newsletter relay endpoint
#[derive(Debug, Clone)]
pub struct RelayClient {
    http_client: Client,
    endpoint: Url,
}

impl RelayClient {
    /// Build a client for the relay served under `base_url`
    pub fn new(base_url: &str) -> Result<Self, ParseError> {
        let endpoint = Url::parse(base_url)?.join("/api/newsletter")?;
        Ok(Self {
            http_client: Client::new(),
            endpoint,
        })
    }

    /// Post a signup to the relay
    #[tracing::instrument(name = "Submitting the newsletter form", skip_all)]
    pub async fn submit(&self, values: &FormValues) -> Result<(), SubmitError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(values)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(());
        }

        // Use the relay's reason only if it is a string
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|payload| payload.get("error")?.as_str().map(str::to_owned))
            .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_owned());
        Err(SubmitError::Rejected(message))
    }
}
