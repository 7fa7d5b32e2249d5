use std::time;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use url::Url;

use crate::domain::SubscriptionRequest;

/// Email-marketing provider client
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http_client: Client,
    action_url: Url,
}

/// Outbound subscription failure
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("The provider answered with status {status}")]
    Rejected { status: u16, body: String },
    #[error("Failed to reach the provider")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to encode the signup form")]
    Encoding(#[from] serde_urlencoded::ser::Error),
}

/// Form fields expected by the provider's signup form
#[derive(serde::Serialize)]
struct SignupForm<'a> {
    #[serde(rename = "EMAIL")]
    email: &'a str,
    locale: &'a str,
    email_address_check: &'a str,
}

impl ProviderClient {
    pub fn new(action_url: Url, timeout: Option<time::Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http_client: builder.build()?,
            action_url,
        })
    }

    /// Submit a signup to the provider's hosted form endpoint
    #[tracing::instrument(name = "Forwarding subscription to the provider", skip_all)]
    pub async fn subscribe(&self, request: &SubscriptionRequest) -> Result<(), ProviderError> {
        let form = SignupForm {
            email: request.email.as_ref(),
            locale: &request.locale,
            email_address_check: &request.honeypot,
        };
        let body = serde_urlencoded::to_string(&form)?;

        let response = self
            .http_client
            .post(self.action_url.clone())
            .header(
                CONTENT_TYPE,
                "application/x-www-form-urlencoded; charset=UTF-8",
            )
            .header(ACCEPT, "application/json,text/plain,*/*")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await?;
            Err(ProviderError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
