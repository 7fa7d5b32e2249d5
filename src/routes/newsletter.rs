use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::content::Content;
use crate::domain::{SubscriberEmail, SubscriptionRequest, DEFAULT_LOCALE};
use crate::provider_client::{ProviderClient, ProviderError};
use crate::utils::error_chain_fmt;

/// JSON body posted by the signup form
#[derive(serde::Deserialize)]
pub struct SignupBody {
    email: Option<serde_json::Value>,
    #[serde(default = "default_locale")]
    locale: String,
    /// `Some(Null)` when the field is present but null
    #[serde(default, deserialize_with = "present")]
    email_address_check: Option<serde_json::Value>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.into()
}

fn present<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer).map(Some)
}

impl TryFrom<SignupBody> for SubscriptionRequest {
    type Error = String;

    fn try_from(value: SignupBody) -> Result<Self, Self::Error> {
        let email = value
            .email
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .ok_or("The email field is missing or is not a string")?;
        // Any honeypot value other than "" marks a bot, whatever its type
        let honeypot = match value.email_address_check {
            None => String::new(),
            Some(serde_json::Value::String(s)) => s,
            Some(other) => other.to_string(),
        };
        Ok(Self {
            email: SubscriberEmail::parse(email)?,
            locale: value.locale,
            honeypot,
        })
    }
}

/// Successful relay outcome
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RelaySuccess {
    pub success: bool,
}

/// Failed relay outcome
#[derive(serde::Serialize, serde::Deserialize)]
pub struct RelayFailure {
    pub error: String,
}

/// Subscription relay error
#[derive(thiserror::Error)]
pub enum RelayError {
    #[error("Please provide a valid email address.")]
    InvalidEmail(String),
    #[error("Brevo rejected the subscription request.")]
    ProviderRejected(u16),
    #[error("We couldn't reach the subscription service. Please try again.")]
    Unreachable(#[source] ProviderError),
}

impl fmt::Debug for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            Self::ProviderRejected(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Unreachable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(RelayFailure {
            error: self.to_string(),
        })
    }
}

impl From<ProviderError> for RelayError {
    fn from(value: ProviderError) -> Self {
        match value {
            ProviderError::Rejected { status, body } => {
                tracing::error!(provider.status = status, provider.body = %body, "Brevo subscription failed");
                Self::ProviderRejected(status)
            }
            other => {
                tracing::error!(error.cause_chain = ?other, "Brevo subscription error");
                Self::Unreachable(other)
            }
        }
    }
}

/// Newsletter signup relay handler
#[tracing::instrument(name = "Relaying a newsletter signup", skip(body, provider_client))]
pub async fn subscribe(
    body: web::Bytes,
    provider_client: web::Data<ProviderClient>,
) -> Result<HttpResponse, RelayError> {
    // Anything that does not yield a non-empty email is the caller's fault
    let request: SubscriptionRequest = serde_json::from_slice::<SignupBody>(&body)
        .map_err(|e| e.to_string())
        .and_then(SubscriptionRequest::try_from)
        .map_err(|e| {
            tracing::warn!(reason = %e, "Rejecting a signup without a usable email");
            RelayError::InvalidEmail(e)
        })?;

    // Pretend to succeed for bots, without registering them
    if request.is_bot() {
        tracing::info!("Discarding a signup with a filled honeypot field");
        return Ok(success());
    }

    provider_client.subscribe(&request).await?;
    Ok(success())
}

/// Newsletter block handler, drives the signup form
pub async fn newsletter_settings(content: web::Data<Content>) -> HttpResponse {
    HttpResponse::Ok().json(&content.newsletter)
}

fn success() -> HttpResponse {
    HttpResponse::Ok().json(RelaySuccess { success: true })
}
