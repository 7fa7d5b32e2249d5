use crate::domain::SubscriberEmail;

/// Locale used when the caller does not provide one
pub const DEFAULT_LOCALE: &str = "en";

/// A signup accepted by the relay guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub email: SubscriberEmail,
    pub locale: String,
    /// Hidden form field that real users never fill in
    pub honeypot: String,
}

impl SubscriptionRequest {
    /// Whether the submission was made by an automated form filler
    pub fn is_bot(&self) -> bool {
        !self.honeypot.is_empty()
    }
}
