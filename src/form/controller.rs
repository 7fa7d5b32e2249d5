use std::sync::Arc;
use std::time;

use tokio::sync::Mutex;

use crate::content::Newsletter;
use crate::domain::validate_email;
use crate::form::{Debouncer, FormValues, RelayClient, SubmissionStatus};

/// Quiet period before a keystroke is validated while no error is shown
pub const DEBOUNCE_DELAY: time::Duration = time::Duration::from_millis(2000);

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUCCESS_MESSAGE: &str = "Your subscription has been successful.";

/// Observable state of the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub field_error: Option<String>,
    pub touched: bool,
    pub status: SubmissionStatus,
}

impl FormState {
    /// Status message, shown only once a submission has settled
    pub fn status_message(&self) -> Option<&str> {
        self.status.message()
    }

    pub const fn submit_disabled(&self) -> bool {
        self.status.is_loading()
    }

    pub const fn submit_label(&self) -> &'static str {
        if self.status.is_loading() {
            "Subscribing..."
        } else {
            "Subscribe"
        }
    }

    /// Store a value and validate it
    fn set_email(&mut self, value: String) {
        self.field_error = (!validate_email(&value)).then(|| INVALID_EMAIL_MESSAGE.to_owned());
        self.email = value;
    }

    fn apply_change(&mut self, value: String) {
        self.set_email(value);
        // A new value makes the previous result stale
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

/// Newsletter signup form controller
pub struct SubscriptionForm {
    state: Arc<Mutex<FormState>>,
    debouncer: Mutex<Debouncer>,
    relay: RelayClient,
}

impl SubscriptionForm {
    /// Mount a form for the newsletter block, unless the block is hidden
    pub fn mount(newsletter: &Newsletter, relay: RelayClient) -> Option<Self> {
        newsletter.display.then(|| Self::new(relay, DEBOUNCE_DELAY))
    }

    pub fn new(relay: RelayClient, debounce_delay: time::Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            debouncer: Mutex::new(Debouncer::new(debounce_delay)),
            relay,
        }
    }

    /// Current form state
    pub async fn state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    /// Handle an edit of the email field.
    ///
    /// Debounced while no error is shown, so a partially typed address does
    /// not flash an error; applied immediately once an error is shown.
    pub async fn on_change(&self, value: impl Into<String>) {
        let value = value.into();
        let mut debouncer = self.debouncer.lock().await;
        let mut state = self.state.lock().await;
        if state.field_error.is_some() {
            debouncer.cancel();
            state.apply_change(value);
        } else {
            let shared = Arc::clone(&self.state);
            debouncer.schedule(async move {
                shared.lock().await.apply_change(value);
            });
        }
    }

    /// Handle the email field losing focus
    pub async fn on_blur(&self, value: impl Into<String>) {
        let mut debouncer = self.debouncer.lock().await;
        debouncer.cancel();
        let mut state = self.state.lock().await;
        state.touched = true;
        state.set_email(value.into());
    }

    /// Handle a form submission and return the resulting status.
    ///
    /// Ignored while a previous submission is in flight.
    #[tracing::instrument(name = "Handling a newsletter form submission", skip_all)]
    pub async fn on_submit(&self, values: FormValues) -> SubmissionStatus {
        let values = {
            let mut debouncer = self.debouncer.lock().await;
            let mut state = self.state.lock().await;
            if state.status.is_loading() {
                return state.status.clone();
            }
            // The submitted value supersedes any pending edit
            debouncer.cancel();

            state.touched = true;
            let email = values.email.trim().to_owned();
            state.set_email(email.clone());
            if state.field_error.is_some() {
                return state.status.clone();
            }
            state.status = SubmissionStatus::Loading;

            FormValues { email, ..values }
        };

        let outcome = self.relay.submit(&values).await;

        let mut state = self.state.lock().await;
        match outcome {
            Ok(()) => {
                // Reset the fields and re-arm the form
                *state = FormState {
                    status: SubmissionStatus::Success(SUCCESS_MESSAGE.to_owned()),
                    ..FormState::default()
                };
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Newsletter signup failed");
                state.status = SubmissionStatus::Error(e.user_message().to_owned());
            }
        }
        state.status.clone()
    }
}
