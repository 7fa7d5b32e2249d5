/// Submission status of one signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether a submission result is currently shown
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }

    /// Message attached to a settled status, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(message) | Self::Error(message) if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
