use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{errors::{ContactError, ValidationFailure}, utils::email::is_simple_email};

pub const NOT_BLANK_RULE: &str = "not_blank";
pub const EMAIL_RULE: &str = "simple_email";

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email service not configured. Please set up your Formspree endpoint.";
pub const SENT_MESSAGE: &str = "Message sent successfully! Thank you for contacting me.";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const TRANSPORT_MESSAGE: &str = "An error occurred while sending the message. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactFormData {
    #[validate(custom(function = "not_blank"))]
    pub name: String,

    #[validate(custom(function = "contact_email"))]
    pub email: String,

    #[validate(custom(function = "not_blank"))]
    pub message: String,
}

impl ContactFormData {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        ContactFormData {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    /// Runs the form rules and reports the first one broken.
    pub fn check(&self) -> Result<(), ValidationFailure> {
        self.validate().map_err(ValidationFailure::from)
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new(NOT_BLANK_RULE);
        err.message = Some("Field cannot be empty".into());
        return Err(err);
    }
    Ok(())
}

fn contact_email(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    if !is_simple_email(value.trim()) {
        let mut err = ValidationError::new(EMAIL_RULE);
        err.message = Some("Invalid email format".into());
        return Err(err);
    }
    Ok(())
}

/// Coarse failure class, so callers can branch without reading message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Configuration,
    Transport,
}

/// Outcome of one submission attempt, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub failure: Option<FailureKind>,
}

impl SubmissionResult {
    pub fn sent() -> Self {
        SubmissionResult {
            success: true,
            message: SENT_MESSAGE.to_string(),
            failure: None,
        }
    }

    pub fn failed(kind: FailureKind, message: &str) -> Self {
        SubmissionResult {
            success: false,
            message: message.to_string(),
            failure: Some(kind),
        }
    }
}

impl From<&ContactError> for SubmissionResult {
    fn from(err: &ContactError) -> Self {
        match err {
            ContactError::Validation(ValidationFailure::MissingFields) => {
                SubmissionResult::failed(FailureKind::Validation, MISSING_FIELDS_MESSAGE)
            }
            ContactError::Validation(ValidationFailure::InvalidEmail) => {
                SubmissionResult::failed(FailureKind::Validation, INVALID_EMAIL_MESSAGE)
            }
            ContactError::NotConfigured => {
                SubmissionResult::failed(FailureKind::Configuration, NOT_CONFIGURED_MESSAGE)
            }
            ContactError::Rejected(_) => {
                SubmissionResult::failed(FailureKind::Transport, REJECTED_MESSAGE)
            }
            ContactError::Transport(_) => {
                SubmissionResult::failed(FailureKind::Transport, TRANSPORT_MESSAGE)
            }
        }
    }
}

impl From<ContactError> for SubmissionResult {
    fn from(err: ContactError) -> Self {
        SubmissionResult::from(&err)
    }
}

/// Lifecycle of the contact form as seen by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmissionState {
    /// Enters `Submitting`. Returns `false` if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    /// Records the outcome; returns `true` when the form should be reset.
    pub fn finish(&mut self, result: &SubmissionResult) -> bool {
        *self = if result.success {
            SubmissionState::Succeeded(result.message.clone())
        } else {
            SubmissionState::Failed(result.message.clone())
        };
        result.success
    }

    /// A field edit clears any terminal outcome.
    pub fn edited(&mut self) {
        if !self.is_submitting() {
            *self = SubmissionState::Idle;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn status_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded(msg) | SubmissionState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}
