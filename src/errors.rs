use derive_more::Display;
use validator::ValidationErrors;

use crate::entities::contact::NOT_BLANK_RULE;

/// Errors raised while assembling the process-wide state.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("Configuration error: {_0}")]
    Config(String),

    #[display("HTTP client error: {_0}")]
    HttpClient(String),

    #[display("Telemetry error: {_0}")]
    Telemetry(String),
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(err.to_string())
    }
}

/// Integrity violations in a skill catalog definition.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[display("Duplicate category title: {_0}")]
    DuplicateCategory(String),

    #[display("Duplicate skill '{skill}' in category '{category}'")]
    DuplicateSkill { category: String, skill: String },

    #[display("Skill '{skill}' claims category '{claimed}' but belongs to '{owner}'")]
    OrphanedSkill {
        skill: String,
        claimed: String,
        owner: String,
    },
}

impl std::error::Error for CatalogError {}

/// The first contact-form rule a submission broke.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[display("one or more fields are empty")]
    MissingFields,

    #[display("email address is malformed")]
    InvalidEmail,
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let blank = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|e| e.code == NOT_BLANK_RULE);

        // Blank fields win over a malformed address.
        if blank {
            ValidationFailure::MissingFields
        } else {
            ValidationFailure::InvalidEmail
        }
    }
}

/// Every way a contact submission can fail.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[display("Invalid contact form: {_0}")]
    Validation(ValidationFailure),

    #[display("Contact endpoint not configured")]
    NotConfigured,

    #[display("Relay rejected the message with status {_0}")]
    Rejected(u16),

    #[display("Transport error: {_0}")]
    Transport(String),
}

impl std::error::Error for ContactError {}

impl From<ValidationFailure> for ContactError {
    fn from(failure: ValidationFailure) -> Self {
        ContactError::Validation(failure)
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ContactError::Transport(format!("request timed out: {}", err))
        } else if err.is_connect() {
            ContactError::Transport(format!("connection failed: {}", err))
        } else {
            ContactError::Transport(err.to_string())
        }
    }
}
