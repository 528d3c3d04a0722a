use reqwest::StatusCode;
use shared::domain::CaseId;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to fetch cases")]
pub struct FetchError {
    pub status: StatusCode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The request never produced a usable answer: connection, URL or body decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<url::ParseError> for TransportError {
    fn from(value: url::ParseError) -> Self {
        Self(format!("invalid url: {value}"))
    }
}

#[derive(Debug, Error)]
pub enum CaseApiError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<reqwest::Error> for CaseApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.into())
    }
}

impl From<url::ParseError> for CaseApiError {
    fn from(value: url::ParseError) -> Self {
        Self::Transport(value.into())
    }
}

/// Why a click or a form submission left the board untouched.
#[derive(Debug, Error)]
pub enum CaseActionError {
    #[error("case {0} is not on the board")]
    UnknownCase(CaseId),
    #[error("case {0} is completed and can no longer be updated")]
    Completed(CaseId),
    #[error("case {0} is not pending")]
    NotPending(CaseId),
    #[error("case {0} has not been accepted yet")]
    NotTaken(CaseId),
    #[error("invalid case id in update form: {0:?}")]
    InvalidFormCaseId(String),
    #[error(transparent)]
    Rejected(#[from] ActionError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
