use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case status: {0}")]
pub struct UnknownStatus(pub String);
