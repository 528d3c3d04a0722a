use serde::{Deserialize, Serialize};

use crate::domain::{CaseId, CaseStatus, UserId, STATUS_VOCABULARY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseUpdateEntry {
    pub time: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_to_staff_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Raw status as sent by the server: a status code, a display label, or
    /// something this client does not know about.
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub updates: Vec<CaseUpdateEntry>,
}

impl Case {
    pub fn status(&self) -> Option<CaseStatus> {
        STATUS_VOCABULARY.resolve(&self.status)
    }

    pub fn is_done(&self) -> bool {
        self.status().is_some_and(CaseStatus::is_done)
    }
}

/// Body of `POST /update_taken_case/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCaseRequest {
    pub status: String,
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Either `{message}` or `{error}`, independent of the HTTP status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCaseResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UpdateCaseResponse {
    pub fn is_success(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.is_empty())
    }

    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }
}
