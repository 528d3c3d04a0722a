use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::{
    domain::CaseId,
    protocol::{Case, CaseUpdateEntry, UpdateCaseRequest, UpdateCaseResponse},
};

use crate::{
    error::{CaseApiError, FetchError, TransportError},
    host::Alerter,
    transport::CaseApi,
};

pub(crate) fn case(id: i64, status: &str) -> Case {
    Case {
        id: CaseId(id),
        document_name: Some(format!("Contract #{id}")),
        delivery_target: Some("Front desk".into()),
        given_location: None,
        given_to_staff_time: Some("2024-05-01 09:30:00".into()),
        note: Some(String::new()),
        status: status.into(),
        user_id: None,
        updates: Vec::new(),
    }
}

pub(crate) fn entry(time: &str, status: &str, note: Option<&str>) -> CaseUpdateEntry {
    CaseUpdateEntry {
        time: time.into(),
        status: status.into(),
        note: note.map(str::to_string),
        location: None,
    }
}

pub(crate) fn message(text: &str) -> UpdateCaseResponse {
    UpdateCaseResponse {
        message: Some(text.into()),
        error: None,
    }
}

pub(crate) fn rejection(text: &str) -> UpdateCaseResponse {
    UpdateCaseResponse {
        message: None,
        error: Some(text.into()),
    }
}

#[derive(Default)]
pub(crate) struct RecordingAlerter {
    alerts: Mutex<Vec<String>>,
}

impl RecordingAlerter {
    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts lock").clone()
    }
}

impl Alerter for RecordingAlerter {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("alerts lock")
            .push(message.to_string());
    }
}

/// In-memory server: list urls answer with fixed cases or a status code,
/// update calls pop scripted responses in order.
#[derive(Default)]
pub(crate) struct ScriptedCaseApi {
    lists: HashMap<String, Result<Vec<Case>, StatusCode>>,
    updates: Mutex<VecDeque<Result<UpdateCaseResponse, TransportError>>>,
    sent: Mutex<Vec<(CaseId, UpdateCaseRequest)>>,
}

impl ScriptedCaseApi {
    pub(crate) fn with_list(mut self, url: &str, cases: Vec<Case>) -> Self {
        self.lists.insert(url.to_string(), Ok(cases));
        self
    }

    pub(crate) fn with_failing_list(mut self, url: &str, status: StatusCode) -> Self {
        self.lists.insert(url.to_string(), Err(status));
        self
    }

    pub(crate) fn with_update(self, response: UpdateCaseResponse) -> Self {
        self.push_update(Ok(response));
        self
    }

    pub(crate) fn with_transport_failure(self, message: &str) -> Self {
        self.push_update(Err(TransportError(message.to_string())));
        self
    }

    pub(crate) fn push_update(&self, response: Result<UpdateCaseResponse, TransportError>) {
        self.updates
            .lock()
            .expect("updates lock")
            .push_back(response);
    }

    pub(crate) fn sent(&self) -> Vec<(CaseId, UpdateCaseRequest)> {
        self.sent.lock().expect("sent lock").clone()
    }
}

#[async_trait]
impl CaseApi for ScriptedCaseApi {
    async fn fetch_cases(&self, url: &str) -> Result<Vec<Case>, CaseApiError> {
        match self.lists.get(url) {
            Some(Ok(cases)) => Ok(cases.clone()),
            Some(Err(status)) => Err(FetchError { status: *status }.into()),
            None => Err(FetchError {
                status: StatusCode::NOT_FOUND,
            }
            .into()),
        }
    }

    async fn update_case(
        &self,
        case_id: CaseId,
        request: &UpdateCaseRequest,
    ) -> Result<UpdateCaseResponse, TransportError> {
        self.sent
            .lock()
            .expect("sent lock")
            .push((case_id, request.clone()));
        self.updates
            .lock()
            .expect("updates lock")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted response".into())))
    }
}
