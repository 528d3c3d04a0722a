//! The shared status/note/location dialog.

use shared::{
    domain::{CaseId, CaseStatus, STATUS_VOCABULARY},
    protocol::UpdateCaseRequest,
};
use tracing::{info, warn};

use crate::{
    board::{ActionButton, CaseBoard, RenderMode},
    error::{ActionError, CaseActionError},
    host::{Alerter, ModalDialog},
    transport::CaseApi,
};

pub const COMPLETED_NOTICE: &str = "This case is completed and can no longer be updated";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub case_id: String,
    pub status: String,
    pub note: String,
    pub location: String,
}

pub struct UpdateModalController<D: ModalDialog> {
    dialog: D,
    form: UpdateForm,
}

impl<D: ModalDialog> UpdateModalController<D> {
    pub fn new(dialog: D) -> Self {
        Self {
            dialog,
            form: UpdateForm::default(),
        }
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn form(&self) -> &UpdateForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut UpdateForm {
        &mut self.form
    }

    /// Pre-fills the form for `case_id` and shows the dialog, unless the card
    /// already displays a completed status. Opening while visible re-fills.
    pub fn open(
        &mut self,
        board: &CaseBoard,
        alerter: &dyn Alerter,
        case_id: CaseId,
    ) -> Result<(), CaseActionError> {
        let Some(card) = board.card(case_id) else {
            warn!(case_id = case_id.0, "update dialog requested for unknown case");
            return Err(CaseActionError::UnknownCase(case_id));
        };

        let displayed = card.status_text();
        let status = STATUS_VOCABULARY.resolve(displayed);
        if status.is_some_and(CaseStatus::is_done) {
            alerter.alert(COMPLETED_NOTICE);
            return Err(CaseActionError::Completed(case_id));
        }

        self.form = UpdateForm {
            case_id: case_id.to_string(),
            status: status.map_or_else(|| displayed.to_string(), |s| s.code().to_string()),
            note: String::new(),
            location: String::new(),
        };
        self.dialog.show();
        Ok(())
    }

    /// Sends the form to the server and patches the card on success.
    /// The dialog stays open on every failure path.
    pub async fn submit(
        &mut self,
        api: &dyn CaseApi,
        alerter: &dyn Alerter,
        board: &mut CaseBoard,
    ) -> Result<(), CaseActionError> {
        let form = self.form.clone();
        let case_id = match form.case_id.parse::<CaseId>() {
            Ok(case_id) => case_id,
            Err(_) => {
                alerter.alert(&format!(
                    "Error while updating case: invalid case id {:?}",
                    form.case_id
                ));
                return Err(CaseActionError::InvalidFormCaseId(form.case_id));
            }
        };

        let request = UpdateCaseRequest {
            status: form.status.clone(),
            note: form.note,
            location: Some(form.location),
        };

        let response = match api.update_case(case_id, &request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(case_id = case_id.0, error = %err, "update request failed");
                alerter.alert(&format!("Error while updating case: {err}"));
                return Err(err.into());
            }
        };

        let card = match board.card_mut(case_id) {
            Some(card) if response.is_success() => card,
            card => {
                let message = response.error_text().to_string();
                warn!(
                    case_id = case_id.0,
                    on_board = card.is_some(),
                    error = %message,
                    "case update not applied"
                );
                alerter.alert(&format!("Failed to update case: {message}"));
                return Err(if card.is_none() {
                    CaseActionError::UnknownCase(case_id)
                } else {
                    ActionError::new(message).into()
                });
            }
        };

        let status = STATUS_VOCABULARY.resolve(&request.status);
        card.set_status_text(STATUS_VOCABULARY.label(&request.status));
        card.replace_button(ActionButton::for_mode(RenderMode::Other, status));
        self.dialog.hide();
        info!(case_id = case_id.0, status = %request.status, "case updated");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/modal_tests.rs"]
mod tests;
