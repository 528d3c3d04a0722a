//! Accepting a pending case.

use shared::{
    domain::{CaseId, CaseStatus, STATUS_VOCABULARY},
    protocol::UpdateCaseRequest,
};
use tracing::{info, warn};

use crate::{
    board::{ActionButton, CaseBoard, Region, RenderMode},
    error::{ActionError, CaseActionError},
    host::Alerter,
    transport::CaseApi,
};

pub const ACCEPT_NOTE: &str = "Accepted by staff";

pub fn accept_request() -> UpdateCaseRequest {
    UpdateCaseRequest {
        status: CaseStatus::Accepted.code().to_string(),
        note: ACCEPT_NOTE.to_string(),
        location: None,
    }
}

/// Sends the accept transition for `case_id` and, once the server confirms,
/// relabels the card, rebinds its button to the update dialog and moves it
/// into `destination`. Failures are alerted and leave the board untouched.
pub async fn take_case(
    api: &dyn CaseApi,
    alerter: &dyn Alerter,
    board: &mut CaseBoard,
    case_id: CaseId,
    destination: Region,
) -> Result<(), CaseActionError> {
    if board.card(case_id).is_none() {
        warn!(case_id = case_id.0, "accept requested for a case that is not on the board");
        return Err(CaseActionError::UnknownCase(case_id));
    }

    let response = match api.update_case(case_id, &accept_request()).await {
        Ok(response) => response,
        Err(err) => {
            warn!(case_id = case_id.0, error = %err, "accept request failed");
            alerter.alert(&format!("Error while accepting case: {err}"));
            return Err(err.into());
        }
    };

    if !response.is_success() {
        let message = response.error_text().to_string();
        warn!(case_id = case_id.0, error = %message, "server rejected accept");
        alerter.alert(&format!("Failed to accept case: {message}"));
        return Err(ActionError::new(message).into());
    }

    let Some(card) = board.card_mut(case_id) else {
        return Err(CaseActionError::UnknownCase(case_id));
    };
    card.set_status_text(STATUS_VOCABULARY.label_of(CaseStatus::Accepted));
    // A freshly accepted case is never done, so this always yields the update button.
    card.replace_button(ActionButton::for_mode(
        RenderMode::Other,
        Some(CaseStatus::Accepted),
    ));
    board.move_to(case_id, destination);
    info!(case_id = case_id.0, "case accepted");
    Ok(())
}

#[cfg(test)]
#[path = "tests/take_tests.rs"]
mod tests;
