//! View layer for the case desk: renders case cards and the history table
//! from server snapshots and applies accept/update actions to them.

use shared::domain::CaseId;
use tracing::{debug, info};

pub mod board;
pub mod error;
pub mod host;
pub mod modal;
pub mod table;
pub mod take;
pub mod transport;

pub use board::{ActionButton, ButtonStyle, CardAction, CaseBoard, CaseCard, Region, RenderMode};
pub use error::{ActionError, CaseActionError, CaseApiError, FetchError, TransportError};
pub use host::{Alerter, HeadlessDialog, ModalDialog};
pub use modal::{UpdateForm, UpdateModalController};
pub use table::{CaseRow, CaseTable};
pub use transport::{endpoints, CaseApi, HttpCaseApi};

/// One page worth of state: the board, the update dialog and the
/// collaborators the handlers talk to. Every mutation goes through `&mut self`,
/// so a page never has two requests in flight.
pub struct CaseDesk<A, L, D>
where
    A: CaseApi,
    L: Alerter,
    D: ModalDialog,
{
    api: A,
    alerter: L,
    board: CaseBoard,
    modal: UpdateModalController<D>,
}

impl<A, L, D> CaseDesk<A, L, D>
where
    A: CaseApi,
    L: Alerter,
    D: ModalDialog,
{
    pub fn new(api: A, alerter: L, dialog: D) -> Self {
        Self {
            api,
            alerter,
            board: CaseBoard::new(),
            modal: UpdateModalController::new(dialog),
        }
    }

    pub fn board(&self) -> &CaseBoard {
        &self.board
    }

    pub fn modal(&self) -> &UpdateModalController<D> {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut UpdateModalController<D> {
        &mut self.modal
    }

    pub async fn load_cards(
        &mut self,
        url: &str,
        mode: RenderMode,
        region: Region,
    ) -> Result<usize, CaseApiError> {
        let cases = self.api.fetch_cases(url).await?;
        for case in &cases {
            self.board.render_card(case, mode, region);
        }
        info!(url, count = cases.len(), ?region, "cards rendered");
        Ok(cases.len())
    }

    pub async fn load_board(
        &mut self,
        pending_url: &str,
        taken_url: &str,
    ) -> Result<(), CaseApiError> {
        self.load_cards(pending_url, RenderMode::Pending, Region::Pending)
            .await?;
        self.load_cards(taken_url, RenderMode::Other, Region::Taken)
            .await?;
        Ok(())
    }

    pub async fn load_history(&mut self, url: &str) -> Result<&CaseTable, CaseApiError> {
        let cases = self.api.fetch_cases(url).await?;
        self.board.table_mut().populate(&cases);
        Ok(self.board.table())
    }

    // Disabled buttons do nothing.
    pub async fn click(&mut self, case_id: CaseId) -> Result<(), CaseActionError> {
        match self.board.click(case_id) {
            Some(CardAction::Accept) => {
                take::take_case(
                    &self.api,
                    &self.alerter,
                    &mut self.board,
                    case_id,
                    Region::Taken,
                )
                .await
            }
            Some(CardAction::OpenUpdate) => self.open_update(case_id),
            None if self.board.card(case_id).is_none() => {
                Err(CaseActionError::UnknownCase(case_id))
            }
            None => {
                debug!(case_id = case_id.0, "click on a disabled button ignored");
                Ok(())
            }
        }
    }

    pub async fn accept(&mut self, case_id: CaseId) -> Result<(), CaseActionError> {
        match self.board.click(case_id) {
            Some(CardAction::Accept) => {
                take::take_case(
                    &self.api,
                    &self.alerter,
                    &mut self.board,
                    case_id,
                    Region::Taken,
                )
                .await
            }
            _ if self.board.card(case_id).is_none() => {
                Err(CaseActionError::UnknownCase(case_id))
            }
            _ => Err(CaseActionError::NotPending(case_id)),
        }
    }

    /// Cards still waiting to be accepted are refused; completed cards are
    /// left to the dialog's own guard.
    pub fn open_update(&mut self, case_id: CaseId) -> Result<(), CaseActionError> {
        if self.board.click(case_id) == Some(CardAction::Accept) {
            return Err(CaseActionError::NotTaken(case_id));
        }
        self.modal.open(&self.board, &self.alerter, case_id)
    }

    pub async fn submit_update(&mut self) -> Result<(), CaseActionError> {
        self.modal
            .submit(&self.api, &self.alerter, &mut self.board)
            .await
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
