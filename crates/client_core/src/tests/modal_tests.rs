use super::*;
use crate::{
    board::{ButtonStyle, CardAction, Region},
    host::HeadlessDialog,
    test_support::{case, message, rejection, RecordingAlerter, ScriptedCaseApi},
};

fn taken_board(status: &str) -> CaseBoard {
    let mut board = CaseBoard::new();
    board.render_card(&case(1, status), RenderMode::Other, Region::Taken);
    board
}

fn opened(board: &CaseBoard) -> UpdateModalController<HeadlessDialog> {
    let mut modal = UpdateModalController::new(HeadlessDialog::default());
    modal
        .open(board, &RecordingAlerter::default(), CaseId(1))
        .expect("open");
    modal
}

#[test]
fn open_prefills_form_and_shows_dialog() {
    let board = taken_board("in_progress");
    let alerter = RecordingAlerter::default();
    let mut modal = UpdateModalController::new(HeadlessDialog::default());
    modal.form_mut().note = "left over".into();

    modal.open(&board, &alerter, CaseId(1)).expect("open");

    assert!(modal.dialog().is_visible());
    assert_eq!(
        modal.form(),
        &UpdateForm {
            case_id: "1".into(),
            status: "in_progress".into(),
            note: String::new(),
            location: String::new(),
        }
    );
    assert!(alerter.alerts().is_empty());
}

#[test]
fn open_on_completed_case_is_refused() {
    let board = taken_board("done");
    let alerter = RecordingAlerter::default();
    let mut modal = UpdateModalController::new(HeadlessDialog::default());
    let untouched = UpdateForm {
        case_id: "7".into(),
        status: "accepted".into(),
        note: "draft".into(),
        location: "lobby".into(),
    };
    *modal.form_mut() = untouched.clone();

    let err = modal.open(&board, &alerter, CaseId(1)).expect_err("completed");

    assert!(matches!(err, CaseActionError::Completed(CaseId(1))));
    assert!(!modal.dialog().is_visible());
    assert_eq!(modal.dialog().times_shown(), 0);
    assert_eq!(modal.form(), &untouched);
    assert_eq!(alerter.alerts(), vec![COMPLETED_NOTICE]);
}

#[test]
fn reopening_refills_and_reshows() {
    let board = taken_board("accepted");
    let alerter = RecordingAlerter::default();
    let mut modal = opened(&board);
    modal.form_mut().note = "typed".into();

    modal.open(&board, &alerter, CaseId(1)).expect("reopen");

    assert_eq!(modal.dialog().times_shown(), 2);
    assert!(modal.form().note.is_empty());
}

#[test]
fn open_for_unknown_case_does_nothing() {
    let board = CaseBoard::new();
    let alerter = RecordingAlerter::default();
    let mut modal = UpdateModalController::new(HeadlessDialog::default());

    let err = modal.open(&board, &alerter, CaseId(3)).expect_err("unknown");

    assert!(matches!(err, CaseActionError::UnknownCase(CaseId(3))));
    assert!(!modal.dialog().is_visible());
}

#[tokio::test]
async fn submitting_done_locks_card_and_closes_dialog() {
    let api = ScriptedCaseApi::default().with_update(message("Case progress updated"));
    let alerter = RecordingAlerter::default();
    let mut board = taken_board("accepted");
    let mut modal = opened(&board);
    modal.form_mut().status = "done".into();
    modal.form_mut().note = "signed".into();
    modal.form_mut().location = "Reception".into();

    modal
        .submit(&api, &alerter, &mut board)
        .await
        .expect("submit");

    let card = board.card(CaseId(1)).expect("card");
    assert_eq!(card.status_text(), "Completed");
    assert_eq!(card.button().label(), "completed");
    assert!(card.button().is_disabled());
    assert_eq!(card.button().style(), ButtonStyle::Neutral);
    assert_eq!(board.click(CaseId(1)), None);
    assert!(!modal.dialog().is_visible());

    let sent = api.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].1,
        UpdateCaseRequest {
            status: "done".into(),
            note: "signed".into(),
            location: Some("Reception".into()),
        }
    );
}

#[tokio::test]
async fn submitting_open_status_keeps_update_button() {
    let api = ScriptedCaseApi::default().with_update(message("ok"));
    let alerter = RecordingAlerter::default();
    let mut board = taken_board("accepted");
    let mut modal = opened(&board);
    modal.form_mut().status = "delivered".into();

    modal
        .submit(&api, &alerter, &mut board)
        .await
        .expect("submit");

    let card = board.card(CaseId(1)).expect("card");
    assert_eq!(card.status_text(), "Delivered");
    assert_eq!(card.button().label(), "update");
    assert_eq!(board.click(CaseId(1)), Some(CardAction::OpenUpdate));
}

#[tokio::test]
async fn rejected_submit_alerts_and_keeps_dialog_open() {
    let api = ScriptedCaseApi::default().with_update(rejection("denied"));
    let alerter = RecordingAlerter::default();
    let mut board = taken_board("accepted");
    let mut modal = opened(&board);
    modal.form_mut().status = "done".into();

    let err = modal
        .submit(&api, &alerter, &mut board)
        .await
        .expect_err("denied");

    assert!(matches!(err, CaseActionError::Rejected(_)));
    assert_eq!(alerter.alerts(), vec!["Failed to update case: denied"]);
    assert!(modal.dialog().is_visible());
    assert_eq!(board.card(CaseId(1)).expect("card").status_text(), "Accepted");
}

#[tokio::test]
async fn transport_failure_keeps_dialog_open() {
    let api = ScriptedCaseApi::default().with_transport_failure("timed out");
    let alerter = RecordingAlerter::default();
    let mut board = taken_board("accepted");
    let mut modal = opened(&board);

    let err = modal
        .submit(&api, &alerter, &mut board)
        .await
        .expect_err("transport");

    assert!(matches!(err, CaseActionError::Transport(_)));
    assert_eq!(alerter.alerts(), vec!["Error while updating case: timed out"]);
    assert!(modal.dialog().is_visible());
}

#[tokio::test]
async fn success_for_case_missing_from_board_is_reported() {
    let api = ScriptedCaseApi::default().with_update(message("ok"));
    let alerter = RecordingAlerter::default();
    let mut board = CaseBoard::new();
    let mut modal = UpdateModalController::new(HeadlessDialog::default());
    *modal.form_mut() = UpdateForm {
        case_id: "12".into(),
        status: "delivered".into(),
        ..UpdateForm::default()
    };

    let err = modal
        .submit(&api, &alerter, &mut board)
        .await
        .expect_err("missing card");

    assert!(matches!(err, CaseActionError::UnknownCase(CaseId(12))));
    assert_eq!(alerter.alerts(), vec!["Failed to update case: "]);
    assert_eq!(api.sent().len(), 1);
}

#[tokio::test]
async fn malformed_case_id_is_not_sent() {
    let api = ScriptedCaseApi::default();
    let alerter = RecordingAlerter::default();
    let mut board = taken_board("accepted");
    let mut modal = UpdateModalController::new(HeadlessDialog::default());
    modal.form_mut().case_id = "abc".into();

    let err = modal
        .submit(&api, &alerter, &mut board)
        .await
        .expect_err("bad id");

    assert!(matches!(err, CaseActionError::InvalidFormCaseId(ref raw) if raw == "abc"));
    assert!(api.sent().is_empty());
    assert_eq!(alerter.alerts().len(), 1);
}
