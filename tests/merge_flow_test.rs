//! Tests for the merge flow around the request itself: the queue
//! precondition, the trigger disable/re-enable contract, and what a
//! saved or failed outcome does to the model.

use std::path::PathBuf;

use mergetui::logic::merge::{
    begin, check_precondition, finish, merge_payload, MergeOutcome,
};
use mergetui::model::Model;

fn model_with_files(n: usize) -> Model {
    let mut model = Model::new(false);
    for i in 0..n {
        model
            .files
            .add(PathBuf::from(format!("/docs/doc{i}.pdf")), 100);
    }
    model
}

#[test]
fn merge_with_empty_queue_aborts_without_side_effects() {
    let mut model = model_with_files(0);

    // Precondition fails, so no request is started and nothing changes
    assert!(check_precondition(&model.files).is_err());
    assert!(!model.ui.merge_in_flight);
    assert!(merge_payload(&model.files).is_empty());

    // The abort path never flips the trigger
    if check_precondition(&model.files).is_ok() {
        begin(&mut model.ui);
    }
    assert!(!model.ui.merge_in_flight);
}

#[test]
fn merge_with_single_file_aborts() {
    let model = model_with_files(1);
    assert!(check_precondition(&model.files).is_err());
}

#[test]
fn trigger_is_disabled_while_request_is_outstanding() {
    let mut model = model_with_files(2);

    assert!(begin(&mut model.ui));
    assert!(model.ui.merge_in_flight);

    // A second activation while in flight is ignored
    assert!(!begin(&mut model.ui));
}

#[test]
fn saved_outcome_restores_trigger_and_clears_queue() {
    let mut model = model_with_files(3);
    model.ui.selected = Some(1);
    model.ui.grabbed = Some(model.files.entries()[0].id);
    assert!(begin(&mut model.ui));

    finish(
        &mut model,
        &MergeOutcome::Saved {
            path: PathBuf::from("/downloads/merged.pdf"),
            size: 4096,
            merged: 3,
        },
    );

    assert!(!model.ui.merge_in_flight, "trigger must be re-enabled");
    assert!(model.files.is_empty(), "queue is cleared on confirmed save");
    assert_eq!(model.ui.selected, None);
    assert_eq!(model.ui.grabbed, None);

    let (message, _) = model.ui.toast_message.expect("success is reported");
    assert!(message.contains("/downloads/merged.pdf"));
}

#[test]
fn failed_outcome_restores_trigger_and_keeps_queue() {
    let mut model = model_with_files(2);
    assert!(begin(&mut model.ui));

    finish(
        &mut model,
        &MergeOutcome::Failed {
            message: "Merge failed (HTTP 500)".to_string(),
        },
    );

    assert!(!model.ui.merge_in_flight, "trigger must be re-enabled");
    assert_eq!(model.files.len(), 2, "queue survives a failure for retry");

    let (message, _) = model.ui.toast_message.expect("failure is reported");
    assert!(message.starts_with("Error:"));
    assert!(message.contains("HTTP 500"));
}

#[test]
fn trigger_recovers_even_when_the_save_step_failed() {
    let mut model = model_with_files(2);
    assert!(begin(&mut model.ui));

    // The request succeeded but writing the document to disk did not;
    // this still arrives as exactly one outcome message.
    finish(
        &mut model,
        &MergeOutcome::Failed {
            message: "Merged document could not be saved: permission denied".to_string(),
        },
    );

    assert!(!model.ui.merge_in_flight);
    assert!(begin(&mut model.ui), "a fresh merge can be started");
}
