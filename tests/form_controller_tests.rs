use pretty_assertions::assert_eq;
use razz_coach::{
    coach::{Goal, Tone},
    form::{FormController, FormState},
};

mod common;

use common::mocks::{sample_result, MockBackend};

#[test_log::test(tokio::test)]
async fn test_empty_transcript_never_calls_the_backend() {
    let backend = MockBackend::new();
    let mut controller = FormController::new();
    controller.set_conversation("   \n ");

    controller.generate(&backend).await;

    assert_eq!(backend.request_count(), 0);
    assert_eq!(controller.error(), Some("paste a conversation first."));
    assert_eq!(controller.state(), FormState::Idle);
    assert!(!controller.is_loading());
}

#[test_log::test(tokio::test)]
async fn test_successful_generate_stores_the_result() {
    let backend = MockBackend::new();
    backend.push_ok(sample_result("flirty", "playful"));

    let mut controller = FormController::new();
    controller.set_goal(Goal::Flirty);
    controller.set_tone(Tone::Playful);
    controller.set_conversation("Her: you are funny\nMe: ???");

    controller.generate(&backend).await;

    assert_eq!(backend.request_count(), 1);
    assert_eq!(controller.state(), FormState::Ready);
    assert!(!controller.is_loading());
    assert!(controller.error().is_none());

    let result = controller.result().unwrap();
    assert_eq!(result.goal, "flirty");
    assert_eq!(result.tone, "playful");
    assert_eq!(result.replies.len(), 3);

    let request = backend.requests.lock().unwrap()[0].clone();
    assert_eq!(request.goal, "flirty");
    assert_eq!(request.tone, "playful");
}

#[tokio::test]
async fn test_failed_generate_keeps_the_prior_result() {
    let backend = MockBackend::new();
    backend.push_ok(sample_result("reply", "chill"));
    backend.push_err("model request timed out after 30s");

    let mut controller = FormController::new();
    controller.set_conversation("Her: hey");

    controller.generate(&backend).await;
    assert_eq!(controller.state(), FormState::Ready);

    controller.generate(&backend).await;

    assert_eq!(controller.state(), FormState::Failed);
    assert!(!controller.is_loading());
    assert!(controller
        .error()
        .unwrap()
        .contains("model request timed out"));
    // Prior replies stay rendered behind the error banner.
    assert_eq!(controller.result().unwrap().replies.len(), 3);
}

#[tokio::test]
async fn test_error_is_cleared_on_the_next_attempt() {
    let backend = MockBackend::new();
    backend.push_err("something went wrong.");
    backend.push_ok(sample_result("reply", "chill"));

    let mut controller = FormController::new();
    controller.set_conversation("Her: hey");

    controller.generate(&backend).await;
    assert!(controller.error().is_some());

    controller.generate(&backend).await;
    assert!(controller.error().is_none());
    assert_eq!(controller.state(), FormState::Ready);
}

#[tokio::test]
async fn test_snapshot_hides_rationales_until_toggled() {
    let backend = MockBackend::new();
    backend.push_ok(sample_result("reply", "chill"));

    let mut controller = FormController::new();
    controller.set_conversation("Her: hey");
    controller.generate(&backend).await;

    let snapshot = controller.snapshot();
    assert!(!snapshot.placeholder);
    assert_eq!(snapshot.panels.len(), 3);
    assert!(snapshot.panels.iter().all(|panel| panel.why.is_none()));

    controller.toggle_show_why();
    let snapshot = controller.snapshot();
    assert!(snapshot.panels.iter().all(|panel| panel.why.is_some()));
    assert_eq!(snapshot.panels[0].why.as_deref(), Some("keeps it light"));
}

#[tokio::test]
async fn test_snapshot_surfaces_only_the_first_note() {
    let backend = MockBackend::new();
    let mut result = sample_result("reply", "chill");
    result.notes = vec!["first note".to_string(), "second note".to_string()];
    backend.push_ok(result);

    let mut controller = FormController::new();
    controller.set_conversation("Her: hey");
    controller.generate(&backend).await;

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.note.as_deref(), Some("first note"));
}

#[tokio::test]
async fn test_copy_text_exposes_each_candidate() {
    let backend = MockBackend::new();
    backend.push_ok(sample_result("reply", "chill"));

    let mut controller = FormController::new();
    controller.set_conversation("Her: hey");
    controller.generate(&backend).await;

    assert_eq!(controller.copy_text(0), Some("haha fair"));
    assert_eq!(controller.copy_text(2), Some("lol careful, i might start trying"));
    assert_eq!(controller.copy_text(3), None);
}
