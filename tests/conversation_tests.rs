//! Submission flow tests
//!
//! Drive `ChatState::submit` against a mock chat function and check the
//! transcript, the outgoing payload and the notifications.

mod common;

use common::mocks::{uploaded, MockChatFunction, RecordingNotifier};
use docchat::conversation::{
    request_reply, ChatState, Liveness, EMPTY_REPLY_FALLBACK, GENERIC_ERROR,
};
use docchat::types::{AppError, ChatResponse, Role};
use futures::executor::block_on;

#[test]
fn test_empty_submit_is_noop() {
    let chat = MockChatFunction::answering("unused");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    let sent = block_on(state.submit("   ", &chat, &notifier));

    assert!(!sent);
    assert!(state.messages.is_empty());
    assert_eq!(chat.calls(), 0);
    assert!(notifier.toasts().is_empty());
}

#[test]
fn test_plain_message_has_no_file_suffix() {
    let chat = MockChatFunction::answering("Hi!");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    block_on(state.submit("What is this about?", &chat, &notifier));

    let request = chat.last_request().unwrap();
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.last_content(), Some("What is this about?"));
}

#[test]
fn test_attached_file_is_appended_to_outgoing_message() {
    let chat = MockChatFunction::answering("It says hello");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();
    state.attach([uploaded("a.txt", "hello")]);

    block_on(state.submit("Summarize", &chat, &notifier));

    let request = chat.last_request().unwrap();
    assert_eq!(
        request.last_content(),
        Some("Summarize\n\nUploaded documents:\n--- a.txt ---\nhello")
    );
    // The transcript shows only what the user typed
    assert_eq!(state.messages[0].content, "Summarize");
}

#[test]
fn test_files_only_submission_is_allowed() {
    let chat = MockChatFunction::answering("Summary");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();
    state.attach([uploaded("a.txt", "hello")]);

    assert!(block_on(state.submit("", &chat, &notifier)));
    assert_eq!(
        chat.last_request().unwrap().last_content(),
        Some("\n\nUploaded documents:\n--- a.txt ---\nhello")
    );
}

#[test]
fn test_success_appends_one_assistant_message() {
    let chat = MockChatFunction::answering("Answer");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    block_on(state.submit("Question", &chat, &notifier));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "Answer");
    assert!(!state.is_loading);
    assert!(notifier.toasts().is_empty());
}

#[test]
fn test_application_error_keeps_user_message() {
    let chat = MockChatFunction::with_error("boom");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    block_on(state.submit("Question", &chat, &notifier));

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::User);
    assert!(!state.is_loading);

    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].description.contains("boom"));
}

#[test]
fn test_transport_error_is_reported_the_same_way() {
    let chat = MockChatFunction::failing("Network error: connection refused");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    block_on(state.submit("Question", &chat, &notifier));

    assert_eq!(state.messages.len(), 1);
    assert!(!state.is_loading);
    assert_eq!(notifier.errors().len(), 1);
    assert!(notifier.errors()[0].description.contains("connection refused"));
}

#[test]
fn test_resubmit_after_failure_sends_full_history() {
    let failing = MockChatFunction::with_error("boom");
    let working = MockChatFunction::answering("Answer");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    block_on(state.submit("Question", &failing, &notifier));
    block_on(state.submit("Question", &working, &notifier));

    let request = working.last_request().unwrap();
    let contents: Vec<&str> = request.messages.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, ["Question", "Question"]);
    assert_eq!(state.messages.len(), 3);
}

#[test]
fn test_history_carries_roles() {
    let chat = MockChatFunction::answering("A");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    block_on(state.submit("one", &chat, &notifier));
    block_on(state.submit("two", &chat, &notifier));

    let request = chat.last_request().unwrap();
    let roles: Vec<Role> = request.messages.iter().map(|t| t.role).collect();
    assert_eq!(roles, [Role::User, Role::Assistant, Role::User]);
}

#[test]
fn test_message_ids_unique_across_session() {
    let chat = MockChatFunction::answering("A");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    for text in ["a", "b", "c"] {
        block_on(state.submit(text, &chat, &notifier));
    }

    let mut ids: Vec<&str> = state.messages.iter().map(|m| m.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn test_submit_blocked_while_loading() {
    let chat = MockChatFunction::answering("A");
    let notifier = RecordingNotifier::new();
    let mut state = ChatState::new();

    state.begin_submit("first").unwrap();
    assert!(!block_on(state.submit("second", &chat, &notifier)));
    assert_eq!(chat.calls(), 0);
}

#[test]
fn test_empty_content_uses_fallback() {
    let chat = MockChatFunction::with_body(ChatResponse {
        content: Some(String::new()),
        error: None,
    });
    let reply = block_on(request_reply(&chat, &Default::default()));
    assert_eq!(reply.unwrap(), EMPTY_REPLY_FALLBACK);

    let chat = MockChatFunction::with_body(ChatResponse::default());
    let reply = block_on(request_reply(&chat, &Default::default()));
    assert_eq!(reply.unwrap(), EMPTY_REPLY_FALLBACK);
}

#[test]
fn test_whitespace_content_is_kept() {
    let chat = MockChatFunction::with_body(ChatResponse {
        content: Some("   ".to_string()),
        error: None,
    });
    let reply = block_on(request_reply(&chat, &Default::default()));
    assert_eq!(reply.unwrap(), "   ");
}

#[test]
fn test_empty_error_field_is_not_a_failure() {
    let chat = MockChatFunction::with_body(ChatResponse {
        content: Some("Answer".to_string()),
        error: Some(String::new()),
    });
    let reply = block_on(request_reply(&chat, &Default::default()));
    assert_eq!(reply.unwrap(), "Answer");

    let chat = MockChatFunction::with_error("");
    let reply = block_on(request_reply(&chat, &Default::default()));
    assert_eq!(reply.unwrap(), EMPTY_REPLY_FALLBACK);
}

#[test]
fn test_failure_without_message_uses_generic_text() {
    let chat = MockChatFunction::failing("");
    let reply = block_on(request_reply(&chat, &Default::default()));
    assert_eq!(reply, Err(AppError::Transport(GENERIC_ERROR.to_string())));
}

#[test]
fn test_reply_after_unmount_is_dropped() {
    let notifier = RecordingNotifier::new();
    let alive = Liveness::new();
    let mut state = ChatState::new();
    state.begin_submit("Question").unwrap();

    alive.kill();
    let applied = state.finish_submit_if_alive(&alive, Ok("Answer".to_string()), &notifier);
    assert!(!applied);
    let applied = state.finish_submit_if_alive(
        &alive,
        Err(AppError::Remote("boom".to_string())),
        &notifier,
    );
    assert!(!applied);

    assert_eq!(state.messages.len(), 1);
    assert!(state.is_loading);
    assert!(notifier.toasts().is_empty());
}

#[test]
fn test_reply_while_mounted_is_applied() {
    let notifier = RecordingNotifier::new();
    let alive = Liveness::new();
    let mut state = ChatState::new();
    state.begin_submit("Question").unwrap();

    assert!(state.finish_submit_if_alive(&alive, Ok("Answer".to_string()), &notifier));
    assert_eq!(state.messages.len(), 2);
    assert!(!state.is_loading);
}
