use std::sync::Once;
use std::time::Duration;

use webhook_core::{
    update, AppState, DialogView, Effect, GenerationState, Msg, Page, Webhook,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(session_logging::initialize_for_tests);
}

fn loaded(ids: &[&str]) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            cursor: None,
            page: Page {
                webhooks: ids.iter().map(|id| Webhook::new(*id)).collect(),
                next_cursor: None,
            },
        },
    );
    state
}

fn toggle(state: AppState, id: &str) -> AppState {
    update(state, Msg::WebhookToggled(id.to_string())).0
}

#[test]
fn toggle_twice_restores_selection() {
    init_logging();
    let state = loaded(&["a", "b"]);
    let state = toggle(state, "a");
    assert_eq!(state.view().selected_count, 1);
    assert!(state.view().rows[0].checked);
    assert!(state.view().can_generate);

    let state = toggle(state, "a");
    assert_eq!(state.view().selected_count, 0);
    assert!(!state.view().rows[0].checked);
    assert!(!state.view().can_generate);
}

#[test]
fn toggling_unknown_id_is_ignored() {
    init_logging();
    let mut state = loaded(&["a"]);
    state.consume_dirty();
    let mut state = toggle(state, "ghost");
    assert_eq!(state.selection().count(), 0);
    assert!(!state.consume_dirty());
}

#[test]
fn generate_without_selection_is_rejected() {
    init_logging();
    let state = loaded(&["a"]);
    let (state, effects) = update(state, Msg::GenerateClicked);
    assert!(effects.is_empty());
    assert_eq!(state.generation().state(), &GenerationState::Idle);
}

#[test]
fn generate_and_copy_scenario() {
    init_logging();
    let state = loaded(&["a", "b", "c"]);
    let state = toggle(state, "a");
    let state = toggle(state, "b");

    let (state, effects) = update(state, Msg::GenerateClicked);
    assert_eq!(
        effects,
        vec![Effect::GenerateHandler {
            request_id: 1,
            webhook_ids: vec!["a".to_string(), "b".to_string()],
        }]
    );
    assert_eq!(state.view().dialog, DialogView::Generating);
    assert!(!state.view().can_generate);

    let (state, effects) = update(
        state,
        Msg::GenerationSucceeded {
            request_id: 1,
            code: "X".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(
        state.generation().state(),
        &GenerationState::Ready {
            request_id: 1,
            code: "X".to_string()
        }
    );

    let (state, effects) = update(state, Msg::CopyClicked);
    assert_eq!(
        effects,
        vec![Effect::WriteClipboard {
            request_id: 1,
            text: "X".to_string()
        }]
    );

    let (state, effects) = update(state, Msg::ClipboardWritten { request_id: 1 });
    let epoch = match effects.as_slice() {
        [Effect::ScheduleCopiedRevert { epoch, delay }] => {
            assert_eq!(*delay, Duration::from_millis(2000));
            *epoch
        }
        other => panic!("expected one scheduled revert, got {other:?}"),
    };
    assert_eq!(
        state.view().dialog,
        DialogView::Ready {
            code: "X".to_string(),
            copied: true
        }
    );

    let (state, _) = update(state, Msg::CopiedRevertElapsed { epoch });
    assert_eq!(
        state.view().dialog,
        DialogView::Ready {
            code: "X".to_string(),
            copied: false
        }
    );

    // Selection survives a successful run.
    assert_eq!(state.view().selected_count, 2);
}

#[test]
fn generate_while_generating_sends_one_request() {
    init_logging();
    let state = toggle(loaded(&["a"]), "a");
    let (state, first) = update(state, Msg::GenerateClicked);
    let (_state, second) = update(state, Msg::GenerateClicked);

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn failure_returns_to_idle_without_artifact() {
    init_logging();
    let state = toggle(loaded(&["a"]), "a");
    let (state, _) = update(state, Msg::GenerateClicked);
    let (state, effects) = update(
        state,
        Msg::GenerationFailed {
            request_id: 1,
            reason: "upstream returned 500".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().dialog, DialogView::Closed);
    assert!(state.view().can_generate);

    let (_state, effects) = update(state, Msg::GenerateClicked);
    assert_eq!(
        effects,
        vec![Effect::GenerateHandler {
            request_id: 2,
            webhook_ids: vec!["a".to_string()],
        }]
    );
}

#[test]
fn dismiss_clears_artifact_and_disables_copy() {
    init_logging();
    let state = toggle(loaded(&["a"]), "a");
    let (state, _) = update(state, Msg::GenerateClicked);
    let (state, _) = update(
        state,
        Msg::GenerationSucceeded {
            request_id: 1,
            code: "X".to_string(),
        },
    );
    let (state, _) = update(state, Msg::DismissClicked);
    assert_eq!(state.view().dialog, DialogView::Closed);

    let (_state, effects) = update(state, Msg::CopyClicked);
    assert!(effects.is_empty());
}

#[test]
fn dismiss_is_ignored_while_generating() {
    init_logging();
    let state = toggle(loaded(&["a"]), "a");
    let (state, _) = update(state, Msg::GenerateClicked);
    let (state, _) = update(state, Msg::DismissClicked);
    assert_eq!(state.view().dialog, DialogView::Generating);
}
