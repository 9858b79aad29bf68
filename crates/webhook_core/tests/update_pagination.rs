use std::sync::Once;

use webhook_core::{update, AppState, Effect, Msg, Page, Webhook};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(session_logging::initialize_for_tests);
}

fn page(ids: &[&str], next: Option<&str>) -> Page {
    Page {
        webhooks: ids.iter().map(|id| Webhook::new(*id)).collect(),
        next_cursor: next.map(str::to_string),
    }
}

fn ids(state: &AppState) -> Vec<String> {
    state.view().rows.into_iter().map(|row| row.id).collect()
}

/// Mounted state with the first page `[a, b]` (next cursor `c2`) applied.
fn first_page_loaded() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            cursor: None,
            page: page(&["a", "b"], Some("c2")),
        },
    );
    state
}

#[test]
fn mount_fetches_first_page_without_cursor() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Mounted);

    assert_eq!(effects, vec![Effect::FetchPage { cursor: None }]);
    let view = state.view();
    assert!(view.loading_more);
    assert!(!view.show_sentinel);
    assert!(state.consume_dirty());

    let (_state, effects) = update(state, Msg::Mounted);
    assert!(effects.is_empty());
}

#[test]
fn first_page_starts_observing_sentinel() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            cursor: None,
            page: page(&["a", "b"], Some("c2")),
        },
    );

    assert_eq!(effects, vec![Effect::ObserveSentinel]);
    let view = state.view();
    assert!(view.show_sentinel);
    assert!(view.has_more);
    assert!(!view.loading_more);
    assert_eq!(ids(&state), vec!["a", "b"]);
}

#[test]
fn sentinel_scenario_loads_to_the_end() {
    init_logging();
    let state = first_page_loaded();

    let (state, effects) = update(state, Msg::SentinelVisibility { ratio: 0.5 });
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            cursor: Some("c2".to_string())
        }]
    );

    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            cursor: Some("c2".to_string()),
            page: page(&["c"], None),
        },
    );
    assert_eq!(effects, vec![Effect::ReleaseSentinel]);
    assert_eq!(ids(&state), vec!["a", "b", "c"]);
    let view = state.view();
    assert!(!view.has_more);
    assert!(!view.show_sentinel);

    let (state, effects) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn visibility_below_threshold_does_not_load() {
    init_logging();
    let state = first_page_loaded();
    let (_state, effects) = update(state, Msg::SentinelVisibility { ratio: 0.09 });
    assert!(effects.is_empty());
}

#[test]
fn only_one_fetch_in_flight() {
    init_logging();
    let state = first_page_loaded();
    let (state, first) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    assert_eq!(first.len(), 1);

    let (state, effects) = update(state, Msg::SentinelVisibility { ratio: 0.0 });
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::LoadMoreRequested);
    assert!(effects.is_empty());
}

#[test]
fn still_visible_sentinel_keeps_loading_after_success() {
    init_logging();
    let state = first_page_loaded();
    let (state, _) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            cursor: Some("c2".to_string()),
            page: page(&["c"], Some("c3")),
        },
    );
    assert!(effects.is_empty());

    let (_state, effects) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            cursor: Some("c3".to_string())
        }]
    );
}

#[test]
fn failure_keeps_list_and_waits_for_new_crossing() {
    init_logging();
    let state = first_page_loaded();
    let (state, _) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    let (state, effects) = update(
        state,
        Msg::PageFailed {
            cursor: Some("c2".to_string()),
            reason: "http status 500".to_string(),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.load_error.as_deref(), Some("http status 500"));
    assert!(!view.loading_more);
    assert_eq!(ids(&state), vec!["a", "b"]);

    // No automatic retry while the sentinel just stays visible.
    let (state, effects) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::SentinelVisibility { ratio: 0.0 });
    let (state, effects) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            cursor: Some("c2".to_string())
        }]
    );
    assert_eq!(state.view().load_error, None);
}

#[test]
fn caller_can_retry_failed_first_page() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Mounted);
    let (state, effects) = update(
        state,
        Msg::PageFailed {
            cursor: None,
            reason: "network error".to_string(),
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().has_more);

    let (_state, effects) = update(state, Msg::LoadMoreRequested);
    assert_eq!(effects, vec![Effect::FetchPage { cursor: None }]);
}

#[test]
fn stale_page_is_dropped() {
    init_logging();
    let state = first_page_loaded();
    let before = state.clone();
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            cursor: Some("c9".to_string()),
            page: page(&["zzz"], None),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn unmount_releases_sentinel_and_remount_keeps_pages() {
    init_logging();
    let state = first_page_loaded();
    let (state, effects) = update(state, Msg::Unmounted);
    assert_eq!(effects, vec![Effect::ReleaseSentinel]);

    let (state, effects) = update(state, Msg::SentinelVisibility { ratio: 1.0 });
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::Mounted);
    assert_eq!(effects, vec![Effect::ObserveSentinel]);
    assert_eq!(ids(&state), vec!["a", "b"]);
}
