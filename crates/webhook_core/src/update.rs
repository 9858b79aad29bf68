use crate::{AppState, Effect, Msg, COPIED_REVERT_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            if state.is_mounted() {
                return (state, Vec::new());
            }
            state.set_mounted(true);
            state.mark_dirty();
            // Remounting keeps already loaded pages.
            let mut effects = if state.pages().has_loaded_any() {
                Vec::new()
            } else {
                load_next(&mut state)
            };
            effects.extend(sync_sentinel(&mut state));
            effects
        }
        Msg::Unmounted => {
            if !state.is_mounted() {
                return (state, Vec::new());
            }
            state.set_mounted(false);
            state.mark_dirty();
            let mut effects = sync_sentinel(&mut state);
            if state.feedback_mut().reset() {
                effects.push(Effect::CancelCopiedRevert);
            }
            effects
        }
        Msg::SentinelVisibility { ratio } => {
            // A crossing while a fetch is in flight is consumed, not queued.
            if state.trigger_mut().report(ratio) {
                load_next(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::LoadMoreRequested => {
            if state.is_mounted() {
                load_next(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::PageLoaded { cursor, page } => {
            if !state.pages_mut().apply_loaded(cursor.as_deref(), page) {
                return (state, Vec::new());
            }
            state.mark_dirty();
            let effects = sync_sentinel(&mut state);
            state.trigger_mut().rearm();
            effects
        }
        Msg::PageFailed { cursor, reason } => {
            // The trigger stays disarmed: the sentinel has to leave and
            // re-enter the viewport, or the caller asks again.
            if !state.pages_mut().apply_failed(cursor.as_deref()) {
                return (state, Vec::new());
            }
            state.set_load_error(Some(reason));
            state.mark_dirty();
            sync_sentinel(&mut state)
        }
        Msg::WebhookToggled(id) => {
            if state.pages().contains(&id) {
                state.selection_mut().toggle(&id);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::GenerateClicked => {
            let snapshot = state.selection().snapshot();
            match state.generation_mut().start(snapshot) {
                Some(request) => {
                    state.mark_dirty();
                    vec![Effect::GenerateHandler {
                        request_id: request.request_id,
                        webhook_ids: request.webhook_ids,
                    }]
                }
                None => Vec::new(),
            }
        }
        Msg::GenerationSucceeded { request_id, code } => {
            if !state.generation_mut().succeed(request_id, code) {
                return (state, Vec::new());
            }
            state.mark_dirty();
            // A new artifact has not been copied yet.
            if state.feedback_mut().reset() {
                vec![Effect::CancelCopiedRevert]
            } else {
                Vec::new()
            }
        }
        Msg::GenerationFailed { request_id, .. } => {
            if state.generation_mut().fail(request_id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CopyClicked => {
            let generation = state.generation();
            match (generation.ready_request(), generation.code()) {
                (Some(request_id), Some(code)) => vec![Effect::WriteClipboard {
                    request_id,
                    text: code.to_owned(),
                }],
                _ => Vec::new(),
            }
        }
        Msg::ClipboardWritten { request_id } => {
            // An ack for an artifact that is no longer shown confirms nothing.
            if !state.is_mounted() || state.generation().ready_request() != Some(request_id) {
                return (state, Vec::new());
            }
            let epoch = state.feedback_mut().mark_copied();
            state.mark_dirty();
            vec![Effect::ScheduleCopiedRevert {
                epoch,
                delay: COPIED_REVERT_DELAY,
            }]
        }
        Msg::CopiedRevertElapsed { epoch } => {
            if state.feedback_mut().revert_elapsed(epoch) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DismissClicked => {
            if state.generation_mut().dismiss() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClipboardFailed { .. } => Vec::new(),
    };

    (state, effects)
}

fn load_next(state: &mut AppState) -> Vec<Effect> {
    match state.pages_mut().begin_load() {
        Some(cursor) => {
            state.set_load_error(None);
            state.mark_dirty();
            vec![Effect::FetchPage { cursor }]
        }
        None => Vec::new(),
    }
}

/// Keeps the sentinel observed exactly while it is rendered: mounted, at
/// least one page in, and more to come.
fn sync_sentinel(state: &mut AppState) -> Vec<Effect> {
    let wanted = state.is_mounted() && state.pages().has_loaded_any() && state.pages().has_more();
    let trigger = state.trigger_mut();
    if wanted && trigger.observe() {
        vec![Effect::ObserveSentinel]
    } else if !wanted && trigger.release() {
        vec![Effect::ReleaseSentinel]
    } else {
        Vec::new()
    }
}
