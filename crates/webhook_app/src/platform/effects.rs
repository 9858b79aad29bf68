use session_logging::{session_debug, session_info};
use webhook_core::{Effect, Msg, Page, Webhook};
use webhook_engine::{EngineEvent, EngineHandle, WebhookPage, WebhookRecord};

use super::ui::viewport::SentinelObserver;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, sentinel: &mut SentinelObserver) {
        for effect in effects {
            match effect {
                Effect::FetchPage { cursor } => {
                    self.engine.fetch_page(cursor);
                }
                Effect::GenerateHandler {
                    request_id,
                    webhook_ids,
                } => {
                    session_info!(
                        "GenerateHandler request_id={} ids={:?}",
                        request_id,
                        webhook_ids
                    );
                    self.engine.generate(request_id, webhook_ids);
                }
                Effect::WriteClipboard { request_id, text } => {
                    session_debug!("WriteClipboard request_id={} len={}", request_id, text.len());
                    self.engine.write_clipboard(request_id, text);
                }
                Effect::ScheduleCopiedRevert { epoch, delay } => {
                    self.engine.schedule_revert(epoch, delay);
                }
                Effect::CancelCopiedRevert => {
                    self.engine.cancel_revert();
                }
                Effect::ObserveSentinel => {
                    session_debug!("sentinel observed");
                    sentinel.attach();
                }
                Effect::ReleaseSentinel => {
                    session_debug!("sentinel released");
                    sentinel.detach();
                }
            }
        }
    }

    pub fn try_recv(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { cursor, result } => match result {
            Ok(page) => Msg::PageLoaded {
                cursor,
                page: map_page(page),
            },
            Err(err) => Msg::PageFailed {
                cursor,
                reason: err.to_string(),
            },
        },
        EngineEvent::HandlerGenerated { request_id, result } => match result {
            Ok(code) => Msg::GenerationSucceeded { request_id, code },
            Err(err) => Msg::GenerationFailed {
                request_id,
                reason: err.to_string(),
            },
        },
        EngineEvent::ClipboardWritten { request_id, result } => match result {
            Ok(()) => Msg::ClipboardWritten { request_id },
            Err(err) => Msg::ClipboardFailed {
                request_id,
                reason: err.to_string(),
            },
        },
        EngineEvent::RevertElapsed { epoch } => Msg::CopiedRevertElapsed { epoch },
    }
}

fn map_page(page: WebhookPage) -> Page {
    Page {
        webhooks: page.webhooks.into_iter().map(map_webhook).collect(),
        next_cursor: page.next_cursor,
    }
}

fn map_webhook(record: WebhookRecord) -> Webhook {
    let attributes = record
        .fields
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect();
    Webhook {
        id: record.id,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use webhook_engine::{ApiError, ClipboardError, FailureKind};

    use super::*;

    fn record(value: serde_json::Value) -> WebhookRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn page_maps_attributes_to_strings() {
        let event = EngineEvent::PageFetched {
            cursor: Some("c2".to_string()),
            result: Ok(WebhookPage {
                webhooks: vec![record(json!({
                    "id": "a",
                    "method": "POST",
                    "statusCode": 200,
                    "contentType": null
                }))],
                next_cursor: None,
            }),
        };

        let expected = Msg::PageLoaded {
            cursor: Some("c2".to_string()),
            page: Page {
                webhooks: vec![Webhook::new("a")
                    .with_attribute("method", "POST")
                    .with_attribute("statusCode", "200")],
                next_cursor: None,
            },
        };
        assert_eq!(map_event(event), expected);
    }

    #[test]
    fn failed_page_keeps_cursor_and_reason() {
        let event = EngineEvent::PageFetched {
            cursor: None,
            result: Err(decode_error()),
        };
        match map_event(event) {
            Msg::PageFailed { cursor, reason } => {
                assert_eq!(cursor, None);
                assert!(reason.starts_with("malformed response"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn generation_and_clipboard_outcomes() {
        match map_event(EngineEvent::HandlerGenerated {
            request_id: 3,
            result: Err(decode_error()),
        }) {
            Msg::GenerationFailed { request_id, reason } => {
                assert_eq!(request_id, 3);
                assert!(reason.starts_with("malformed response"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            map_event(EngineEvent::ClipboardWritten {
                request_id: 3,
                result: Ok(()),
            }),
            Msg::ClipboardWritten { request_id: 3 }
        );
        assert_eq!(
            map_event(EngineEvent::ClipboardWritten {
                request_id: 3,
                result: Err(ClipboardError::Aborted),
            }),
            Msg::ClipboardFailed {
                request_id: 3,
                reason: ClipboardError::Aborted.to_string(),
            }
        );
        assert_eq!(
            map_event(EngineEvent::RevertElapsed { epoch: 4 }),
            Msg::CopiedRevertElapsed { epoch: 4 }
        );
    }

    fn decode_error() -> ApiError {
        ApiError {
            kind: FailureKind::Decode,
            message: "missing field `webhooks`".to_string(),
        }
    }
}
