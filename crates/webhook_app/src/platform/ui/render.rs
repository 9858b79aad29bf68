use webhook_core::{AppViewModel, DialogView, WebhookRowView};

use super::viewport::Viewport;

/// Attributes shown after the id, in this order, when present.
const SUMMARY_KEYS: [&str; 2] = ["method", "pathname"];

pub fn render(view: &AppViewModel, viewport: &Viewport) -> Vec<String> {
    let mut lines = Vec::new();

    let action = if view.dialog == DialogView::Generating {
        "generating..."
    } else if view.can_generate {
        "[g] generate handler"
    } else {
        "select webhooks to generate a handler"
    };
    lines.push(format!(
        "== webhooks: {} loaded, {} selected | {}",
        view.rows.len(),
        view.selected_count,
        action
    ));

    for row in &view.rows[viewport.visible_rows(view.rows.len())] {
        lines.push(render_row(row));
    }

    if view.show_sentinel && viewport.sentinel_ratio(view.rows.len()) > 0.0 {
        lines.push(if view.loading_more {
            "   ... loading more".to_string()
        } else {
            "   ... more below".to_string()
        });
    } else if view.rows.is_empty() && view.loading_more {
        lines.push("   ... loading".to_string());
    }

    if let Some(error) = &view.load_error {
        lines.push(format!("!! could not load webhooks: {error} ([r] to retry)"));
    }

    match &view.dialog {
        DialogView::Closed => {}
        DialogView::Generating => {
            lines.push("-- generating handler with AI...".to_string());
        }
        DialogView::Ready { code, copied } => {
            let copy_hint = if *copied { "copied!" } else { "[c] copy" };
            lines.push(format!("-- generated handler | {copy_hint} | [x] close"));
            lines.extend(code.lines().map(|line| format!("   {line}")));
            lines.push("--".to_string());
        }
    }

    lines
}

fn render_row(row: &WebhookRowView) -> String {
    let mark = if row.checked { "[x]" } else { "[ ]" };
    let summary: Vec<&str> = SUMMARY_KEYS
        .iter()
        .filter_map(|key| {
            row.attributes
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str())
        })
        .collect();
    if summary.is_empty() {
        format!("{mark} {}", row.id)
    } else {
        format!("{mark} {}  {}", row.id, summary.join(" "))
    }
}
