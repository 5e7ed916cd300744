//! Renderer for the CMS rich-text block format.
//!
//! Content fields arrive as a JSON array of blocks (`paragraph`, `heading`,
//! `list`) whose children are text leaves with optional `bold`, `italic` and
//! `underline` marks. Unknown block types degrade to their plain text.

use serde_json::Value;

use super::{accent_fg, get_ansi_code};

/// Renders a rich-text document into terminal lines. `None` or an
/// unexpected shape renders as empty.
pub fn render_rich_text(document: Option<&Value>) -> String {
    let Some(blocks) = document.and_then(Value::as_array) else {
        return String::new();
    };
    let mut out = String::new();
    for block in blocks {
        render_block(block, &mut out);
    }
    out
}

fn render_block(block: &Value, out: &mut String) {
    let children = block.get("children").and_then(Value::as_array);
    match block.get("type").and_then(Value::as_str) {
        Some("heading") => {
            let code = get_ansi_code(accent_fg(), 220);
            out.push_str(&format!("\x1b[1m\x1b[38;5;{code}m"));
            render_children(children, out);
            out.push_str("\x1b[0m\n\n");
        }
        Some("list") => {
            let ordered = block.get("format").and_then(Value::as_str) == Some("ordered");
            for (i, item) in children.into_iter().flatten().enumerate() {
                if ordered {
                    out.push_str(&format!("{}. ", i + 1));
                } else {
                    out.push_str("• ");
                }
                render_children(item.get("children").and_then(Value::as_array), out);
                out.push('\n');
            }
            out.push('\n');
        }
        // Paragraphs and anything unrecognized fall back to inline text
        _ => {
            render_children(children, out);
            out.push_str("\n\n");
        }
    }
}

fn render_children(children: Option<&Vec<Value>>, out: &mut String) {
    for leaf in children.into_iter().flatten() {
        let text = leaf.get("text").and_then(Value::as_str).unwrap_or("");
        if text.is_empty() {
            continue;
        }
        let bold = leaf.get("bold").and_then(Value::as_bool).unwrap_or(false);
        let underline = leaf
            .get("underline")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let italic = leaf.get("italic").and_then(Value::as_bool).unwrap_or(false);

        if bold {
            out.push_str("\x1b[1m");
        }
        if underline {
            out.push_str("\x1b[4m");
        }
        if italic {
            out.push_str("\x1b[3m");
        }
        out.push_str(text);
        if bold || underline || italic {
            out.push_str("\x1b[0m");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_paragraphs_in_order() {
        let doc = json!([
            { "type": "paragraph", "children": [{ "type": "text", "text": "first" }] },
            { "type": "paragraph", "children": [{ "type": "text", "text": "second" }] },
        ]);
        let out = render_rich_text(Some(&doc));
        let first = out.find("first").unwrap();
        let second = out.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_marks_bold_and_underline() {
        let doc = json!([{
            "type": "paragraph",
            "children": [
                { "type": "text", "text": "plain " },
                { "type": "text", "text": "strong", "bold": true },
                { "type": "text", "text": "under", "underline": true },
            ],
        }]);
        let out = render_rich_text(Some(&doc));
        assert!(out.contains("\x1b[1mstrong\x1b[0m"));
        assert!(out.contains("\x1b[4munder\x1b[0m"));
    }

    #[test]
    fn test_unordered_and_ordered_lists() {
        let doc = json!([{
            "type": "list",
            "format": "ordered",
            "children": [
                { "type": "list-item", "children": [{ "type": "text", "text": "one" }] },
                { "type": "list-item", "children": [{ "type": "text", "text": "two" }] },
            ],
        }]);
        let out = render_rich_text(Some(&doc));
        assert!(out.contains("1. one"));
        assert!(out.contains("2. two"));
    }

    #[test]
    fn test_tolerates_missing_or_malformed_document() {
        assert_eq!(render_rich_text(None), "");
        assert_eq!(render_rich_text(Some(&json!({ "not": "blocks" }))), "");
    }
}
