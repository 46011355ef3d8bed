//! HTML rendering for rich text documents.

use crate::model::{Document, ListKind, Node, TextFormat};

use super::RenderOptions;

/// Convert a document to an HTML fragment.
///
/// The walk is depth-first, pre-order, left-to-right, so output follows
/// document order. Empty documents render as the empty string, and the
/// function never fails.
///
/// Text content is emitted verbatim, without HTML escaping: the output is
/// only as trustworthy as the CMS that authored the document. Callers
/// embedding content from an untrusted source must add their own
/// sanitization layer.
pub fn to_html(doc: &Document, options: &RenderOptions) -> String {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to an HTML fragment.
    pub fn render(&self, doc: &Document) -> String {
        match &doc.root {
            Some(root) => {
                let mut output = String::new();
                self.render_node(root, &mut output);
                output
            }
            None => String::new(),
        }
    }

    fn render_node(&self, node: &Node, output: &mut String) {
        match node {
            // No wrapper: the root and anything we don't recognize are
            // transparent containers.
            Node::Root { children } | Node::Other { children } => {
                self.render_children(children, output);
            }
            Node::Paragraph { children } => {
                let inner = self.collect_children(children);
                // Empty paragraphs are editor artifacts; drop them.
                if !inner.trim().is_empty() {
                    output.push_str("<p>");
                    output.push_str(&inner);
                    output.push_str("</p>");
                }
            }
            Node::Heading { tag, children } => {
                self.render_wrapped(tag.as_str(), children, output);
            }
            Node::Text { text, format } => {
                output.push_str(&format_text(text, *format));
            }
            Node::Link {
                url,
                new_tab,
                children,
            } => {
                output.push_str("<a href=\"");
                output.push_str(url);
                output.push('"');
                if *new_tab {
                    output.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
                }
                self.push_class(&self.options.link_class, output);
                output.push('>');
                self.render_children(children, output);
                output.push_str("</a>");
            }
            Node::List { kind, children } => {
                let tag = match kind {
                    ListKind::Numbered => "ol",
                    ListKind::Bulleted => "ul",
                };
                self.render_wrapped(tag, children, output);
            }
            Node::ListItem { children } => {
                self.render_wrapped("li", children, output);
            }
            Node::Quote { children } => {
                output.push_str("<blockquote");
                self.push_class(&self.options.quote_class, output);
                output.push('>');
                self.render_children(children, output);
                output.push_str("</blockquote>");
            }
        }
    }

    fn render_children(&self, children: &[Node], output: &mut String) {
        for child in children {
            self.render_node(child, output);
        }
    }

    fn collect_children(&self, children: &[Node]) -> String {
        let mut inner = String::new();
        self.render_children(children, &mut inner);
        inner
    }

    fn render_wrapped(&self, tag: &str, children: &[Node], output: &mut String) {
        output.push('<');
        output.push_str(tag);
        output.push('>');
        self.render_children(children, output);
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
    }

    fn push_class(&self, class: &str, output: &mut String) {
        if !class.is_empty() {
            output.push_str(" class=\"");
            output.push_str(class);
            output.push('"');
        }
    }
}

/// Apply inline format flags as nested tags.
///
/// The wrap order is fixed: bold, then italic, then underline, each
/// wrapping the previous result. A bold+italic run therefore comes out as
/// `<em><strong>text</strong></em>`.
fn format_text(text: &str, format: TextFormat) -> String {
    let mut result = text.to_string();

    if format.is_bold() {
        result = format!("<strong>{}</strong>", result);
    }
    if format.is_italic() {
        result = format!("<em>{}</em>", result);
    }
    if format.is_underline() {
        result = format!("<u>{}</u>", result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn html(value: serde_json::Value) -> String {
        to_html(&Document::from_value(&value), &RenderOptions::plain())
    }

    #[test]
    fn test_format_text_wrap_order() {
        let bold_italic = TextFormat::from_bits(TextFormat::BOLD | TextFormat::ITALIC);
        assert_eq!(format_text("X", bold_italic), "<em><strong>X</strong></em>");

        let all = TextFormat::from_bits(
            TextFormat::BOLD | TextFormat::ITALIC | TextFormat::UNDERLINE,
        );
        assert_eq!(format_text("X", all), "<u><em><strong>X</strong></em></u>");

        assert_eq!(format_text("X", TextFormat::default()), "X");
    }

    #[test]
    fn test_unknown_format_bits_ignored() {
        // Bit 2 (strikethrough) and up are not part of the output vocabulary.
        assert_eq!(format_text("X", TextFormat::from_bits(4)), "X");
        assert_eq!(
            format_text("X", TextFormat::from_bits(TextFormat::BOLD | 4)),
            "<strong>X</strong>"
        );
    }

    #[test]
    fn test_paragraph() {
        let out = html(json!({
            "root": {"type": "root", "children": [
                {"type": "paragraph", "children": [{"type": "text", "text": "Hi"}]},
            ]},
        }));
        assert_eq!(out, "<p>Hi</p>");
    }

    #[test]
    fn test_empty_paragraph_elided() {
        let out = html(json!({
            "root": {"type": "root", "children": [
                {"type": "paragraph", "children": [{"type": "text", "text": ""}]},
                {"type": "paragraph", "children": [{"type": "text", "text": "   "}]},
                {"type": "paragraph", "children": []},
            ]},
        }));
        assert_eq!(out, "");
    }

    #[test]
    fn test_heading_uses_tag() {
        let out = html(json!({
            "root": {"type": "root", "children": [
                {"type": "heading", "tag": "h3", "children": [{"type": "text", "text": "T"}]},
            ]},
        }));
        assert_eq!(out, "<h3>T</h3>");
    }

    #[test]
    fn test_empty_heading_not_elided() {
        let out = html(json!({
            "root": {"type": "root", "children": [{"type": "heading", "children": []}]},
        }));
        assert_eq!(out, "<h2></h2>");
    }

    #[test]
    fn test_lists() {
        let doc = json!({
            "root": {"type": "root", "children": [
                {"type": "list", "listType": "number", "children": [
                    {"type": "listitem", "children": [{"type": "text", "text": "um"}]},
                    {"type": "listitem", "children": [{"type": "text", "text": "dois"}]},
                ]},
            ]},
        });
        assert_eq!(html(doc), "<ol><li>um</li><li>dois</li></ol>");

        let doc = json!({
            "root": {"type": "root", "children": [
                {"type": "list", "listType": "bullet", "children": [
                    {"type": "listitem", "children": [{"type": "text", "text": "um"}]},
                ]},
            ]},
        });
        assert_eq!(html(doc), "<ul><li>um</li></ul>");
    }

    #[test]
    fn test_quote_with_class() {
        let doc = Document::from_value(&json!({
            "root": {"type": "root", "children": [
                {"type": "quote", "children": [{"type": "text", "text": "q"}]},
            ]},
        }));
        let out = to_html(&doc, &RenderOptions::new().with_quote_class("q-class"));
        assert_eq!(out, "<blockquote class=\"q-class\">q</blockquote>");
    }

    #[test]
    fn test_link_attributes() {
        let doc = json!({
            "root": {"type": "root", "children": [
                {"type": "link", "fields": {"url": "/x"}, "children": [
                    {"type": "text", "text": "label"},
                ]},
            ]},
        });
        assert_eq!(html(doc), "<a href=\"/x\">label</a>");

        let doc = json!({
            "root": {"type": "root", "children": [
                {"type": "link", "fields": {"url": "/x", "newTab": true}, "children": [
                    {"type": "text", "text": "label"},
                ]},
            ]},
        });
        assert_eq!(
            html(doc),
            "<a href=\"/x\" target=\"_blank\" rel=\"noopener noreferrer\">label</a>"
        );
    }

    #[test]
    fn test_link_default_class() {
        let doc = Document::from_value(&json!({
            "root": {"type": "root", "children": [
                {"type": "link", "fields": {"url": "/x"}, "children": [
                    {"type": "text", "text": "label"},
                ]},
            ]},
        }));
        let out = to_html(&doc, &RenderOptions::default());
        assert_eq!(
            out,
            "<a href=\"/x\" class=\"text-brand-600 hover:underline\">label</a>"
        );
    }

    #[test]
    fn test_unknown_node_passes_children_through() {
        let out = html(json!({
            "root": {"type": "root", "children": [
                {"type": "customBlock", "children": [{"type": "text", "text": "kept"}]},
            ]},
        }));
        assert_eq!(out, "kept");
    }
}
