//! Plain text extraction for rich text documents.

use crate::model::{Document, Node};

/// Flatten a document to plain text.
///
/// Only text runs contribute literal content; format flags are ignored.
/// Every other node contributes the space-joined text of its children, so
/// block boundaries collapse to single spaces. The result is trimmed.
/// Used wherever a plain string is needed: excerpts, meta descriptions,
/// link labels built from address fields.
pub fn to_text(doc: &Document) -> String {
    match &doc.root {
        Some(root) => extract_text(root).trim().to_string(),
        None => String::new(),
    }
}

fn extract_text(node: &Node) -> String {
    match node {
        Node::Text { text, .. } => text.clone(),
        other => other
            .children()
            .iter()
            .map(extract_text)
            .collect::<Vec<_>>()
            .join(" "),
    }
}
