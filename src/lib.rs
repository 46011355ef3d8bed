//! # sitibegam-content
//!
//! Content layer for the SITIBEGAM union website.
//!
//! The site renders pages from a headless Payload CMS; this crate owns
//! everything between the API and the templates:
//!
//! - **Rich text rendering**: Lexical editor state to HTML fragments or
//!   flattened plain text
//! - **Typed collections**: posts, categories, site configuration, the
//!   per-page content documents, and form submissions
//! - **API client**: endpoint/query construction, tag-based response
//!   caching, and decode, over a pluggable HTTP transport
//! - **Cache invalidation**: mapping CMS webhook events to the cache tags
//!   and page paths they touch
//! - **View models**: the transforms pages use to turn CMS documents into
//!   render-ready structs
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//!
//! let content = json!({
//!     "root": {"type": "root", "children": [
//!         {"type": "paragraph", "children": [
//!             {"type": "text", "text": "Assembleia dia 12", "format": 1},
//!         ]},
//!     ]},
//! });
//!
//! let html = sitibegam_content::to_html(&content);
//! assert_eq!(html, "<p><strong>Assembleia dia 12</strong></p>");
//!
//! let text = sitibegam_content::to_text(&content);
//! assert_eq!(text, "Assembleia dia 12");
//! ```
//!
//! Rendering is total: `null`, a number, or a document with no root all
//! come back as the empty string, never an error. Text content is NOT
//! HTML-escaped; the output is only as safe as the CMS that authored it.

pub mod cms;
pub mod error;
pub mod model;
pub mod render;
pub mod view;

// Re-export commonly used types
pub use cms::{
    plan_invalidation, secret_matches, ChangeEvent, Collection, ContentClient, HttpResponse,
    HttpTransport, Id, InvalidationPlan, Operation, Paginated, Query, TagCache,
};
pub use error::{Error, Result};
pub use model::{Document, HeadingTag, ListKind, Node, TextFormat};
pub use render::{HtmlRenderer, RenderOptions};

use serde_json::Value;

/// Convert a rich text value to an HTML fragment with default options.
///
/// Accepts any JSON value; malformed or rootless input renders as `""`.
///
/// # Example
///
/// ```
/// use serde_json::json;
///
/// assert_eq!(sitibegam_content::to_html(&json!(null)), "");
/// ```
pub fn to_html(content: &Value) -> String {
    render::to_html(&Document::from_value(content), &RenderOptions::default())
}

/// Convert a rich text value to an HTML fragment with custom options.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use sitibegam_content::RenderOptions;
///
/// let content = json!({"root": {"type": "root", "children": [
///     {"type": "quote", "children": [{"type": "text", "text": "Unidos"}]},
/// ]}});
/// let html = sitibegam_content::to_html_with_options(&content, &RenderOptions::plain());
/// assert_eq!(html, "<blockquote>Unidos</blockquote>");
/// ```
pub fn to_html_with_options(content: &Value, options: &RenderOptions) -> String {
    render::to_html(&Document::from_value(content), options)
}

/// Extract trimmed plain text from a rich text value.
///
/// Formatting is dropped and block boundaries collapse to single spaces.
/// Malformed input yields `""`.
pub fn to_text(content: &Value) -> String {
    render::to_text(&Document::from_value(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_html_total_over_malformed_input() {
        assert_eq!(to_html(&Value::Null), "");
        assert_eq!(to_html(&json!({})), "");
        assert_eq!(to_html(&json!("texto solto")), "");
        assert_eq!(to_html(&json!([1, 2, 3])), "");
    }

    #[test]
    fn test_to_html_simple_paragraph() {
        let content = json!({"root": {"type": "root", "children": [
            {"type": "paragraph", "children": [{"type": "text", "text": "Hi"}]},
        ]}});
        assert_eq!(to_html(&content), "<p>Hi</p>");
    }

    #[test]
    fn test_to_text_total_over_malformed_input() {
        assert_eq!(to_text(&Value::Null), "");
        assert_eq!(to_text(&json!({"root": 1})), "");
    }

    #[test]
    fn test_idempotence() {
        let content = json!({"root": {"type": "root", "children": [
            {"type": "heading", "tag": "h2", "children": [{"type": "text", "text": "T"}]},
            {"type": "paragraph", "children": [{"type": "text", "text": "B", "format": 2}]},
        ]}});
        assert_eq!(to_html(&content), to_html(&content));
        assert_eq!(to_text(&content), to_text(&content));
    }
}
