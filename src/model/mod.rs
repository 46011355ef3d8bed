//! Rich text document model.
//!
//! This module defines the tree representation of a Lexical rich text
//! field as the CMS delivers it. The model is built defensively from JSON:
//! unknown node types become transparent containers and malformed fields
//! are treated as absent, so a document can always be constructed from
//! whatever the editor produced.

mod document;
mod node;

pub use document::Document;
pub use node::{HeadingTag, ListKind, Node, TextFormat, MAX_DEPTH};
