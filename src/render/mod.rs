//! Rendering module for converting rich text documents to output formats.

mod html;
mod options;
mod text;

pub use html::{to_html, HtmlRenderer};
pub use options::RenderOptions;
pub use text::to_text;
