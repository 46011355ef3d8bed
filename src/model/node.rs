//! Node-level types for the rich text tree.
//!
//! A [`Node`] is one tagged variant of a Lexical editor-state tree. The set
//! of variants is closed; anything the CMS sends that we do not recognize
//! becomes [`Node::Other`], a transparent container whose children are still
//! rendered. That keeps new block types from crashing or blanking a page.

use serde_json::Value;

/// Maximum tree depth accepted while building nodes from JSON.
///
/// Deeper nodes are dropped, which bounds recursion in both construction
/// and rendering. Real editor output is a handful of levels deep.
pub const MAX_DEPTH: usize = 128;

/// A single node of a rich text document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Document root. Children render with no wrapper.
    Root { children: Vec<Node> },

    /// A paragraph. Elided entirely when its rendered content is blank.
    Paragraph { children: Vec<Node> },

    /// A heading with an explicit level tag.
    Heading { tag: HeadingTag, children: Vec<Node> },

    /// A literal text run with format flags. Never has children.
    Text { text: String, format: TextFormat },

    /// A hyperlink wrapping its children as the visible label.
    Link {
        url: String,
        new_tab: bool,
        children: Vec<Node>,
    },

    /// An ordered or unordered list.
    List { kind: ListKind, children: Vec<Node> },

    /// One item of a list.
    ListItem { children: Vec<Node> },

    /// A block quotation.
    Quote { children: Vec<Node> },

    /// Any unrecognized node type: children pass through with no wrapper.
    Other { children: Vec<Node> },
}

impl Node {
    /// Build a node from a JSON value.
    ///
    /// Returns `None` when `value` is not an object. Missing or mis-typed
    /// fields are treated as absent rather than errors, so construction
    /// never fails on shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        Self::from_value_at(value, 0)
    }

    fn from_value_at(value: &Value, depth: usize) -> Option<Self> {
        if depth > MAX_DEPTH || !value.is_object() {
            return None;
        }

        let node = match str_field(value, "type").unwrap_or_default() {
            "root" => Node::Root {
                children: child_nodes(value, depth),
            },
            "paragraph" => Node::Paragraph {
                children: child_nodes(value, depth),
            },
            "heading" => Node::Heading {
                tag: str_field(value, "tag")
                    .and_then(HeadingTag::parse)
                    .unwrap_or_default(),
                children: child_nodes(value, depth),
            },
            "text" => Node::Text {
                text: str_field(value, "text").unwrap_or_default().to_string(),
                format: TextFormat::from_bits(
                    value.get("format").and_then(Value::as_u64).unwrap_or(0) as u32,
                ),
            },
            "link" => {
                let fields = value.get("fields");
                let url = fields
                    .and_then(|f| str_field(f, "url"))
                    .or_else(|| str_field(value, "url"))
                    .unwrap_or("#");
                Node::Link {
                    url: url.to_string(),
                    new_tab: fields
                        .and_then(|f| f.get("newTab"))
                        .and_then(Value::as_bool)
                        .unwrap_or(false),
                    children: child_nodes(value, depth),
                }
            }
            "list" => Node::List {
                kind: ListKind::from_tag(str_field(value, "listType").unwrap_or_default()),
                children: child_nodes(value, depth),
            },
            "listitem" => Node::ListItem {
                children: child_nodes(value, depth),
            },
            "quote" => Node::Quote {
                children: child_nodes(value, depth),
            },
            _ => Node::Other {
                children: child_nodes(value, depth),
            },
        };

        Some(node)
    }

    /// Child nodes in document order. Empty for text runs.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Link { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Quote { children }
            | Node::Other { children } => children,
            Node::Text { .. } => &[],
        }
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

/// Parse the `children` array, skipping entries that are not objects.
fn child_nodes(value: &Value, depth: usize) -> Vec<Node> {
    match value.get("children").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .filter_map(|item| Node::from_value_at(item, depth + 1))
            .collect(),
        None => Vec::new(),
    }
}

/// Inline format flags carried by a text run.
///
/// Lexical stores these as a bitmask: bold is bit 0, italic is bit 1,
/// underline is bit 3. Other bits (strikethrough, code, ...) are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormat(u32);

impl TextFormat {
    /// Bold flag (bit 0).
    pub const BOLD: u32 = 1;

    /// Italic flag (bit 1).
    pub const ITALIC: u32 = 1 << 1;

    /// Underline flag (bit 3).
    pub const UNDERLINE: u32 = 1 << 3;

    /// Wrap a raw bitmask.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bitmask.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether the bold flag is set.
    pub fn is_bold(self) -> bool {
        self.0 & Self::BOLD != 0
    }

    /// Whether the italic flag is set.
    pub fn is_italic(self) -> bool {
        self.0 & Self::ITALIC != 0
    }

    /// Whether the underline flag is set.
    pub fn is_underline(self) -> bool {
        self.0 & Self::UNDERLINE != 0
    }
}

/// Heading level, `h1` through `h6`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingTag {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// Parse a tag string. Anything other than `h1`..`h6` is rejected,
    /// which the caller maps to the `h2` default.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(HeadingTag::H1),
            "h2" => Some(HeadingTag::H2),
            "h3" => Some(HeadingTag::H3),
            "h4" => Some(HeadingTag::H4),
            "h5" => Some(HeadingTag::H5),
            "h6" => Some(HeadingTag::H6),
            _ => None,
        }
    }

    /// The tag name, e.g. `"h2"`.
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }
}

/// List flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `listType: "number"` — renders as `<ol>`.
    Numbered,
    /// Any other list type (bullet, check, absent) — renders as `<ul>`.
    Bulleted,
}

impl ListKind {
    /// Map a `listType` value to a kind.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "number" {
            ListKind::Numbered
        } else {
            ListKind::Bulleted
        }
    }
}
