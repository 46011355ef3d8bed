//! Document-level types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::Node;

/// A rich text document as stored by the CMS.
///
/// Produced by deserializing one rich text field of an API response (an
/// article body, a legal tab, a location address). Construction is total:
/// malformed input of any shape yields an empty document, never an error,
/// so callers can render whatever the CMS sends without guarding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// The single entry point for traversal, when one was recognized.
    pub root: Option<Node>,
}

impl Document {
    /// Create a document with no content.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a document from an arbitrary JSON value.
    ///
    /// Anything that is not an object with a `root` node object comes back
    /// as an empty document.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::empty();
        }
        Self {
            root: value.get("root").and_then(Node::from_value),
        }
    }

    /// Build a document from raw JSON text.
    ///
    /// Like [`Document::from_value`], this never fails: text that does not
    /// parse as JSON yields an empty document.
    pub fn from_json_str(json: &str) -> Self {
        match serde_json::from_str::<Value>(json) {
            Ok(value) => Self::from_value(&value),
            Err(_) => Self::empty(),
        }
    }

    /// Whether the document has no recognizable root node.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Document::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_non_object() {
        assert!(Document::from_value(&Value::Null).is_empty());
        assert!(Document::from_value(&json!(42)).is_empty());
        assert!(Document::from_value(&json!(["root"])).is_empty());
    }

    #[test]
    fn test_from_value_missing_root() {
        assert!(Document::from_value(&json!({})).is_empty());
        assert!(Document::from_value(&json!({"root": "not an object"})).is_empty());
    }

    #[test]
    fn test_from_value_with_root() {
        let doc = Document::from_value(&json!({
            "root": {"type": "root", "children": []},
        }));
        assert!(!doc.is_empty());
        assert!(matches!(doc.root, Some(Node::Root { .. })));
    }

    #[test]
    fn test_from_json_str_total() {
        assert!(Document::from_json_str("{ not json").is_empty());
        assert!(!Document::from_json_str(r#"{"root":{"type":"root"}}"#).is_empty());
    }

    #[test]
    fn test_deserialize_embedded_field() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default)]
            content: Document,
        }

        let holder: Holder =
            serde_json::from_str(r#"{"content":{"root":{"type":"root","children":[]}}}"#).unwrap();
        assert!(!holder.content.is_empty());

        let holder: Holder = serde_json::from_str(r#"{"content":"just a string"}"#).unwrap();
        assert!(holder.content.is_empty());

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.content.is_empty());
    }
}
