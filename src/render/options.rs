//! Rendering options and configuration.

/// Options for rendering a document to HTML.
///
/// The defaults reproduce the site's stylesheet hooks. Set a class to the
/// empty string to omit the attribute entirely.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `class` attribute emitted on anchor tags.
    pub link_class: String,

    /// `class` attribute emitted on blockquote tags.
    pub quote_class: String,
}

impl RenderOptions {
    /// Create render options with the site defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create render options that emit no class attributes.
    pub fn plain() -> Self {
        Self {
            link_class: String::new(),
            quote_class: String::new(),
        }
    }

    /// Set the anchor class.
    pub fn with_link_class(mut self, class: impl Into<String>) -> Self {
        self.link_class = class.into();
        self
    }

    /// Set the blockquote class.
    pub fn with_quote_class(mut self, class: impl Into<String>) -> Self {
        self.quote_class = class.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            link_class: "text-brand-600 hover:underline".to_string(),
            quote_class: "border-l-4 border-brand-600 pl-4 italic text-tertiary".to_string(),
        }
    }
}
