//! Query-string construction for collection endpoints.
//!
//! Payload encodes filters as bracketed parameters
//! (`where[slug][equals]=x`). The builder keeps parameters in insertion
//! order and percent-encodes values; bracket keys are left literal, the
//! form the API documents and accepts.

use std::fmt;

use urlencoding::encode;

/// An ordered set of query parameters.
#[derive(Debug, Clone, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Start an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `where[<field>][equals]=<value>` filter.
    pub fn equals(mut self, field: &str, value: impl fmt::Display) -> Self {
        self.params
            .push((format!("where[{}][equals]", field), value.to_string()));
        self
    }

    /// Add a `where[<field>][in]=<value>` filter.
    pub fn is_in(mut self, field: &str, value: impl fmt::Display) -> Self {
        self.params
            .push((format!("where[{}][in]", field), value.to_string()));
        self
    }

    /// Set the sort key, e.g. `-publishedAt` for newest first.
    pub fn sort(mut self, key: &str) -> Self {
        self.params.push(("sort".to_string(), key.to_string()));
        self
    }

    /// Limit the number of documents returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    /// Set the relationship population depth.
    pub fn depth(mut self, depth: u32) -> Self {
        self.params.push(("depth".to_string(), depth.to_string()));
        self
    }

    /// Add an arbitrary parameter.
    pub fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Render the query string, without a leading `?`.
    pub fn build(&self) -> String {
        self.params
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Render the request path for a collection endpoint.
    pub fn to_path(&self, collection: &str) -> String {
        if self.params.is_empty() {
            format!("/api/{}", collection)
        } else {
            format!("/api/{}?{}", collection, self.build())
        }
    }
}
