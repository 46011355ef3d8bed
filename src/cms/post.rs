//! Posts and their categories.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::model::Document;

use super::{Id, Media, Relation, Site};

/// A published piece of content: news, article, magazine, booklet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Id,

    pub title: String,

    pub slug: String,

    #[serde(default)]
    pub hero_image: Option<Media>,

    /// The article body as a rich text document.
    #[serde(default)]
    pub content: Document,

    /// Sites this post is published on.
    #[serde(default)]
    pub sites: Vec<Relation<Site>>,

    #[serde(default)]
    pub categories: Vec<Relation<Category>>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub populated_authors: Vec<Author>,

    #[serde(default)]
    pub meta: PostMeta,

    #[serde(rename = "_status", default)]
    pub status: PostStatus,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Publication date with the creation date as fallback.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.published_at.or(self.created_at)
    }
}

/// A post author as expanded by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub id: Id,
    #[serde(default)]
    pub name: String,
}

/// SEO metadata attached to a post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMeta {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
}

/// Editorial status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

/// A content category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,

    pub title: String,

    pub slug: String,

    #[serde(default)]
    pub parent: Option<Relation<Category>>,

    #[serde(default)]
    pub breadcrumbs: Vec<Breadcrumb>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One step in a category's ancestry path.
#[derive(Debug, Clone, Deserialize)]
pub struct Breadcrumb {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}
