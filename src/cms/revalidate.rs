//! Cache-invalidation planning for CMS webhook events.
//!
//! The CMS posts a change event whenever content is created, updated, or
//! deleted. `plan_invalidation` maps that event to the cache tags to drop
//! and the page paths to re-render, so every page that embeds the changed
//! collection refreshes and nothing else does.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Id;

/// Name of the request header carrying the shared webhook secret.
pub const SECRET_HEADER: &str = "x-revalidate-secret";

/// The collections that emit change events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    Posts,
    Sites,
    Categories,
    UnionPage,
    LegalPage,
    ServicesPage,
    CtaSections,
    AnnouncementCards,
    ContactSubmissions,
    NewsletterSubmissions,
    MembershipSubmissions,
    /// A collection this build does not know about yet.
    Other(String),
}

impl Collection {
    /// Map a collection slug to a known collection.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            "posts" => Collection::Posts,
            "sites" => Collection::Sites,
            "categories" => Collection::Categories,
            "sindicato-page" => Collection::UnionPage,
            "juridico-page" => Collection::LegalPage,
            "servicos-page" => Collection::ServicesPage,
            "cta-sections" => Collection::CtaSections,
            "announcement-cards" => Collection::AnnouncementCards,
            "contact-submissions" => Collection::ContactSubmissions,
            "newsletter-submissions" => Collection::NewsletterSubmissions,
            "sindicalize-submissions" => Collection::MembershipSubmissions,
            other => Collection::Other(other.to_string()),
        }
    }

    /// The collection slug, which doubles as its cache tag.
    pub fn as_slug(&self) -> &str {
        match self {
            Collection::Posts => "posts",
            Collection::Sites => "sites",
            Collection::Categories => "categories",
            Collection::UnionPage => "sindicato-page",
            Collection::LegalPage => "juridico-page",
            Collection::ServicesPage => "servicos-page",
            Collection::CtaSections => "cta-sections",
            Collection::AnnouncementCards => "announcement-cards",
            Collection::ContactSubmissions => "contact-submissions",
            Collection::NewsletterSubmissions => "newsletter-submissions",
            Collection::MembershipSubmissions => "sindicalize-submissions",
            Collection::Other(slug) => slug,
        }
    }
}

impl Serialize for Collection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_slug())
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slug = String::deserialize(deserializer)?;
        Ok(Collection::from_slug(&slug))
    }
}

/// What happened to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

/// A content-change event as posted by the CMS webhook.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEvent {
    pub collection: Collection,

    pub operation: Operation,

    #[serde(default)]
    pub site_id: Option<String>,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub id: Option<Id>,

    /// Slug of the changed document, when the collection has slugs.
    #[serde(default)]
    pub slug: Option<String>,
}

/// The cache tags and page paths affected by one change event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationPlan {
    /// Cache tags to drop.
    pub tags: Vec<String>,

    /// Page paths to re-render.
    pub paths: Vec<String>,

    /// Whether the whole layout must be re-rendered (site-wide chrome
    /// such as header and footer changed).
    pub layout: bool,
}

/// Compare the webhook secret header against the configured secret.
pub fn secret_matches(provided: Option<&str>, expected: &str) -> bool {
    provided == Some(expected)
}

/// Map a change event to the caches and paths it touches.
pub fn plan_invalidation(event: &ChangeEvent) -> InvalidationPlan {
    let mut plan = InvalidationPlan {
        tags: vec![event.collection.as_slug().to_string()],
        ..Default::default()
    };

    match &event.collection {
        Collection::Posts => {
            plan.paths = paths(&["/", "/publicacoes", "/contato", "/sindicalize-se"]);
            if let Some(slug) = &event.slug {
                plan.paths.push(format!("/publicacoes/{}", slug));
            }
        }
        Collection::Sites => {
            plan.paths = paths(&["/"]);
            plan.layout = true;
        }
        Collection::UnionPage => plan.paths = paths(&["/sindicato"]),
        Collection::LegalPage => plan.paths = paths(&["/juridico"]),
        Collection::ServicesPage => plan.paths = paths(&["/servicos"]),
        Collection::CtaSections | Collection::AnnouncementCards => {
            plan.paths = paths(&[
                "/",
                "/sindicato",
                "/juridico",
                "/servicos",
                "/contato",
                "/newsletter",
                "/sindicalize-se",
            ]);
        }
        Collection::Categories => plan.paths = paths(&["/publicacoes"]),
        // Form submissions never feed rendered pages.
        Collection::ContactSubmissions
        | Collection::NewsletterSubmissions
        | Collection::MembershipSubmissions => {}
        // Unknown collections get the conservative fallback.
        Collection::Other(_) => plan.paths = paths(&["/"]),
    }

    plan
}

fn paths(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(collection: &str, slug: Option<&str>) -> ChangeEvent {
        ChangeEvent {
            collection: Collection::from_slug(collection),
            operation: Operation::Update,
            site_id: Some("1".to_string()),
            timestamp: Some("2025-11-03T12:00:00Z".to_string()),
            id: None,
            slug: slug.map(str::to_string),
        }
    }

    #[test]
    fn test_event_decode() {
        let event: ChangeEvent = serde_json::from_str(
            r#"{"collection": "posts", "operation": "update",
                "siteId": "1", "timestamp": "2025-11-03T12:00:00Z",
                "slug": "assembleia-geral"}"#,
        )
        .unwrap();
        assert_eq!(event.collection, Collection::Posts);
        assert_eq!(event.operation, Operation::Update);
        assert_eq!(event.slug.as_deref(), Some("assembleia-geral"));
    }

    #[test]
    fn test_posts_plan_includes_slug_path() {
        let plan = plan_invalidation(&event("posts", Some("nova-diretoria")));
        assert_eq!(plan.tags, vec!["posts"]);
        assert!(plan.paths.contains(&"/publicacoes".to_string()));
        assert!(plan.paths.contains(&"/publicacoes/nova-diretoria".to_string()));
        assert!(!plan.layout);

        let plan = plan_invalidation(&event("posts", None));
        assert_eq!(plan.paths.len(), 4);
    }

    #[test]
    fn test_sites_plan_touches_layout() {
        let plan = plan_invalidation(&event("sites", None));
        assert_eq!(plan.tags, vec!["sites"]);
        assert_eq!(plan.paths, vec!["/"]);
        assert!(plan.layout);
    }

    #[test]
    fn test_page_collections_touch_their_page() {
        assert_eq!(
            plan_invalidation(&event("sindicato-page", None)).paths,
            vec!["/sindicato"]
        );
        assert_eq!(
            plan_invalidation(&event("juridico-page", None)).paths,
            vec!["/juridico"]
        );
        assert_eq!(
            plan_invalidation(&event("servicos-page", None)).paths,
            vec!["/servicos"]
        );
    }

    #[test]
    fn test_section_collections_touch_all_content_pages() {
        let plan = plan_invalidation(&event("cta-sections", None));
        assert_eq!(plan.paths.len(), 7);
        assert_eq!(
            plan_invalidation(&event("announcement-cards", None)).paths,
            plan.paths
        );
    }

    #[test]
    fn test_submissions_touch_nothing() {
        for collection in [
            "contact-submissions",
            "newsletter-submissions",
            "sindicalize-submissions",
        ] {
            let plan = plan_invalidation(&event(collection, None));
            assert_eq!(plan.tags, vec![collection]);
            assert!(plan.paths.is_empty());
            assert!(!plan.layout);
        }
    }

    #[test]
    fn test_unknown_collection_falls_back_to_home() {
        let plan = plan_invalidation(&event("galleries", None));
        assert_eq!(plan.tags, vec!["galleries"]);
        assert_eq!(plan.paths, vec!["/"]);
    }

    #[test]
    fn test_secret_matches() {
        assert!(secret_matches(Some("s3cret"), "s3cret"));
        assert!(!secret_matches(Some("wrong"), "s3cret"));
        assert!(!secret_matches(None, "s3cret"));
    }
}
