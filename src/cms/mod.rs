//! Payload CMS integration.
//!
//! Wire types for the collections the site consumes, a query-string
//! builder, a transport-agnostic API client with tag-based response
//! caching, and the webhook-driven cache-invalidation planner.

mod cache;
mod client;
mod media;
mod page;
mod post;
mod query;
mod response;
mod revalidate;
mod site;
mod submission;

pub use cache::TagCache;
pub use client::{ContentClient, HttpResponse, HttpTransport};
pub use media::{ImageSize, Media, MediaSizes, SizeVariant};
pub use page::{
    AnnouncementCard, Benefit, BenefitCategory, BenefitsSection, ContactIcon, CtaSection,
    Facility, FacilityContact, InfoRow, LegalContact, LegalContactSection, LegalPage, LegalTab,
    Location, LocationIcon, LocationsSection, PageKey, PriceRow, RegulationRow, ServicesFeature,
    ServicesHero, ServicesPage, TeamMember, TeamSection, UnionPage,
};
pub use post::{Author, Breadcrumb, Category, Post, PostMeta, PostStatus};
pub use query::Query;
pub use response::Paginated;
pub use revalidate::{
    plan_invalidation, secret_matches, ChangeEvent, Collection, InvalidationPlan, Operation,
    SECRET_HEADER,
};
pub use site::{NavLink, Site, SiteContact, SiteFooter, SiteHeader, SiteHero, SocialLinks};
pub use submission::{ContactSubmission, MembershipSubmission, NewsletterSubmission};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A document identifier.
///
/// Payload issues numeric ids on SQL backends and string ids on Mongo;
/// both appear in the wild, so the type is an untagged union.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// Numeric id.
    Number(i64),
    /// String id.
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

/// A relationship field: either the populated document (when the request
/// depth reached it) or just the related document's id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    /// The full related document.
    Populated(Box<T>),
    /// Only the id of the related document.
    Ref(Id),
}

impl<T> Relation<T> {
    /// The populated document, if the relation was expanded.
    pub fn as_populated(&self) -> Option<&T> {
        match self {
            Relation::Populated(doc) => Some(doc),
            Relation::Ref(_) => None,
        }
    }

    /// The bare id, if the relation was not expanded.
    pub fn as_ref_id(&self) -> Option<&Id> {
        match self {
            Relation::Populated(_) => None,
            Relation::Ref(id) => Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        let id: Id = serde_json::from_str("7").unwrap();
        assert_eq!(id, Id::Number(7));
        assert_eq!(id.to_string(), "7");

        let id: Id = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(id, Id::Text("abc123".to_string()));
        assert_eq!(id.to_string(), "abc123");
    }

    #[test]
    fn test_relation_untagged() {
        #[derive(Debug, Deserialize)]
        struct Doc {
            id: Id,
        }

        let relation: Relation<Doc> = serde_json::from_str("42").unwrap();
        assert_eq!(relation.as_ref_id(), Some(&Id::Number(42)));

        let relation: Relation<Doc> = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(relation.as_populated().unwrap().id, Id::Number(42));
    }
}
