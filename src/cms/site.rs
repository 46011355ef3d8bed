//! The site configuration document.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Id, Media};

/// Global configuration for one site: contact details, header, footer,
/// and homepage hero content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: Id,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub url: String,

    pub slug: String,

    /// Where the CMS posts content-change events for this site.
    #[serde(default)]
    pub webhook_url: Option<String>,

    #[serde(default)]
    pub webhook_secret: Option<String>,

    #[serde(default)]
    pub contact: SiteContact,

    #[serde(default)]
    pub header: SiteHeader,

    #[serde(default)]
    pub footer: SiteFooter,

    #[serde(default)]
    pub hero: SiteHero,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Union contact details shown on the contact page and in the footer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContact {
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub working_hours: Option<String>,
}

/// Header configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteHeader {
    #[serde(default)]
    pub logo: Option<Media>,
    #[serde(default)]
    pub logo_alt: Option<String>,
    #[serde(default)]
    pub nav_items: Vec<NavLink>,
}

/// One navigation entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Rendered as a call-to-action button instead of a plain link.
    #[serde(default)]
    pub is_button: bool,
}

impl NavLink {
    /// Plain navigation link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            is_button: false,
        }
    }
}

/// Footer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteFooter {
    #[serde(default)]
    pub logo: Option<Media>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

/// Social profile URLs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

/// Homepage hero content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteHero {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub badge_text: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub primary_button_text: Option<String>,
    #[serde(default)]
    pub primary_button_href: Option<String>,
    #[serde(default)]
    pub secondary_button_text: Option<String>,
    #[serde(default)]
    pub secondary_button_href: Option<String>,
}
