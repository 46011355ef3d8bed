//! Per-page structured content documents, plus the page-keyed CTA and
//! announcement collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Document;

use super::{Id, Media, Relation, Site};

/// The pages that carry page-scoped content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKey {
    #[serde(rename = "home")]
    Home,
    #[serde(rename = "sindicato")]
    Union,
    #[serde(rename = "juridico")]
    Legal,
    #[serde(rename = "servicos")]
    Services,
}

impl PageKey {
    /// The wire value, which is also the page's route segment.
    pub fn as_str(self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::Union => "sindicato",
            PageKey::Legal => "juridico",
            PageKey::Services => "servicos",
        }
    }
}

/// A call-to-action section placed on one page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    pub id: Id,
    pub page: PageKey,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub primary_button_text: Option<String>,
    #[serde(default)]
    pub primary_button_href: Option<String>,
    #[serde(default)]
    pub secondary_button_text: Option<String>,
    #[serde(default)]
    pub secondary_button_href: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub site: Option<Relation<Site>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An announcement card placed on one page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementCard {
    pub id: Id,
    pub page: PageKey,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub primary_button_text: Option<String>,
    #[serde(default)]
    pub primary_button_href: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub site: Option<Relation<Site>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Structured content of the union page: locations and team directories.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnionPage {
    pub id: Id,
    #[serde(default)]
    pub locations_section: LocationsSection,
    #[serde(default)]
    pub team_sections: Vec<TeamSection>,
    #[serde(default)]
    pub site: Option<Relation<Site>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The headquarters / sub-office directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationsSection {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub map_embed_url: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// One office location. The address is a rich text document; render it
/// with [`crate::render::to_text`] to get a link label.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: Document,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub icon: LocationIcon,
}

/// Icon choice for a location card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationIcon {
    #[default]
    MapPin,
    Building,
    Office,
}

/// A directorate or staff section of the union page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// One person in a team section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub image_alt: Option<String>,
}

/// Structured content of the legal page: contact channels and the
/// rich-text tab set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalPage {
    pub id: Id,
    #[serde(default)]
    pub contact_info: LegalContactSection,
    #[serde(default)]
    pub tabs: Vec<LegalTab>,
    #[serde(default)]
    pub site: Option<Relation<Site>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Header block of the legal page's contact list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegalContactSection {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub contacts: Vec<LegalContact>,
}

/// One legal contact channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalContact {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub icon: ContactIcon,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link_text: String,
    #[serde(default)]
    pub link_href: String,
}

/// Icon choice for a contact channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactIcon {
    #[default]
    Mail,
    MapPin,
    Phone,
}

/// One tab of the legal page. The body is a rich text document.
#[derive(Debug, Clone, Deserialize)]
pub struct LegalTab {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub content: Document,
}

/// Structured content of the services page: hero, benefit catalog, and
/// facilities.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesPage {
    pub id: Id,
    #[serde(default)]
    pub hero: ServicesHero,
    #[serde(default)]
    pub benefits: BenefitsSection,
    #[serde(default)]
    pub facilities: Vec<Facility>,
    #[serde(default)]
    pub site: Option<Relation<Site>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Hero block of the services page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesHero {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub features: Vec<ServicesFeature>,
}

/// One feature bullet in the services hero.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesFeature {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// The partner-benefit catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenefitsSection {
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub categories: Vec<BenefitCategory>,
}

/// A group of benefits (health, education, leisure, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct BenefitCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub benefits: Vec<Benefit>,
}

/// One partner discount.
#[derive(Debug, Clone, Deserialize)]
pub struct Benefit {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub discount: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub observations: Option<String>,
}

/// A union facility (club grounds, event hall) with its price table and
/// regulations.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<Media>,
    #[serde(default)]
    pub image_alt: Option<String>,
    #[serde(default)]
    pub price_table: Vec<PriceRow>,
    #[serde(default)]
    pub general_info: Vec<InfoRow>,
    #[serde(default)]
    pub contact_info: FacilityContact,
    #[serde(default)]
    pub regulations: Vec<RegulationRow>,
}

/// One row of a facility price table.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
}

/// One general-information line of a facility.
#[derive(Debug, Clone, Deserialize)]
pub struct InfoRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub info: String,
}

/// Booking contact for a facility.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacilityContact {
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One rule of a facility regulation list.
#[derive(Debug, Clone, Deserialize)]
pub struct RegulationRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub rule: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_key_wire_values() {
        assert_eq!(PageKey::Union.as_str(), "sindicato");
        let key: PageKey = serde_json::from_str("\"servicos\"").unwrap();
        assert_eq!(key, PageKey::Services);
    }

    #[test]
    fn test_union_page_decode() {
        let page: UnionPage = serde_json::from_value(json!({
            "id": 1,
            "locationsSection": {
                "title": "Onde estamos",
                "locations": [{
                    "id": "abc",
                    "title": "Sede",
                    "description": "Atendimento ao associado",
                    "address": {"root": {"type": "root", "children": [
                        {"type": "paragraph", "children": [
                            {"type": "text", "text": "Av. Brasil, 100"},
                        ]},
                    ]}},
                    "mapUrl": "https://maps.example/x",
                    "icon": "building",
                }],
            },
            "teamSections": [{"id": "t1", "title": "Diretoria", "members": []}],
        }))
        .unwrap();

        let location = &page.locations_section.locations[0];
        assert_eq!(location.icon, LocationIcon::Building);
        assert!(!location.address.is_empty());
        assert_eq!(page.team_sections[0].title, "Diretoria");
    }

    #[test]
    fn test_legal_tab_content_is_document() {
        let tab: LegalTab = serde_json::from_value(json!({
            "id": "t", "label": "Plantão",
            "content": {"root": {"type": "root", "children": []}},
        }))
        .unwrap();
        assert!(!tab.content.is_empty());
    }

    #[test]
    fn test_services_page_defaults() {
        let page: ServicesPage = serde_json::from_value(json!({"id": 9})).unwrap();
        assert!(page.facilities.is_empty());
        assert!(page.benefits.categories.is_empty());
    }
}
