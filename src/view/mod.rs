//! View-model transforms.
//!
//! Pure functions that shape CMS documents into the structs the page
//! templates consume: image URL resolution, Brazilian date and input
//! formatting, post-to-card transforms, and the hero/footer/CTA content
//! builders with the site's fallback copy.

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;

use crate::cms::{
    AnnouncementCard, CtaSection, Id, Media, NavLink, Post, Relation, Site, SizeVariant,
    SocialLinks,
};

/// Image served when a document has no media attached.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// Category shown when a post has none.
pub const DEFAULT_CATEGORY: &str = "Geral";

/// Categories treated as news on the publications page.
pub const NEWS_CATEGORIES: [&str; 4] = ["Rádio", "TV", "Direitos Trabalhistas", "Eventos"];

/// Categories treated as opinion/article content.
pub const ARTICLE_CATEGORIES: [&str; 4] = ["Opinião", "Análises", "Entrevistas", "Tutoriais"];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// A post shaped for the news grids.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub id: Id,
    pub image_url: String,
    pub image_alt: String,
    pub category: String,
    pub date: String,
    pub title: String,
    pub link: String,
}

/// A post shaped for the per-category columns (no category label).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNews {
    pub id: Id,
    pub image_url: String,
    pub image_alt: String,
    pub date: String,
    pub title: String,
    pub link: String,
}

/// Homepage hero content with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroContent {
    pub badge: String,
    pub badge_text: String,
    pub title: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_href: String,
    pub secondary_button_text: String,
    pub secondary_button_href: String,
    pub image_url: String,
    pub image_alt: String,
}

/// Footer content with every field resolved.
#[derive(Debug, Clone)]
pub struct FooterContent {
    pub logo: Option<FooterLogo>,
    pub description: String,
    pub nav_items: Vec<NavLink>,
    pub social_links: SocialLinks,
}

/// Resolved footer logo.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterLogo {
    pub url: String,
    pub alt: String,
}

/// CTA section content with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CtaContent {
    pub title: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_href: String,
    pub secondary_button_text: String,
    pub secondary_button_href: String,
    pub image_url: String,
    pub image_alt: String,
}

/// Announcement card content with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementContent {
    pub image_url: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub primary_button_text: String,
    pub primary_button_href: Option<String>,
}

/// Which slice of the publications feed a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    News,
    Articles,
}

/// Format a date the way the site prints it: "3 de novembro de 2025".
pub fn format_date(date: &DateTime<Utc>) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        MONTHS_PT[date.month0() as usize],
        date.year()
    )
}

/// Format an ISO-8601 date string; unparseable input is returned as-is.
pub fn format_date_str(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(date) => format_date(&date.with_timezone(&Utc)),
        Err(_) => iso.to_string(),
    }
}

/// Apply the Brazilian phone mask: `(XX) XXXXX-XXXX`.
///
/// Mirrors the progressive mask the forms apply, so partial input stays
/// partially masked.
pub fn format_phone(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let masked = Regex::new(r"(\d{2})(\d)")
        .unwrap()
        .replace(&digits, "($1) $2");
    let masked = Regex::new(r"(\d{5})(\d)")
        .unwrap()
        .replace(&masked, "$1-$2")
        .into_owned();
    masked.chars().take(15).collect()
}

/// Apply the CPF mask: `XXX.XXX.XXX-XX`.
pub fn format_cpf(value: &str) -> String {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let dotted = Regex::new(r"(\d{3})(\d)")
        .unwrap()
        .replace(&digits, "$1.$2");
    let dotted = Regex::new(r"(\d{3})(\d)")
        .unwrap()
        .replace(&dotted, "$1.$2");
    let masked = Regex::new(r"(\d{3})(\d{1,2})")
        .unwrap()
        .replace(&dotted, "$1-$2")
        .into_owned();
    masked.chars().take(14).collect()
}

/// Resolve an image URL from a media document.
///
/// Prefers the requested size variant, falls back to the original upload,
/// and prefixes relative paths with the API origin. Absent media resolves
/// to the placeholder image.
pub fn image_url(base_url: &str, media: Option<&Media>, variant: SizeVariant) -> String {
    let Some(media) = media else {
        return PLACEHOLDER_IMAGE.to_string();
    };

    let relative = media
        .sizes
        .get(variant)
        .map(|size| size.url.as_str())
        .filter(|url| !url.is_empty())
        .unwrap_or(&media.url);

    if relative.starts_with("http") {
        relative.to_string()
    } else {
        format!("{}{}", base_url, relative)
    }
}

/// First populated category title, or the default.
pub fn category_name(post: &Post) -> String {
    post.categories
        .first()
        .and_then(Relation::as_populated)
        .map(|category| category.title.clone())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string())
}

/// Shape a post for the news grids.
pub fn news_item(base_url: &str, post: &Post) -> NewsItem {
    NewsItem {
        id: post.id.clone(),
        image_url: image_url(base_url, post.hero_image.as_ref(), SizeVariant::Medium),
        image_alt: hero_image_alt(post),
        category: category_name(post),
        date: post.date().map(|d| format_date(&d)).unwrap_or_default(),
        title: post.title.clone(),
        link: post_link(post),
    }
}

/// Shape a post for the per-category columns.
pub fn category_news(base_url: &str, post: &Post) -> CategoryNews {
    CategoryNews {
        id: post.id.clone(),
        image_url: image_url(base_url, post.hero_image.as_ref(), SizeVariant::Thumbnail),
        image_alt: hero_image_alt(post),
        date: post.date().map(|d| format_date(&d)).unwrap_or_default(),
        title: post.title.clone(),
        link: post_link(post),
    }
}

fn post_link(post: &Post) -> String {
    format!("/publicacoes/{}", post.slug)
}

fn hero_image_alt(post: &Post) -> String {
    post.hero_image
        .as_ref()
        .and_then(|media| media.alt.clone())
        .unwrap_or_else(|| post.title.clone())
}

/// Group posts under the given category names, preserving the name order.
/// Posts whose category is not listed are dropped.
pub fn group_posts_by_category(
    base_url: &str,
    posts: &[Post],
    category_names: &[&str],
) -> Vec<(String, Vec<CategoryNews>)> {
    let mut groups: Vec<(String, Vec<CategoryNews>)> = category_names
        .iter()
        .map(|name| (name.to_string(), Vec::new()))
        .collect();

    for post in posts {
        let name = category_name(post);
        if let Some((_, items)) = groups.iter_mut().find(|(group, _)| *group == name) {
            items.push(category_news(base_url, post));
        }
    }

    groups
}

/// Keep only the posts whose category belongs to the given kind.
pub fn filter_posts_by_kind(posts: &[Post], kind: PostKind) -> Vec<Post> {
    let categories: &[&str] = match kind {
        PostKind::News => &NEWS_CATEGORIES,
        PostKind::Articles => &ARTICLE_CATEGORIES,
    };

    posts
        .iter()
        .filter(|post| categories.contains(&category_name(post).as_str()))
        .cloned()
        .collect()
}

/// Build the homepage hero content, falling back to the site's default
/// copy for anything the CMS left blank.
pub fn hero_content(base_url: &str, site: &Site) -> HeroContent {
    let hero = &site.hero;
    HeroContent {
        badge: field_or(&hero.badge, "Força dos trabalhadores de bebidas"),
        badge_text: field_or(&hero.badge_text, "Força dos trabalhadores de bebidas"),
        title: field_or(&hero.title, "Fortaleça sua voz. Fortaleça sua categoria."),
        description: field_or(
            &hero.description,
            "O SITIBEGAM é mais do que uma entidade: é a defesa da sua dignidade \
             profissional na indústria de bebidas.",
        ),
        primary_button_text: field_or(&hero.primary_button_text, "Ver benefícios"),
        primary_button_href: field_or(&hero.primary_button_href, "/servicos"),
        secondary_button_text: field_or(&hero.secondary_button_text, "Sindicalize-se agora"),
        secondary_button_href: field_or(&hero.secondary_button_href, "/sindicalize-se"),
        image_url: image_url(base_url, hero.image.as_ref(), SizeVariant::Xlarge),
        image_alt: field_or(&hero.image_alt, "Trabalhadores da indústria de bebidas"),
    }
}

/// Build the footer content with the default navigation when the site
/// defines none.
pub fn footer_content(base_url: &str, site: &Site) -> FooterContent {
    let nav_items = if site.header.nav_items.is_empty() {
        vec![
            NavLink::new("Início", "/"),
            NavLink::new("Sindicato", "/sindicato"),
            NavLink::new("Jurídico", "/juridico"),
            NavLink::new("Publicações", "/publicacoes"),
            NavLink::new("Serviços", "/servicos"),
            NavLink::new("Contato", "/contato"),
        ]
    } else {
        site.header.nav_items.clone()
    };

    FooterContent {
        logo: site.footer.logo.as_ref().map(|logo| FooterLogo {
            url: image_url(base_url, Some(logo), SizeVariant::Thumbnail),
            alt: logo.alt.clone().unwrap_or_else(|| site.name.clone()),
        }),
        description: field_or(
            &site.footer.description,
            "Representando e defendendo os direitos dos trabalhadores da indústria \
             de bebidas com força e dedicação.",
        ),
        nav_items,
        social_links: site.footer.social_links.clone(),
    }
}

/// Header navigation, with the default menu when the site defines none.
pub fn nav_items(site: &Site) -> Vec<NavLink> {
    if !site.header.nav_items.is_empty() {
        return site.header.nav_items.clone();
    }

    vec![
        NavLink::new("INÍCIO", "/"),
        NavLink::new("SINDICATO", "/sindicato"),
        NavLink::new("JURÍDICO", "/juridico"),
        NavLink::new("PUBLICAÇÕES", "/publicacoes"),
        NavLink::new("SERVIÇOS", "/servicos"),
        NavLink::new("NEWSLETTER", "/newsletter"),
        NavLink::new("CONTATO", "/contato"),
    ]
}

/// Build a CTA section's content.
pub fn cta_content(base_url: &str, cta: &CtaSection) -> CtaContent {
    CtaContent {
        title: cta.title.clone(),
        description: cta.description.clone().unwrap_or_default(),
        primary_button_text: field_or(&cta.primary_button_text, "Saiba mais"),
        primary_button_href: field_or(&cta.primary_button_href, "#"),
        secondary_button_text: cta.secondary_button_text.clone().unwrap_or_default(),
        secondary_button_href: field_or(&cta.secondary_button_href, "#"),
        image_url: image_url(base_url, cta.image.as_ref(), SizeVariant::Large),
        image_alt: cta.image_alt.clone().unwrap_or_else(|| cta.title.clone()),
    }
}

/// Build an announcement card's content.
pub fn announcement_content(base_url: &str, card: &AnnouncementCard) -> AnnouncementContent {
    AnnouncementContent {
        image_url: image_url(base_url, card.image.as_ref(), SizeVariant::Medium),
        image_alt: card.image_alt.clone().unwrap_or_else(|| card.title.clone()),
        title: card.title.clone(),
        description: card.description.clone().unwrap_or_default(),
        primary_button_text: field_or(&card.primary_button_text, "Saiba mais"),
        primary_button_href: card.primary_button_href.clone(),
    }
}

fn field_or(field: &Option<String>, default: &str) -> String {
    match field {
        Some(value) if !value.is_empty() => value.clone(),
        _ => default.to_string(),
    }
}
