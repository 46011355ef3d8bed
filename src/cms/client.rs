//! The content API client.
//!
//! `ContentClient` owns endpoint construction, response caching, and
//! decoding. It is generic over [`HttpTransport`] so the crate carries no
//! HTTP stack of its own; the application (or a test) supplies one.
//!
//! Read accessors mirror the pages' tolerance for a missing CMS: any
//! transport, status, or decode failure is logged and degraded to `None`
//! or an empty list, so a page can always render. Form submissions keep
//! the error, because the form shows it to the visitor.

use std::sync::Arc;

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

use super::{
    AnnouncementCard, Category, ContactSubmission, CtaSection, Id, InvalidationPlan, LegalPage,
    MembershipSubmission, NewsletterSubmission, PageKey, Paginated, Post, Query, ServicesPage,
    Site, TagCache, UnionPage,
};

/// A minimal HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Body text.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract interface for HTTP access.
///
/// Implementations perform a blocking request and return the status and
/// body; everything above this trait is transport-agnostic.
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request.
    fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Perform a POST request with a JSON body.
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse>;
}

/// Client for the content API of one site.
pub struct ContentClient {
    base_url: String,
    site_slug: String,
    transport: Arc<dyn HttpTransport>,
    cache: TagCache,
}

impl ContentClient {
    /// Create a client for `site_slug` against `base_url`, with the
    /// default one-day cache.
    pub fn new(
        base_url: impl Into<String>,
        site_slug: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            site_slug: site_slug.into(),
            transport,
            cache: TagCache::default(),
        }
    }

    /// Replace the response cache (e.g. to change the TTL).
    pub fn with_cache(mut self, cache: TagCache) -> Self {
        self.cache = cache;
        self
    }

    /// The API origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The response cache.
    pub fn cache(&self) -> &TagCache {
        &self.cache
    }

    /// Drop the cached responses named by an invalidation plan.
    ///
    /// Path revalidation is the page layer's concern; this only applies
    /// the tag side of the plan.
    pub fn apply(&self, plan: &InvalidationPlan) {
        for tag in &plan.tags {
            let removed = self.cache.invalidate_tag(tag);
            debug!("invalidated tag {}: {} cached responses dropped", tag, removed);
        }
    }

    /// The site configuration document, by the client's slug.
    pub fn site(&self) -> Option<Site> {
        let query = Query::new().equals("slug", &self.site_slug).depth(2);
        match self.fetch_list::<Site>("sites", "sites", &query) {
            Ok(page) => page.into_first(),
            Err(err) => {
                error!("error fetching site data: {}", err);
                None
            }
        }
    }

    /// The newest published posts for a site.
    pub fn latest_posts(&self, site_id: &Id, limit: u32) -> Vec<Post> {
        let query = Query::new()
            .is_in("sites", site_id)
            .equals("_status", "published")
            .sort("-publishedAt")
            .limit(limit)
            .depth(2);
        self.fetch_docs("posts", "posts", &query)
    }

    /// Published posts in one category.
    pub fn posts_by_category(&self, site_id: &Id, category_id: &Id, limit: u32) -> Vec<Post> {
        let query = Query::new()
            .is_in("sites", site_id)
            .is_in("categories", category_id)
            .equals("_status", "published")
            .sort("-publishedAt")
            .limit(limit)
            .depth(2);
        self.fetch_docs("posts", "posts", &query)
    }

    /// All categories.
    pub fn categories(&self) -> Vec<Category> {
        let query = Query::new().limit(100);
        self.fetch_docs("categories", "categories", &query)
    }

    /// CTA sections configured for one page.
    pub fn cta_sections(&self, site_id: &Id, page: PageKey) -> Vec<CtaSection> {
        let query = Query::new()
            .equals("site", site_id)
            .equals("page", page.as_str())
            .depth(2);
        self.fetch_docs("cta-sections", "cta-sections", &query)
    }

    /// Announcement cards configured for one page.
    pub fn announcement_cards(&self, site_id: &Id, page: PageKey) -> Vec<AnnouncementCard> {
        let query = Query::new()
            .equals("site", site_id)
            .equals("page", page.as_str())
            .depth(2);
        self.fetch_docs("announcement-cards", "announcement-cards", &query)
    }

    /// A single published post by slug.
    pub fn post_by_slug(&self, slug: &str) -> Option<Post> {
        let query = Query::new()
            .equals("slug", slug)
            .equals("_status", "published")
            .depth(2);
        match self.fetch_list::<Post>("posts", "posts", &query) {
            Ok(page) => page.into_first(),
            Err(err) => {
                error!("error fetching post by slug: {}", err);
                None
            }
        }
    }

    /// The union page content for a site.
    pub fn union_page(&self, site_id: &Id) -> Option<UnionPage> {
        self.fetch_page_doc("sindicato-page", site_id)
    }

    /// The legal page content for a site.
    pub fn legal_page(&self, site_id: &Id) -> Option<LegalPage> {
        self.fetch_page_doc("juridico-page", site_id)
    }

    /// The services page content for a site.
    pub fn services_page(&self, site_id: &Id) -> Option<ServicesPage> {
        self.fetch_page_doc("servicos-page", site_id)
    }

    /// Post a contact-form message.
    pub fn submit_contact(&self, submission: &ContactSubmission) -> Result<()> {
        self.submit("contact-submissions", submission)
    }

    /// Post a newsletter signup.
    pub fn submit_newsletter(&self, submission: &NewsletterSubmission) -> Result<()> {
        self.submit("newsletter-submissions", submission)
    }

    /// Post a union-membership application.
    pub fn submit_membership(&self, submission: &MembershipSubmission) -> Result<()> {
        self.submit("sindicalize-submissions", submission)
    }

    fn fetch_page_doc<T: DeserializeOwned>(&self, collection: &str, site_id: &Id) -> Option<T> {
        let query = Query::new().equals("site", site_id).depth(2);
        match self.fetch_list::<T>(collection, collection, &query) {
            Ok(page) => page.into_first(),
            Err(err) => {
                error!("error fetching {}: {}", collection, err);
                None
            }
        }
    }

    fn fetch_docs<T: DeserializeOwned>(
        &self,
        tag: &str,
        collection: &str,
        query: &Query,
    ) -> Vec<T> {
        match self.fetch_list(tag, collection, query) {
            Ok(page) => page.docs,
            Err(err) => {
                error!("error fetching {}: {}", collection, err);
                Vec::new()
            }
        }
    }

    fn fetch_list<T: DeserializeOwned>(
        &self,
        tag: &str,
        collection: &str,
        query: &Query,
    ) -> Result<Paginated<T>> {
        let path = query.to_path(collection);
        let body = self.fetch_cached(&path, tag)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn fetch_cached(&self, path: &str, tag: &str) -> Result<String> {
        if let Some(body) = self.cache.get(path) {
            debug!("cache hit: {}", path);
            return Ok(body);
        }

        let url = format!("{}{}", self.base_url, path);
        debug!("fetching {}", url);
        let response = self.transport.get(&url)?;
        if !response.is_success() {
            return Err(api_error(response));
        }

        self.cache.put(path, &[tag], response.body.clone());
        Ok(response.body)
    }

    fn submit<T: Serialize>(&self, collection: &str, submission: &T) -> Result<()> {
        let url = format!("{}/api/{}", self.base_url, collection);
        let body = serde_json::to_string(submission)?;
        debug!("posting to {}", url);
        let response = self.transport.post_json(&url, &body)?;
        if response.is_success() {
            Ok(())
        } else {
            Err(api_error(response))
        }
    }
}

/// Build an [`Error::Api`] from a failed response, preferring the first
/// Payload validation message in the body.
fn api_error(response: HttpResponse) -> Error {
    let message = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|value| {
            value
                .get("errors")?
                .get(0)?
                .get("message")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or(response.body);
    Error::Api {
        status: response.status,
        message,
    }
}
