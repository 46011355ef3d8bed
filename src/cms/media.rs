//! Uploaded media documents and their generated size variants.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::Id;

/// An uploaded media document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: Id,

    /// Alternative text entered by the author.
    #[serde(default)]
    pub alt: Option<String>,

    /// URL of the original upload, usually relative to the API host.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub mime_type: String,

    #[serde(default)]
    pub filesize: u64,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    /// Pre-generated resizes. Variants the backend has not produced are
    /// absent.
    #[serde(default)]
    pub sizes: MediaSizes,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// The named size variants the backend generates for every upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaSizes {
    #[serde(default)]
    pub thumbnail: Option<ImageSize>,
    #[serde(default)]
    pub square: Option<ImageSize>,
    #[serde(default)]
    pub small: Option<ImageSize>,
    #[serde(default)]
    pub medium: Option<ImageSize>,
    #[serde(default)]
    pub large: Option<ImageSize>,
    #[serde(default)]
    pub xlarge: Option<ImageSize>,
    #[serde(default)]
    pub og: Option<ImageSize>,
}

impl MediaSizes {
    /// Look up a variant by name.
    pub fn get(&self, variant: SizeVariant) -> Option<&ImageSize> {
        match variant {
            SizeVariant::Thumbnail => self.thumbnail.as_ref(),
            SizeVariant::Square => self.square.as_ref(),
            SizeVariant::Small => self.small.as_ref(),
            SizeVariant::Medium => self.medium.as_ref(),
            SizeVariant::Large => self.large.as_ref(),
            SizeVariant::Xlarge => self.xlarge.as_ref(),
            SizeVariant::Og => self.og.as_ref(),
        }
    }
}

/// One generated resize of an upload.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageSize {
    /// May be empty when the variant exists but the file was not written.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Selector for a media size variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVariant {
    Thumbnail,
    Square,
    Small,
    Medium,
    Large,
    Xlarge,
    Og,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_minimal() {
        let media: Media = serde_json::from_str(
            r#"{"id": 1, "url": "/media/a.jpg", "filename": "a.jpg",
                "mimeType": "image/jpeg", "filesize": 1024}"#,
        )
        .unwrap();
        assert_eq!(media.url, "/media/a.jpg");
        assert!(media.sizes.get(SizeVariant::Medium).is_none());
    }

    #[test]
    fn test_media_sizes_lookup() {
        let media: Media = serde_json::from_str(
            r#"{"id": 1, "url": "/media/a.jpg", "filename": "a.jpg",
                "mimeType": "image/jpeg", "filesize": 1024,
                "sizes": {"medium": {"url": "/media/a-600.jpg", "width": 600, "height": 400}}}"#,
        )
        .unwrap();
        let medium = media.sizes.get(SizeVariant::Medium).unwrap();
        assert_eq!(medium.url, "/media/a-600.jpg");
        assert_eq!(medium.width, Some(600));
    }
}
