//! Public share links and page metadata.
//!
//! A shared artwork lives at `{public_base_url}/shared/{id}`. The page is
//! public: anyone holding the link sees the artwork regardless of who owns
//! it. QR codes are rendered by an external image service keyed by the link.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::artwork::ArtworkKind;
use crate::config::ShareSettings;

/// Site name shown in link previews.
pub const SITE_NAME: &str = "Kult";

/// Preview image served by the web app.
const PREVIEW_IMAGE_PATH: &str = "/huangshan.png";

const FALLBACK_TITLE: &str = "Shared Artwork | Kult";
const FALLBACK_DESCRIPTION: &str = "Discover this artwork shared on Kult";

/// Public page link for an artwork.
pub fn share_url(settings: &ShareSettings, artwork_id: i64) -> String {
    format!("{}/shared/{}", base(settings), artwork_id)
}

/// Image URL of a QR code encoding `target`.
pub fn qr_code_url(settings: &ShareSettings, target: &str) -> String {
    let data: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
    let separator = if settings.qr_service_url.contains('?') {
        '&'
    } else {
        '?'
    };
    format!(
        "{}{}size={}x{}&data={}",
        settings.qr_service_url, separator, settings.qr_size, settings.qr_size, data
    )
}

fn base(settings: &ShareSettings) -> &str {
    settings.public_base_url.trim_end_matches('/')
}

/// Link and QR code for sharing one artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinks {
    pub share_url: String,
    pub qr_code_url: String,
}

impl ShareLinks {
    pub fn new(settings: &ShareSettings, artwork_id: i64) -> Self {
        let share_url = share_url(settings, artwork_id);
        let qr_code_url = qr_code_url(settings, &share_url);
        Self {
            share_url,
            qr_code_url,
        }
    }
}

/// Fields of an artwork that appear in a link preview.
#[derive(Debug, Clone, Copy)]
pub struct ShareSubject<'a> {
    pub id: i64,
    pub name: &'a str,
    pub author: &'a str,
    pub kind: ArtworkKind,
    pub publication_year: i32,
    pub description: Option<&'a str>,
}

/// Link-preview metadata for a shared artwork page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub image: String,
}

impl ShareMetadata {
    /// Metadata describing a specific artwork.
    ///
    /// The artwork's own description wins; otherwise a sentence is built
    /// from its kind and year.
    pub fn for_artwork(settings: &ShareSettings, subject: &ShareSubject<'_>) -> Self {
        let description = match subject.description.filter(|d| !d.trim().is_empty()) {
            Some(description) => description.to_string(),
            None => format!(
                "Check out \"{}\" by {} on {} - a {} from {}",
                subject.name, subject.author, SITE_NAME, subject.kind, subject.publication_year
            ),
        };

        Self {
            title: format!("{} by {} | {}", subject.name, subject.author, SITE_NAME),
            description,
            url: share_url(settings, subject.id),
            site_name: SITE_NAME.to_string(),
            image: format!("{}{}", base(settings), PREVIEW_IMAGE_PATH),
        }
    }

    /// Generic metadata for a link whose artwork could not be loaded.
    pub fn fallback(settings: &ShareSettings, artwork_id: i64) -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            url: share_url(settings, artwork_id),
            site_name: SITE_NAME.to_string(),
            image: format!("{}{}", base(settings), PREVIEW_IMAGE_PATH),
        }
    }
}
