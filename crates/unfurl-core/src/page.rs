//! Decoded page metadata.

use serde::Deserialize;

/// Page metadata returned by a resolution endpoint.
///
/// All fields are optional: endpoints return different subsets of the
/// oEmbed response depending on content type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageInfo {
    /// Content title.
    pub title: Option<String>,
    /// Content author.
    pub author_name: Option<String>,
    /// Name of the provider that served the metadata.
    pub provider_name: Option<String>,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Embeddable HTML fragment, when the content type supplies one.
    pub html: Option<String>,
    /// Canonical URL of the content.
    pub url: Option<String>,
}
