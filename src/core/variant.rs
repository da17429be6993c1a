//! Handler variants.
//!
//! The function ships in two flavours that differ only in which query
//! parameter carries the search term, which result field holds the asset
//! URL, which response headers are attached and how the offset is written
//! into the search URL. [`VariantConfig`] captures those points so a single
//! handler serves both.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde_json::Value;

use crate::errors::GifError;

/// Where the asset URL lives inside a search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetField {
    /// `images.original.url`, the direct GIF file.
    OriginalImage,
    /// `embed_url`, the provider's embeddable page.
    EmbedUrl,
}

impl AssetField {
    /// JSON pointer into a single search result.
    #[must_use]
    pub fn pointer(self) -> &'static str {
        match self {
            AssetField::OriginalImage => "/images/original/url",
            AssetField::EmbedUrl => "/embed_url",
        }
    }

    #[must_use]
    pub fn resolve(self, result: &Value) -> Option<&str> {
        result.pointer(self.pointer()).and_then(Value::as_str)
    }
}

/// How the random offset is written into the search URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetStyle {
    /// `&offset=<n>`
    Param,
    /// `&<n>=0`. The provider ignores the unknown key, so every call lands on
    /// offset 0. Reproduced as-is for the embed flavour; see DESIGN.md.
    LegacyKey,
}

impl FromStr for OffsetStyle {
    type Err = GifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "param" => Ok(OffsetStyle::Param),
            "legacy-key" | "legacy_key" => Ok(OffsetStyle::LegacyKey),
            other => Err(GifError::Config(format!(
                "GIF_OFFSET_STYLE: unknown offset style '{other}'"
            ))),
        }
    }
}

/// Headers attached to a successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSet {
    /// `Content-Type: image/gif` and `Cache-Control: no-store`.
    GifNoStore,
    /// No `headers` field at all.
    None,
}

impl HeaderSet {
    #[must_use]
    pub fn headers(self) -> Option<BTreeMap<String, String>> {
        match self {
            HeaderSet::GifNoStore => Some(BTreeMap::from([
                ("Content-Type".to_string(), "image/gif".to_string()),
                ("Cache-Control".to_string(), "no-store".to_string()),
            ])),
            HeaderSet::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantConfig {
    pub query_param: String,
    pub asset_field: AssetField,
    pub headers: HeaderSet,
    pub offset_style: OffsetStyle,
    /// Percent-encode the term before it goes into the URL. Off by default,
    /// which keeps the raw interpolation the function has always done.
    pub encode_term: bool,
}

impl VariantConfig {
    /// `?query=` in, original GIF out, served as `image/gif`.
    #[must_use]
    pub fn image() -> Self {
        Self {
            query_param: "query".to_string(),
            asset_field: AssetField::OriginalImage,
            headers: HeaderSet::GifNoStore,
            offset_style: OffsetStyle::Param,
            encode_term: false,
        }
    }

    /// `?term=` in, `embed_url` content out, no headers.
    #[must_use]
    pub fn embed() -> Self {
        Self {
            query_param: "term".to_string(),
            asset_field: AssetField::EmbedUrl,
            headers: HeaderSet::None,
            offset_style: OffsetStyle::LegacyKey,
            encode_term: false,
        }
    }
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self::image()
    }
}

impl FromStr for VariantConfig {
    type Err = GifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(Self::image()),
            "embed" => Ok(Self::embed()),
            other => Err(GifError::Config(format!(
                "GIF_VARIANT: unknown variant '{other}'"
            ))),
        }
    }
}
