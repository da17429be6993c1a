use std::env;

use crate::core::variant::{OffsetStyle, VariantConfig};
use crate::errors::GifError;

pub const DEFAULT_SEARCH_URL: &str = "https://api.giphy.com/v1/gifs/search";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub giphy_api_key: String,
    pub search_url: String,
    pub variant: VariantConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, GifError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so callers other than the
    /// Lambda entry point do not have to touch the process environment.
    ///
    /// `GIPHY_API_KEY` must be present, so a missing key fails the cold start
    /// instead of searching with an unusable key. An empty value is accepted.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GifError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let giphy_api_key = lookup("GIPHY_API_KEY")
            .ok_or_else(|| GifError::Config("GIPHY_API_KEY: not set".to_string()))?;

        let mut variant = match lookup("GIF_VARIANT") {
            Some(name) => name.parse::<VariantConfig>()?,
            None => VariantConfig::default(),
        };

        if let Some(style) = lookup("GIF_OFFSET_STYLE") {
            variant.offset_style = style.parse::<OffsetStyle>()?;
        }

        if let Some(flag) = lookup("GIF_ENCODE_TERM") {
            variant.encode_term = parse_bool("GIF_ENCODE_TERM", &flag)?;
        }

        Ok(Self {
            giphy_api_key,
            search_url: lookup("GIPHY_SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
            variant,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, GifError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(GifError::Config(format!(
            "{name}: expected a boolean, got '{other}'"
        ))),
    }
}
