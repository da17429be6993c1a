//! Search request derivation: term extraction, offset draw and URL building.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;

use crate::api::event::InvocationEvent;
use crate::core::variant::{OffsetStyle, VariantConfig};

/// Inclusive bounds of the random result offset.
pub const MIN_OFFSET: u32 = 0;
pub const MAX_OFFSET: u32 = 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    pub offset: u32,
}

impl SearchRequest {
    /// Derives a request from the event with a freshly drawn offset.
    #[must_use]
    pub fn from_event(event: &InvocationEvent, variant: &VariantConfig) -> Self {
        Self {
            term: extract_search_term(event, &variant.query_param),
            offset: random_offset(),
        }
    }
}

/// Returns the value of `param` from the event's query string, untouched, or
/// an empty string when either the mapping or the key is missing.
#[must_use]
pub fn extract_search_term(event: &InvocationEvent, param: &str) -> String {
    event
        .query_string_parameters
        .as_ref()
        .and_then(|params| params.get(param))
        .cloned()
        .unwrap_or_default()
}

#[must_use]
pub fn random_offset() -> u32 {
    rand::thread_rng().gen_range(MIN_OFFSET..=MAX_OFFSET)
}

#[must_use]
pub fn build_search_url(
    search_url: &str,
    api_key: &str,
    request: &SearchRequest,
    variant: &VariantConfig,
) -> String {
    let term = if variant.encode_term {
        utf8_percent_encode(&request.term, NON_ALPHANUMERIC).to_string()
    } else {
        request.term.clone()
    };

    let offset = match variant.offset_style {
        OffsetStyle::Param => format!("offset={}", request.offset),
        OffsetStyle::LegacyKey => format!("{}=0", request.offset),
    };

    format!("{search_url}?api_key={api_key}&q={term}&limit=1&{offset}&rating=g&lang=en")
}

/// Same URL with the key blanked, for log lines.
#[must_use]
pub fn redact_api_key(url: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return url.to_string();
    }
    url.replace(&format!("api_key={api_key}"), "api_key=***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_api_key() {
        let url = "https://x/search?api_key=secret&q=cat";
        assert_eq!(
            redact_api_key(url, "secret"),
            "https://x/search?api_key=***&q=cat"
        );
    }

    #[test]
    fn test_redact_with_empty_key_is_noop() {
        let url = "https://x/search?api_key=&q=cat";
        assert_eq!(redact_api_key(url, ""), url);
    }
}
