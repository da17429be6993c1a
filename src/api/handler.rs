//! Lambda handler: one search, one asset fetch, one base64 response.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};
use url::Url;

use super::event::InvocationEvent;
use super::response::ResponseDescriptor;
use crate::clients::HttpFetch;
use crate::core::config::AppConfig;
use crate::core::search::{SearchRequest, build_search_url};
use crate::core::variant::VariantConfig;
use crate::errors::GifError;

/// Search-and-fetch handler, built once per process and shared by every
/// invocation.
pub struct GifHandler<C> {
    client: C,
    api_key: String,
    search_url: String,
    variant: VariantConfig,
}

impl<C: HttpFetch> GifHandler<C> {
    #[must_use]
    pub fn new(client: C, config: &AppConfig) -> Self {
        Self {
            client,
            api_key: config.giphy_api_key.clone(),
            search_url: config.search_url.clone(),
            variant: config.variant.clone(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> &VariantConfig {
        &self.variant
    }

    /// Derives the search request from `event` (random offset included) and
    /// serves it.
    ///
    /// # Errors
    ///
    /// See [`GifHandler::handle_request`].
    pub async fn handle(&self, event: &InvocationEvent) -> Result<ResponseDescriptor, GifError> {
        let request = SearchRequest::from_event(event, &self.variant);
        self.handle_request(&request).await
    }

    /// Runs the search, takes the first result and returns its asset inline.
    ///
    /// # Errors
    ///
    /// Fails on the first problem without retrying: transport failures and
    /// non-2xx statuses from either call, an empty `data` array, or a result
    /// with no usable asset URL.
    pub async fn handle_request(
        &self,
        request: &SearchRequest,
    ) -> Result<ResponseDescriptor, GifError> {
        let url = build_search_url(&self.search_url, &self.api_key, request, &self.variant);

        #[cfg(feature = "debug-logs")]
        info!("Searching Giphy: {}", url);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Searching Giphy: {}",
            crate::core::search::redact_api_key(&url, &self.api_key)
        );

        let envelope = self.client.get_json(&url).await?;
        let asset_url = self.first_asset_url(&envelope)?;
        info!(offset = request.offset, "Fetching asset {}", asset_url);

        let bytes = self.client.get_bytes(asset_url.as_str()).await?;
        info!("Fetched {} byte asset", bytes.len());

        Ok(ResponseDescriptor::ok_base64(
            &bytes,
            self.variant.headers.headers(),
        ))
    }

    fn first_asset_url(&self, envelope: &Value) -> Result<Url, GifError> {
        let data = envelope
            .get("data")
            .and_then(Value::as_array)
            .ok_or_else(|| GifError::MalformedResponse("missing 'data' array".to_string()))?;

        let first = data.first().ok_or(GifError::EmptyResult)?;

        let raw = self.variant.asset_field.resolve(first).ok_or_else(|| {
            GifError::MalformedResponse(format!(
                "result has no asset URL at {}",
                self.variant.asset_field.pointer()
            ))
        })?;

        Url::parse(raw)
            .map_err(|e| GifError::MalformedResponse(format!("invalid asset URL '{raw}': {e}")))
    }
}

/// Lambda entry point. Logs the raw event, runs `handler` and turns any
/// failure into an invocation error so the runtime reports it.
///
/// # Errors
///
/// Returns an error if the handler fails. A payload that is not a JSON object
/// (a bare string from a direct invoke, say) is rejected as a parse error
/// before any search is made; an object without `queryStringParameters`
/// searches with an empty term.
#[tracing::instrument(level = "info", skip(handler, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler<C: HttpFetch>(
    handler: &GifHandler<C>,
    event: LambdaEvent<Value>,
) -> Result<ResponseDescriptor, Error> {
    info!("Event: {}", event.payload);

    let invocation: InvocationEvent = serde_json::from_value(event.payload).map_err(|e| {
        error!("Failed to parse invocation event: {}", e);
        Error::from(format!("Parse Error: {e}"))
    })?;

    handler.handle(&invocation).await.map_err(|e| {
        error!("Request failed: {}", e);
        Error::from(e)
    })
}
