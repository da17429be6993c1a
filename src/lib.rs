//! random-gif - a Lambda function that searches Giphy and returns one GIF inline.
//!
//! Each invocation reads a search term from the API Gateway query string,
//! asks the Giphy search API for a single result at a random offset, downloads
//! the asset behind that result and returns it base64 encoded in a proxy
//! response.
//!
//! # Architecture
//!
//! - `core`: configuration, handler variants and search request building
//! - `clients`: the outbound HTTP seam, backed by reqwest
//! - `api`: event/response shapes and the handler itself
//!
//! # Example
//!
//! ```no_run
//! use random_gif::api::event::InvocationEvent;
//! use random_gif::api::GifHandler;
//! use random_gif::clients::ReqwestFetcher;
//! use random_gif::core::config::{AppConfig, DEFAULT_SEARCH_URL};
//! use random_gif::core::variant::VariantConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     random_gif::setup_logging();
//!
//!     let config = AppConfig {
//!         giphy_api_key: "dummy_key".to_string(),
//!         search_url: DEFAULT_SEARCH_URL.to_string(),
//!         variant: VariantConfig::image(),
//!     };
//!
//!     let handler = GifHandler::new(ReqwestFetcher::default(), &config);
//!     let response = handler
//!         .handle(&InvocationEvent::with_query(&[("query", "cat")]))
//!         .await?;
//!
//!     println!("{} base64 chars", response.body.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use errors::GifError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to stdout, which Lambda forwards to `CloudWatch` Logs. The level
/// comes from `RUST_LOG` and defaults to `info`. Calling it more than once is
/// harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```
/// random_gif::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
