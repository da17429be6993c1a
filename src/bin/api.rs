use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use random_gif::api::{GifHandler, function_handler};
use random_gif::clients::ReqwestFetcher;
use random_gif::core::config::AppConfig;
use serde_json::Value;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    random_gif::setup_logging();

    // Loaded once per cold start; invocations share the handler.
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    info!(
        query_param = %config.variant.query_param,
        offset_style = ?config.variant.offset_style,
        "Starting random-gif handler"
    );

    let handler = Arc::new(GifHandler::new(ReqwestFetcher::default(), &config));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { function_handler(&*handler, event).await }
    }))
    .await
}
