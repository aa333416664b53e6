use std::sync::Arc;

use tubeview::config::Config;
use tubeview::server::{start_http_server, HttpState};
use tubeview::util::mask_api_key;
use tubeview::youtube::YouTubeClient;

#[tokio::main]
async fn main() {
    // .envがあれば読み込む（なくてもよい）
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Using YouTube API key: {}", mask_api_key(&config.api_key));
    log::info!("Default channel: {}", config.default_channel);

    let state = HttpState {
        youtube: Arc::new(YouTubeClient::new(config.api_key)),
        default_channel: Arc::new(config.default_channel),
    };

    if let Err(e) = start_http_server(state, &config.bind_addr, config.static_dir).await {
        log::error!("HTTP server error: {}", e);
        std::process::exit(1);
    }
}
