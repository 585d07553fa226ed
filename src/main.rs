use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shoreline::api::AppState;
use shoreline::weather::{ConditionsProvider, DemoProvider, OpenWeatherMapClient};
use shoreline::{web, AlertBoard, BeachCatalog, ShorelineConfig};

fn init_tracing(config: &ShorelineConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ShorelineConfig::load()?;
    init_tracing(&config);

    let provider: Arc<dyn ConditionsProvider> = match &config.weather.api_key {
        Some(api_key) => {
            info!("Using OpenWeatherMap for live conditions");
            Arc::new(OpenWeatherMapClient::new(
                api_key.clone(),
                config.weather.base_url.clone(),
            ))
        }
        None => {
            info!("No weather API key configured, serving demo conditions");
            Arc::new(DemoProvider)
        }
    };

    let state = AppState {
        catalog: Arc::new(BeachCatalog::seeded()?),
        alerts: Arc::new(AlertBoard::seeded()),
        provider,
        defaults: config.defaults.clone(),
    };

    web::run(config.server.port, state).await
}
