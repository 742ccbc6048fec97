use anyhow::Context;
use clap::Parser;
use pokedex::domain::ports::ConfigProvider;
use pokedex::server::{router, AppState};
use pokedex::utils::{logger, validation::Validate};
use pokedex::{CliConfig, PokedexService, SpeciesApiClient, TranslationApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_console_logger(config.verbose);
    }

    tracing::info!("Starting pokedex API");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let http = reqwest::Client::new();
    let species = SpeciesApiClient::new(http.clone(), config.species_api_url());
    let translator = TranslationApiClient::new(http, config.translation_api_url());
    let service = PokedexService::new(species, translator);

    let app = router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
