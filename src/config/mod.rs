use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pokedex")]
#[command(about = "Serves pokemon summaries with optional fun translations")]
pub struct CliConfig {
    #[arg(long, default_value = "https://pokeapi.co/api/v2")]
    pub species_api_url: String,

    #[arg(long, default_value = "https://api.funtranslations.com")]
    pub translation_api_url: String,

    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind_address: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log in JSON format")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn species_api_url(&self) -> &str {
        &self.species_api_url
    }

    fn translation_api_url(&self) -> &str {
        &self.translation_api_url
    }

    fn bind_address(&self) -> &str {
        &self.bind_address
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("species_api_url", &self.species_api_url)?;
        validate_url("translation_api_url", &self.translation_api_url)?;
        validate_socket_addr("bind_address", &self.bind_address)?;
        Ok(())
    }
}
