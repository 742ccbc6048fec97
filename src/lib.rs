pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::{SpeciesApiClient, TranslationApiClient};
pub use config::CliConfig;
pub use core::service::PokedexService;
pub use utils::error::{PokedexError, Result};
