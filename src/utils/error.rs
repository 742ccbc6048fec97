use thiserror::Error;

/// Cause of a failed upstream call.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("No species named '{name}'")]
    SpeciesNotFound { name: String },

    #[error("Species lookup failed: {source}")]
    LookupFailed { source: BoxedCause },

    #[error("Translation request failed: {source}")]
    TranslationFailed { source: BoxedCause },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PokedexError>;
