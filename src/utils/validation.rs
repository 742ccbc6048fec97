use crate::utils::error::{PokedexError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PokedexError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PokedexError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PokedexError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_socket_addr(field_name: &str, value: &str) -> Result<()> {
    match value.parse::<SocketAddr>() {
        Ok(_) => Ok(()),
        Err(e) => Err(PokedexError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid socket address: {}", e),
        }),
    }
}

/// Request-argument check shared by the clients and the aggregation
/// service. Rejects before anything goes on the wire.
pub fn require_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PokedexError::InvalidArgument {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("species_api_url", "https://example.com").is_ok());
        assert!(validate_url("species_api_url", "http://example.com").is_ok());
        assert!(validate_url("species_api_url", "").is_err());
        assert!(validate_url("species_api_url", "invalid-url").is_err());
        assert!(validate_url("species_api_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("bind_address", "127.0.0.1:8080").is_ok());
        assert!(validate_socket_addr("bind_address", "0.0.0.0:0").is_ok());
        assert!(validate_socket_addr("bind_address", "localhost:8080").is_err());
        assert!(validate_socket_addr("bind_address", "").is_err());
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("pokemon_name", "mewtwo").is_ok());
        assert!(require_non_empty("pokemon_name", "").is_err());
        assert!(require_non_empty("pokemon_name", "   ").is_err());
        assert!(require_non_empty("pokemon_name", "\t\n").is_err());
    }

    #[test]
    fn test_require_non_empty_reports_the_field() {
        let error = require_non_empty("text", " ").unwrap_err();
        match error {
            PokedexError::InvalidArgument { field, .. } => assert_eq!(field, "text"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
