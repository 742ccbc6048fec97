use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::model::{FlavorText, SpeciesRecord};
use crate::domain::ports::SpeciesLookup;
use crate::utils::error::{PokedexError, Result};
use crate::utils::validation::require_non_empty;

/// Client for the species service.
#[derive(Debug, Clone)]
pub struct SpeciesApiClient {
    client: Client,
    base_url: String,
}

impl SpeciesApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SpeciesDto {
    name: String,
    #[serde(default)]
    is_legendary: bool,
    habitat: Option<NamedResource>,
    #[serde(default)]
    flavor_text_entries: Vec<FlavorTextDto>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct FlavorTextDto {
    flavor_text: String,
    language: NamedResource,
}

impl From<SpeciesDto> for SpeciesRecord {
    fn from(dto: SpeciesDto) -> Self {
        Self {
            name: dto.name,
            habitat: dto.habitat.map(|habitat| habitat.name),
            is_legendary: dto.is_legendary,
            descriptions: dto
                .flavor_text_entries
                .into_iter()
                .map(|entry| FlavorText {
                    text: entry.flavor_text,
                    language: entry.language.name,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl SpeciesLookup for SpeciesApiClient {
    /// Fetches the raw species record. The upstream's 404 is surfaced as
    /// its own variant so callers can tell absence from breakage; every
    /// other non-success status and any transport fault is a lookup
    /// failure.
    async fn fetch_species(&self, name: &str) -> Result<SpeciesRecord> {
        require_non_empty("pokemon_name", name)?;

        let url = format!("{}/pokemon-species/{}", self.base_url, name);
        tracing::debug!(%url, "requesting species data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| PokedexError::LookupFailed {
                source: error.into(),
            })?;

        tracing::debug!(status = %response.status(), "species response received");

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PokedexError::SpeciesNotFound {
                name: name.to_string(),
            });
        }

        let response = response
            .error_for_status()
            .map_err(|error| PokedexError::LookupFailed {
                source: error.into(),
            })?;

        let dto: SpeciesDto =
            response
                .json()
                .await
                .map_err(|error| PokedexError::LookupFailed {
                    source: error.into(),
                })?;

        Ok(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> SpeciesApiClient {
        SpeciesApiClient::new(Client::new(), server.base_url())
    }

    #[tokio::test]
    async fn test_fetch_species_maps_the_upstream_record() {
        let server = MockServer::start();
        let species_mock = server.mock(|when, then| {
            when.method(GET).path("/pokemon-species/mewtwo");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "name": "mewtwo",
                    "is_legendary": true,
                    "habitat": { "name": "rare", "url": "http://localhost/habitat/5/" },
                    "flavor_text_entries": [
                        {
                            "flavor_text": "Es wurde durch\nGenmanipulation erschaffen.",
                            "language": { "name": "de", "url": "http://localhost/language/6/" }
                        },
                        {
                            "flavor_text": "It was created by\na scientist.",
                            "language": { "name": "en", "url": "http://localhost/language/9/" }
                        }
                    ]
                }));
        });

        let record = client_for(&server).fetch_species("mewtwo").await.unwrap();

        species_mock.assert();
        assert_eq!(record.name, "mewtwo");
        assert!(record.is_legendary);
        assert_eq!(record.habitat.as_deref(), Some("rare"));
        assert_eq!(record.descriptions.len(), 2);
        assert_eq!(record.descriptions[1].language, "en");
        assert_eq!(record.descriptions[1].text, "It was created by\na scientist.");
    }

    #[tokio::test]
    async fn test_missing_habitat_stays_absent() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pokemon-species/mew");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "name": "mew",
                    "is_legendary": true,
                    "habitat": null,
                    "flavor_text_entries": []
                }));
        });

        let record = client_for(&server).fetch_species("mew").await.unwrap();

        assert_eq!(record.habitat, None);
        assert!(record.descriptions.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_404_is_species_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pokemon-species/missingno");
            then.status(404).body("Not Found");
        });

        let error = client_for(&server)
            .fetch_species("missingno")
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            PokedexError::SpeciesNotFound { name } if name == "missingno"
        ));
    }

    #[tokio::test]
    async fn test_upstream_server_error_is_lookup_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pokemon-species/mewtwo");
            then.status(500);
        });

        let error = client_for(&server).fetch_species("mewtwo").await.unwrap_err();

        assert!(matches!(error, PokedexError::LookupFailed { .. }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_lookup_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/pokemon-species/mewtwo");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("definitely not json");
        });

        let error = client_for(&server).fetch_species("mewtwo").await.unwrap_err();

        assert!(matches!(error, PokedexError::LookupFailed { .. }));
    }

    #[tokio::test]
    async fn test_blank_name_fails_before_any_request() {
        let server = MockServer::start();
        let any_request = server.mock(|when, then| {
            when.path_matches(regex::Regex::new(".*").unwrap());
            then.status(200);
        });

        let error = client_for(&server).fetch_species("   ").await.unwrap_err();

        assert!(matches!(error, PokedexError::InvalidArgument { .. }));
        any_request.assert_hits(0);
    }
}
