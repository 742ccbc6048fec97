use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::model::{TranslationOutcome, TranslationResult, TranslationStyle};
use crate::domain::ports::Translator;
use crate::utils::error::{PokedexError, Result};
use crate::utils::validation::require_non_empty;

/// Client for the translation service.
#[derive(Debug, Clone)]
pub struct TranslationApiClient {
    client: Client,
    base_url: String,
}

impl TranslationApiClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslationRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslationDto {
    #[serde(default)]
    success: SuccessDto,
    #[serde(default)]
    contents: ContentsDto,
}

#[derive(Debug, Default, Deserialize)]
struct SuccessDto {
    #[serde(default)]
    total: u32,
}

#[derive(Debug, Default, Deserialize)]
struct ContentsDto {
    #[serde(default)]
    translated: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    translation: String,
}

#[async_trait]
impl Translator for TranslationApiClient {
    /// A non-success status from the service means "no translation" and is
    /// reported as `Empty`; only transport faults and unreadable bodies
    /// become errors.
    async fn translate(
        &self,
        text: &str,
        style: TranslationStyle,
    ) -> Result<TranslationOutcome> {
        require_non_empty("text", text)?;

        let url = format!("{}/translate/{}", self.base_url, style.as_str());
        tracing::debug!(%url, "requesting translation");

        let response = self
            .client
            .post(&url)
            .json(&TranslationRequest { text })
            .send()
            .await
            .map_err(|error| PokedexError::TranslationFailed {
                source: error.into(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "translation service returned no translation");
            return Ok(TranslationOutcome::Empty);
        }

        let dto: TranslationDto =
            response
                .json()
                .await
                .map_err(|error| PokedexError::TranslationFailed {
                    source: error.into(),
                })?;

        tracing::debug!(
            total = dto.success.total,
            style = %dto.contents.translation,
            "translation received"
        );

        Ok(TranslationOutcome::Translated(TranslationResult {
            original_text: dto.contents.text,
            translated_text: dto.contents.translated,
        }))
    }
}
