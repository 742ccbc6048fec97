use crate::domain::model::{SpeciesRecord, TranslationOutcome, TranslationStyle};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait SpeciesLookup: Send + Sync {
    async fn fetch_species(&self, name: &str) -> Result<SpeciesRecord>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, style: TranslationStyle)
        -> Result<TranslationOutcome>;
}

pub trait ConfigProvider: Send + Sync {
    fn species_api_url(&self) -> &str;
    fn translation_api_url(&self) -> &str;
    fn bind_address(&self) -> &str;
}
