use crate::core::description::english_description;
use crate::domain::model::{
    LookupOutcome, PokemonSummary, TranslatedPokemonSummary, TranslationOutcome, TranslationStyle,
};
use crate::domain::ports::{SpeciesLookup, Translator};
use crate::utils::error::Result;
use crate::utils::validation::require_non_empty;

/// Aggregates the species and translation services into the two public
/// lookups. Collaborators are injected at construction; the service holds
/// no other state, so one instance serves any number of concurrent
/// requests.
pub struct PokedexService<S: SpeciesLookup, T: Translator> {
    species: S,
    translator: T,
}

impl<S: SpeciesLookup, T: Translator> PokedexService<S, T> {
    pub fn new(species: S, translator: T) -> Self {
        Self {
            species,
            translator,
        }
    }

    /// Basic lookup: species data plus the normalized English description.
    ///
    /// A blank name is rejected before anything goes on the wire. Every
    /// remote failure, the upstream's explicit not-found included, is
    /// logged and collapsed to `NotFound`; callers never learn whether the
    /// species is missing or the upstream is down.
    pub async fn get_pokemon(&self, name: &str) -> Result<LookupOutcome<PokemonSummary>> {
        require_non_empty("pokemon_name", name)?;

        let record = match self.species.fetch_species(name).await {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(pokemon = name, error = %error, "species lookup failed");
                return Ok(LookupOutcome::NotFound);
            }
        };

        let description = english_description(&record.descriptions);

        Ok(LookupOutcome::Found(PokemonSummary {
            name: record.name,
            description,
            is_legendary: record.is_legendary,
            habitat: record.habitat,
        }))
    }

    /// Translated lookup: the same species data with the description run
    /// through the translation service, Yoda-styled for cave dwellers and
    /// Shakespeare-styled for everyone else.
    ///
    /// The two remote calls are strictly sequential. A failed or empty
    /// translation collapses to `NotFound` even though the species lookup
    /// succeeded.
    pub async fn get_translated_pokemon(
        &self,
        name: &str,
    ) -> Result<LookupOutcome<TranslatedPokemonSummary>> {
        require_non_empty("pokemon_name", name)?;

        let record = match self.species.fetch_species(name).await {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(pokemon = name, error = %error, "species lookup failed");
                return Ok(LookupOutcome::NotFound);
            }
        };

        let description = english_description(&record.descriptions);
        let style = TranslationStyle::for_habitat(record.habitat.as_deref());

        let translation = match self.translator.translate(&description, style).await {
            Ok(TranslationOutcome::Translated(translation)) => translation,
            Ok(TranslationOutcome::Empty) => {
                tracing::warn!(
                    pokemon = name,
                    style = style.as_str(),
                    "translation service returned no translation"
                );
                return Ok(LookupOutcome::NotFound);
            }
            Err(error) => {
                tracing::warn!(pokemon = name, error = %error, "translation request failed");
                return Ok(LookupOutcome::NotFound);
            }
        };

        // The summary carries the text the translation service echoed back,
        // not the locally normalized string.
        Ok(LookupOutcome::Found(TranslatedPokemonSummary {
            name: record.name,
            description: translation.original_text,
            is_legendary: record.is_legendary,
            habitat: record.habitat,
            translated_description: translation.translated_text,
        }))
    }
}
