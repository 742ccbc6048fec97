pub mod species;
pub mod translation;

pub use species::SpeciesApiClient;
pub use translation::TranslationApiClient;
