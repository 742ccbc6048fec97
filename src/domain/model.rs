use serde::Serialize;

/// Species data as returned by the species service, reduced to the fields
/// the aggregation cares about. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesRecord {
    pub name: String,
    /// Absent when the upstream service has no habitat assigned.
    pub habitat: Option<String>,
    pub is_legendary: bool,
    pub descriptions: Vec<FlavorText>,
}

/// One localized description string tagged with its language code.
#[derive(Debug, Clone, PartialEq)]
pub struct FlavorText {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    /// The submitted text as echoed back by the translation service.
    pub original_text: String,
    pub translated_text: String,
}

/// What the translation service gave back. A non-success status from the
/// service is `Empty`, not an error; transport faults travel on the error
/// channel instead.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslationOutcome {
    Translated(TranslationResult),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStyle {
    Yoda,
    Shakespeare,
}

impl TranslationStyle {
    /// Cave dwellers speak Yoda; everything else, species without a
    /// habitat included, gets Shakespeare.
    pub fn for_habitat(habitat: Option<&str>) -> Self {
        match habitat {
            Some(name) if name.eq_ignore_ascii_case("cave") => Self::Yoda,
            _ => Self::Shakespeare,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yoda => "yoda",
            Self::Shakespeare => "shakespeare",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonSummary {
    pub name: String,
    pub description: String,
    pub is_legendary: bool,
    pub habitat: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedPokemonSummary {
    pub name: String,
    pub description: String,
    pub is_legendary: bool,
    pub habitat: Option<String>,
    pub translated_description: String,
}

/// Caller-visible result of an aggregation: either a complete summary or
/// nothing. Upstream failure causes never cross this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome<T> {
    Found(T),
    NotFound,
}
