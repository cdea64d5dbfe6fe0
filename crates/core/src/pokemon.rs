use regex::Regex;
use serde::{Deserialize, Serialize};

/// Roster entry from the PokeAPI list endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PokemonStub {
    pub name: String,
    pub url: String,
}

/// One page of the paginated roster listing
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RosterPage {
    pub results: Vec<PokemonStub>,
}

/// Full Pokemon record from the PokeAPI detail endpoint
///
/// Only the fields the card view consumes are modeled. The API returns
/// many more, which serde skips.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PokemonDetail {
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// Sprite collection on a detail record
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Sprites {
    #[serde(default)]
    pub other: OtherSprites,
}

/// Alternate sprite sets keyed by art style
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

/// Official artwork URLs. `front_default` is null for some entries.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Type assignment on a detail record, in slot order
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u32>,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Name and URL pair used throughout the PokeAPI
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
}

/// Display-ready card data derived from a detail record
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

/// Reduce a detail record to the three fields a card displays
///
/// The subtitle joins the type names with ", " in the order the API
/// lists them. A missing artwork URL becomes an empty string so the
/// card still renders.
pub fn summarize(detail: &PokemonDetail) -> CardSummary {
    let subtitle = detail
        .types
        .iter()
        .map(|t| t.kind.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    CardSummary {
        title: detail.name.clone(),
        subtitle,
        image: detail
            .sprites
            .other
            .official_artwork
            .front_default
            .clone()
            .unwrap_or_default(),
    }
}

/// Summarize a batch of detail records, preserving input order
pub fn summarize_all(details: &[PokemonDetail]) -> Vec<CardSummary> {
    details.iter().map(summarize).collect()
}

/// Extract the numeric id from a PokeAPI resource URL
///
/// Returns `None` for URLs that do not end in `/pokemon/{id}/`.
pub fn dex_number(url: &str) -> Option<u32> {
    let re = Regex::new(r"/pokemon/(\d+)/?$").unwrap();
    re.captures(url)?.get(1)?.as_str().parse().ok()
}
