use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PokemonType {
    pub name: String,
    pub image: String,
}

/// A Pokémon as displayed on a team. Instances are immutable once built; the
/// store only moves them in and out of team lists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    /// Backend-assigned instance id, distinct from the species id.
    pub id: i64,
    /// Species id in the external Pokédex catalog.
    pub pokedex_id: i64,
    pub name: String,
    pub image: String,
    pub sprite: String,
    pub types: Vec<PokemonType>,
}

/// Raw type entry as it appears in API responses.
#[derive(Debug, Deserialize, Clone)]
pub struct PokemonTypeRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Raw Pokémon entry as it appears in API responses. Unknown fields are
/// dropped on deserialization; known fields are mapped one-by-one into
/// [`Pokemon`].
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub pokedex_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sprite: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeRecord>,
}

impl From<PokemonTypeRecord> for PokemonType {
    fn from(record: PokemonTypeRecord) -> Self {
        PokemonType {
            name: record.name,
            image: record.image,
        }
    }
}

impl From<PokemonRecord> for Pokemon {
    fn from(record: PokemonRecord) -> Self {
        Pokemon {
            id: record.id,
            pokedex_id: record.pokedex_id,
            name: record.name,
            image: record.image,
            sprite: record.sprite,
            types: record.types.into_iter().map(PokemonType::from).collect(),
        }
    }
}
