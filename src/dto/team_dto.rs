use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::pokemon_dto::{Pokemon, PokemonRecord};

/// A team never holds more than six Pokémon.
pub const MAX_TEAM_SIZE: usize = 6;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PokemonTeam {
    /// Absent until the backend assigns one on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub subname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Insertion order is display order.
    #[serde(default)]
    pub pokemons: Vec<Pokemon>,
}

/// Raw team record as it appears in API responses. Deserialization is
/// permissive; the [`From`] mapping below re-shapes it field by field into a
/// well-formed [`PokemonTeam`], discarding anything unexpected.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subname: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pokemons: Vec<PokemonRecord>,
}

impl From<TeamRecord> for PokemonTeam {
    fn from(record: TeamRecord) -> Self {
        PokemonTeam {
            id: record.id,
            name: record.name,
            subname: record.subname,
            created_at: record.created_at,
            updated_at: record.updated_at,
            // The size invariant holds even for oversized server records.
            pokemons: record
                .pokemons
                .into_iter()
                .take(MAX_TEAM_SIZE)
                .map(Pokemon::from)
                .collect(),
        }
    }
}
