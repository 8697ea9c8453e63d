pub mod pokemon_dto;
pub mod team_dto;

pub use pokemon_dto::{Pokemon, PokemonRecord, PokemonType, PokemonTypeRecord};
pub use team_dto::{MAX_TEAM_SIZE, PokemonTeam, TeamRecord};
