pub mod config;
pub mod dto;
pub mod error;
pub mod services;

pub use config::ApiConfig;
pub use dto::{MAX_TEAM_SIZE, Pokemon, PokemonTeam, PokemonType};
pub use error::ApiError;
pub use services::team_store::TeamStore;
