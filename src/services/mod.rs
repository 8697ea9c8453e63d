pub mod team_api;
pub mod team_store;
