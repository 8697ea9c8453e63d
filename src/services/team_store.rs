use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use reqwest::Client;

use crate::config::ApiConfig;
use crate::dto::{MAX_TEAM_SIZE, Pokemon, PokemonTeam};

#[derive(Default)]
pub(crate) struct TeamState {
    pub(crate) current_team: Option<PokemonTeam>,
    pub(crate) teams: Vec<PokemonTeam>,
    /// Generation of the list fetch whose result is currently mirrored in
    /// `teams`. Guarded by the state lock so the compare and the write-back
    /// happen atomically.
    pub(crate) applied_list_generation: u64,
}

/// Shared holder of the team-builder state: the current in-progress team and
/// the server-mirrored teams collection.
///
/// Constructed once at application start and passed by reference to whoever
/// needs it. Local mutations never fail; invalid calls (adding to a missing
/// current team, removing an unknown Pokémon) are silent no-ops. Remote
/// operations live in `team_api.rs`.
pub struct TeamStore {
    config: ApiConfig,
    client: Client,
    state: Mutex<TeamState>,
    list_generation: AtomicU64,
}

impl TeamStore {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
            state: Mutex::new(TeamState::default()),
            list_generation: AtomicU64::new(0),
        }
    }

    pub(crate) fn state(&self) -> MutexGuard<'_, TeamState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Marks the start of a team-list fetch and returns its generation. The
    /// write-back decision is made against `TeamState::applied_list_generation`
    /// under the state lock, never against this counter.
    pub(crate) fn begin_list_fetch(&self) -> u64 {
        self.list_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current_team(&self) -> Option<PokemonTeam> {
        self.state().current_team.clone()
    }

    pub fn teams(&self) -> Vec<PokemonTeam> {
        self.state().teams.clone()
    }

    /// Replaces the current-team slot unconditionally.
    pub fn set_current_team(&self, team: PokemonTeam) {
        self.state().current_team = Some(team);
    }

    /// Appends a Pokémon to the current team, unless there is no current team
    /// or the team is already full. The same Pokémon id may be added twice;
    /// duplicates are deliberately permitted.
    pub fn add_current_team_pokemon(&self, pokemon: Pokemon) {
        let mut state = self.state();
        if let Some(team) = state.current_team.as_mut() {
            if team.pokemons.len() < MAX_TEAM_SIZE {
                team.pokemons.push(pokemon);
            }
        }
    }

    /// Removes every Pokémon with the given id from the current team.
    pub fn remove_current_team_pokemon(&self, pokemon_id: i64) {
        let mut state = self.state();
        if let Some(team) = state.current_team.as_mut() {
            team.pokemons.retain(|p| p.id != pokemon_id);
        }
    }

    pub fn clear_current_team(&self) {
        self.state().current_team = None;
    }

    /// Replaces the current team and/or the matching collection entry with a
    /// copy of `team`, matched by id. Both checks are independent; either,
    /// both, or neither may fire. Teams without an id are ignored.
    pub fn update_teams(&self, team: PokemonTeam) {
        let Some(team_id) = team.id.clone() else {
            return;
        };
        let mut state = self.state();
        if state
            .current_team
            .as_ref()
            .is_some_and(|current| current.id.as_deref() == Some(team_id.as_str()))
        {
            state.current_team = Some(team.clone());
        }
        if let Some(entry) = state
            .teams
            .iter_mut()
            .find(|t| t.id.as_deref() == Some(team_id.as_str()))
        {
            *entry = team;
        }
    }
}
