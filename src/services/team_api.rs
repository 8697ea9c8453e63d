//! Remote CRUD operations against the team collection endpoint.
//!
//! Each operation logs its outcome and returns `Result<_, ApiError>`; the
//! caller decides how to react. State effects on success:
//!
//! - list: replaces the whole mirrored collection
//! - read one: installs the re-shaped record as the current team
//! - create: clears the current team, then installs the server's record
//! - update: applies the server's echoed record to both state views
//! - delete: prunes the collection, clearing the current team if it matched
//!
//! On failure the store is left exactly as it was.

use reqwest::{Response, StatusCode};
use tracing::{error, info, warn};

use crate::dto::{PokemonTeam, TeamRecord};
use crate::error::ApiError;
use crate::services::team_store::TeamStore;

fn check_status(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status if !status.is_success() => Err(ApiError::Server {
            status: status.as_u16(),
        }),
        _ => Ok(response),
    }
}

impl TeamStore {
    /// GET the whole team collection and mirror it locally.
    ///
    /// Concurrent calls are allowed; a stale response is still returned to
    /// its caller but never overwrites the result a newer fetch has already
    /// written back.
    pub async fn api_get_teams(&self) -> Result<Vec<PokemonTeam>, ApiError> {
        info!("Fetching teams.");
        let generation = self.begin_list_fetch();

        let result = async {
            let response = self
                .client()
                .get(self.config().teams_url())
                .send()
                .await?;
            let records = check_status(response)?
                .json::<Vec<TeamRecord>>()
                .await?;
            Ok::<_, ApiError>(records)
        }
        .await;

        match result {
            Ok(records) => {
                let teams: Vec<PokemonTeam> =
                    records.into_iter().map(PokemonTeam::from).collect();
                // Compare and write back under one lock; a newer fetch that
                // already applied its result must not be overwritten.
                let mut state = self.state();
                if generation > state.applied_list_generation {
                    state.applied_list_generation = generation;
                    state.teams = teams.clone();
                } else {
                    warn!("Discarding stale team list fetch.");
                }
                Ok(teams)
            }
            Err(e) => {
                error!("Failed to fetch teams: {}", e);
                Err(e)
            }
        }
    }

    /// GET a single team, re-shape it, and install it as the current team.
    pub async fn api_get_team(&self, team_id: &str) -> Result<PokemonTeam, ApiError> {
        info!("Fetching team {}.", team_id);

        let result = async {
            let response = self
                .client()
                .get(self.config().team_url(team_id))
                .send()
                .await?;
            let record = check_status(response)?
                .json::<TeamRecord>()
                .await?;
            Ok::<_, ApiError>(record)
        }
        .await;

        match result {
            Ok(record) => {
                let team = PokemonTeam::from(record);
                self.state().current_team = Some(team.clone());
                Ok(team)
            }
            Err(e) => {
                error!("Failed to fetch team {}: {}", team_id, e);
                Err(e)
            }
        }
    }

    /// POST a new team. On success the server's record, carrying the assigned
    /// id and timestamps, replaces the current team.
    pub async fn api_post_team(&self, team: &PokemonTeam) -> Result<PokemonTeam, ApiError> {
        info!("Creating a team {}.", team.name);

        let result = async {
            let response = self
                .client()
                .post(self.config().teams_url())
                .json(team)
                .send()
                .await?;
            let record = check_status(response)?
                .json::<TeamRecord>()
                .await?;
            Ok::<_, ApiError>(record)
        }
        .await;

        match result {
            Ok(record) => {
                let created = PokemonTeam::from(record);
                // The in-progress draft is done; the persisted record takes
                // its place.
                self.state().current_team = Some(created.clone());
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create team {}: {}", team.name, e);
                Err(e)
            }
        }
    }

    /// PUT the full team payload at its id. On success the server's echoed
    /// record, not the submitted payload, is applied via `update_teams`, so
    /// server-assigned fields such as `updatedAt` never drift.
    pub async fn api_put_team(&self, team: &PokemonTeam) -> Result<PokemonTeam, ApiError> {
        let Some(team_id) = team.id.as_deref() else {
            error!("Refusing to update a team that was never persisted.");
            return Err(ApiError::Unknown("team has no id".to_string()));
        };
        info!("Updating team {}.", team_id);

        let result = async {
            let response = self
                .client()
                .put(self.config().team_url(team_id))
                .json(team)
                .send()
                .await?;
            let record = check_status(response)?
                .json::<TeamRecord>()
                .await?;
            Ok::<_, ApiError>(record)
        }
        .await;

        match result {
            Ok(record) => {
                let updated = PokemonTeam::from(record);
                self.update_teams(updated.clone());
                Ok(updated)
            }
            Err(e) => {
                error!("Failed to update team {}: {}", team_id, e);
                Err(e)
            }
        }
    }

    /// DELETE a team by id, pruning the mirrored collection and clearing the
    /// current team when it was the one deleted.
    pub async fn api_delete_team(&self, team_id: &str) -> Result<(), ApiError> {
        info!("Deleting the team {}.", team_id);

        let result = async {
            let response = self
                .client()
                .delete(self.config().team_url(team_id))
                .send()
                .await?;
            check_status(response)?;
            Ok::<_, ApiError>(())
        }
        .await;

        match result {
            Ok(()) => {
                let mut state = self.state();
                state.teams.retain(|t| t.id.as_deref() != Some(team_id));
                if state
                    .current_team
                    .as_ref()
                    .is_some_and(|current| current.id.as_deref() == Some(team_id))
                {
                    state.current_team = None;
                }
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete team {}: {}", team_id, e);
                Err(e)
            }
        }
    }
}
