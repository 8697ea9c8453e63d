#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use serde_json::{Value, json};
use tokio::sync::Notify;

use poketeam::{ApiConfig, Pokemon, PokemonTeam, PokemonType, TeamStore};

/// In-memory team collection backing the fixture server.
#[derive(Clone, Default)]
pub struct MockTeamDb {
    inner: Arc<Mutex<MockTeamDbInner>>,
}

#[derive(Default)]
struct MockTeamDbInner {
    teams: Vec<Value>,
    next_id: u64,
    fail_list: bool,
    list_latch: Option<ListLatch>,
}

struct ListLatch {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl MockTeamDb {
    pub fn seed(&self, record: Value) {
        self.inner.lock().unwrap().teams.push(record);
    }

    /// Makes every subsequent `GET /teams` respond with a 500.
    pub fn set_fail_list(&self, fail: bool) {
        self.inner.lock().unwrap().fail_list = fail;
    }

    pub fn team_count(&self) -> usize {
        self.inner.lock().unwrap().teams.len()
    }

    pub fn rename_team(&self, team_id: &str, name: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(team) = inner
            .teams
            .iter_mut()
            .find(|t| t["id"].as_str() == Some(team_id))
        {
            team["name"] = json!(name);
        }
    }

    /// Holds the next `GET /teams` response open. The first notify fires once
    /// the request has snapshotted the collection; the response is only sent
    /// after the second is notified.
    pub fn hold_next_list(&self) -> (Arc<Notify>, Arc<Notify>) {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());
        self.inner.lock().unwrap().list_latch = Some(ListLatch {
            entered: entered.clone(),
            release: release.clone(),
        });
        (entered, release)
    }
}

pub struct MockApi {
    pub base_url: String,
    pub db: MockTeamDb,
}

/// Serves the five team endpoints on an ephemeral local port.
pub async fn spawn_mock_api() -> MockApi {
    let db = MockTeamDb::default();

    let app = Router::new()
        .route("/teams", get(get_teams).post(create_team))
        .route(
            "/teams/{id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .layer(Extension(db.clone()));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockApi { base_url, db }
}

pub fn store_for(api: &MockApi) -> TeamStore {
    TeamStore::new(ApiConfig::new(api.base_url.clone()))
}

async fn get_teams(Extension(db): Extension<MockTeamDb>) -> impl IntoResponse {
    // Snapshot under the lock, then release it before any latch wait.
    let (snapshot, latch) = {
        let mut inner = db.inner.lock().unwrap();
        if inner.fail_list {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "simulated failure" })),
            );
        }
        (Value::Array(inner.teams.clone()), inner.list_latch.take())
    };
    if let Some(latch) = latch {
        latch.entered.notify_one();
        latch.release.notified().await;
    }
    (StatusCode::OK, Json(snapshot))
}

async fn get_team(
    Extension(db): Extension<MockTeamDb>,
    Path(team_id): Path<String>,
) -> impl IntoResponse {
    let inner = db.inner.lock().unwrap();
    match inner
        .teams
        .iter()
        .find(|t| t["id"].as_str() == Some(team_id.as_str()))
    {
        Some(team) => (StatusCode::OK, Json(team.clone())),
        None => (StatusCode::NOT_FOUND, Json(json!({}))),
    }
}

async fn create_team(
    Extension(db): Extension<MockTeamDb>,
    Json(mut body): Json<Value>,
) -> impl IntoResponse {
    let mut inner = db.inner.lock().unwrap();
    inner.next_id += 1;
    let now = Utc::now().to_rfc3339();
    body["id"] = json!(inner.next_id.to_string());
    body["createdAt"] = json!(now);
    body["updatedAt"] = json!(now);
    inner.teams.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update_team(
    Extension(db): Extension<MockTeamDb>,
    Path(team_id): Path<String>,
    Json(mut body): Json<Value>,
) -> impl IntoResponse {
    let mut inner = db.inner.lock().unwrap();
    let Some(existing) = inner
        .teams
        .iter_mut()
        .find(|t| t["id"].as_str() == Some(team_id.as_str()))
    else {
        return (StatusCode::NOT_FOUND, Json(json!({})));
    };
    body["id"] = json!(team_id);
    body["createdAt"] = existing["createdAt"].clone();
    body["updatedAt"] = json!(Utc::now().to_rfc3339());
    *existing = body.clone();
    (StatusCode::OK, Json(body))
}

async fn delete_team(
    Extension(db): Extension<MockTeamDb>,
    Path(team_id): Path<String>,
) -> impl IntoResponse {
    let mut inner = db.inner.lock().unwrap();
    let before = inner.teams.len();
    inner
        .teams
        .retain(|t| t["id"].as_str() != Some(team_id.as_str()));
    if inner.teams.len() == before {
        (StatusCode::NOT_FOUND, Json(json!({})))
    } else {
        (StatusCode::OK, Json(json!({})))
    }
}

pub fn sample_type(name: &str) -> PokemonType {
    PokemonType {
        name: name.to_string(),
        image: format!("https://img.example/types/{}.png", name),
    }
}

pub fn sample_pokemon(id: i64, pokedex_id: i64, name: &str, type_name: &str) -> Pokemon {
    Pokemon {
        id,
        pokedex_id,
        name: name.to_string(),
        image: format!("https://img.example/{}.png", name),
        sprite: format!("https://img.example/sprites/{}.png", name),
        types: vec![sample_type(type_name)],
    }
}

pub fn sample_team(name: &str) -> PokemonTeam {
    PokemonTeam {
        name: name.to_string(),
        ..PokemonTeam::default()
    }
}

pub fn saved_team(id: &str, name: &str) -> PokemonTeam {
    PokemonTeam {
        id: Some(id.to_string()),
        name: name.to_string(),
        ..PokemonTeam::default()
    }
}
