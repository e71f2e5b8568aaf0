//! HTTP surface for the opslag service.
//!
//! Three endpoints, mirroring what the browser UI calls:
//!
//! - `GET /api/persons` — list available dataset identifiers
//! - `GET /api/getData?person=<id>` — resolve and parse one dataset
//! - `POST /api/generatePost` — run a caller-built prompt through the
//!   generation gateway
//!
//! The UI is served from another origin, so the CORS layer is permissive.
//! Handlers share only immutable state and are safe under parallel
//! dispatch.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::OpslagConfig;
use crate::dataset::{DatasetRegistry, ParsedTable, RegistryFetch, TableSource};
use crate::error::{Error, Result};
use crate::llm::{CompletionRequest, LLMProvider, OpenAIProvider};

/// Shared state passed to all request handlers
#[derive(Clone)]
pub struct AppState {
    registry: Arc<DatasetRegistry>,
    config: Arc<OpslagConfig>,
}

impl AppState {
    pub fn new(config: OpslagConfig) -> Self {
        let registry = DatasetRegistry::new(&config.server.data_dir);
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }
}

#[derive(Debug, Serialize)]
struct PersonsResponse {
    persons: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct DataQuery {
    person: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateResponse {
    output: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/persons", get(list_persons))
        .route("/api/getData", get(get_data))
        .route("/api/generatePost", post(generate_post))
        .with_state(state)
        .layer(cors)
}

/// Bind and serve until the process is stopped.
pub async fn run(config: OpslagConfig) -> anyhow::Result<()> {
    let bind = config.server.bind.clone();
    let state = AppState::new(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("server listening on http://{bind}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn list_persons(State(state): State<AppState>) -> Result<Json<PersonsResponse>> {
    let persons = state.registry.list().await?;
    Ok(Json(PersonsResponse { persons }))
}

async fn get_data(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> Result<Json<ParsedTable>> {
    let person = query
        .person
        .filter(|person| !person.is_empty())
        .ok_or_else(|| Error::InvalidInput("no person specified".to_string()))?;

    let table = RegistryFetch::new(&state.registry, person).load().await?;
    Ok(Json(table))
}

async fn generate_post(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<GenerateResponse>> {
    let prompt = body
        .as_ref()
        .and_then(|Json(value)| value.get("prompt"))
        .and_then(|prompt| prompt.as_str())
        .filter(|prompt| !prompt.is_empty())
        .ok_or_else(|| Error::InvalidInput("no prompt provided".to_string()))?
        .to_string();

    let provider = provider_for_key(state.config.resolve_api_key())?;
    let request = CompletionRequest {
        prompt,
        model: state.config.generation.model.clone(),
        temperature: state.config.generation.temperature,
    };

    let response = provider
        .generate(request)
        .await
        .map_err(|err| Error::Upstream(err.to_string()))?;

    Ok(Json(GenerateResponse {
        output: response.content,
    }))
}

/// Fail before any network activity when no credential is configured.
fn provider_for_key(api_key: Option<String>) -> Result<OpenAIProvider> {
    let api_key = api_key
        .ok_or_else(|| Error::Configuration("no OpenAI API key set".to_string()))?;
    Ok(OpenAIProvider::new(api_key))
}
