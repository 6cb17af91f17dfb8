use crate::config::GeminiOptions;
use crate::prelude::{eprintln, *};
use crate::storyteller::{Storyteller, TextGenerator};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bedtime_core::slot::{StorySlot, Ticket};
use bedtime_core::story::{IllustratedStory, StoryRequest, DEFAULT_CHILD_NAME};
use bedtime_core::topics::{presets, Preset};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tower_http::cors::{Any, CorsLayer};

const GENERATION_FAILED: &str = "Failed to generate story";
const SUPERSEDED: &str = "superseded by a newer story request";

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the story API over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, env = "BEDTIME_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "BEDTIME_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Child name used when a request does not name one
    #[arg(short, long, env = "BEDTIME_CHILD_NAME", default_value = DEFAULT_CHILD_NAME)]
    pub name: String,

    #[clap(flatten)]
    pub gemini: GeminiOptions,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let client = app.gemini.client()?;
    let addr = format!("{}:{}", app.host, app.port);

    if global.verbose {
        eprintln!("Gemini endpoint: {}", client.endpoint());
        eprintln!("Model: {}", client.model());
        eprintln!("Story API listening on http://{}", addr);
        eprintln!("Story endpoint: http://{}/api/story", addr);
    }

    let state = Arc::new(ServerState::new(Storyteller::new(client), app.name));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Listening on http://{addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

/// Shared server state: the storyteller and the single current-story slot.
pub struct ServerState<G> {
    storyteller: Storyteller<G>,
    slot: Mutex<StorySlot>,
    generation: watch::Sender<u64>,
    default_child_name: String,
}

impl<G: TextGenerator> ServerState<G> {
    pub fn new(storyteller: Storyteller<G>, default_child_name: impl Into<String>) -> Self {
        Self {
            storyteller,
            slot: Mutex::new(StorySlot::new()),
            generation: watch::channel(0).0,
            default_child_name: default_child_name.into(),
        }
    }

    fn slot(&self) -> MutexGuard<'_, StorySlot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Start a new request and tell in-flight ones they are stale.
    fn begin(&self) -> Ticket {
        let mut slot = self.slot();
        let ticket = slot.begin();
        self.generation.send_replace(slot.generation());
        ticket
    }

    fn clear(&self) {
        let mut slot = self.slot();
        slot.clear();
        self.generation.send_replace(slot.generation());
    }
}

/// Resolves once a newer request than `ticket` has started or the slot was cleared.
async fn superseded(mut generation: watch::Receiver<u64>, ticket: Ticket) {
    loop {
        let current = *generation.borrow_and_update();
        if current != ticket.generation() {
            return;
        }
        if generation.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

pub fn router<G: TextGenerator + 'static>(state: Arc<ServerState<G>>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/story", post(create_story::<G>))
        .route(
            "/api/story/current",
            get(current_story::<G>).delete(clear_story::<G>),
        )
        .route("/api/topics", get(list_topics))
        .layer(cors)
        .with_state(state)
}

/// Body of `POST /api/story`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStory {
    pub topic: String,
    #[serde(default)]
    pub child_name: Option<String>,
}

/// Envelope of every story response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    fn with_status(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

async fn create_story<G: TextGenerator + 'static>(
    State(state): State<Arc<ServerState<G>>>,
    body: Result<Json<CreateStory>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            log::warn!("Rejected story request: {rejection}");
            return ApiResponse::<IllustratedStory>::fail(rejection.body_text())
                .with_status(StatusCode::BAD_REQUEST);
        }
    };

    let topic = body.topic.trim();
    if topic.is_empty() {
        return ApiResponse::<IllustratedStory>::fail("topic must not be empty")
            .with_status(StatusCode::BAD_REQUEST);
    }

    let child_name = body
        .child_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(state.default_child_name.as_str());
    let request = StoryRequest::new(topic).with_child_name(child_name);

    let ticket = state.begin();
    let stale = superseded(state.generation.subscribe(), ticket);
    let seed: u64 = rand::random();

    let outcome = tokio::select! {
        result = crate::story::tell_story_data(&state.storyteller, &request, seed) => Some(result),
        _ = stale => None,
    };

    match outcome {
        None => {
            log::warn!("Story request {} abandoned: {SUPERSEDED}", ticket.generation());
            ApiResponse::<IllustratedStory>::fail(SUPERSEDED).with_status(StatusCode::CONFLICT)
        }
        Some(Ok(story)) => {
            let committed = state.slot().commit(ticket, story.clone());
            match committed {
                Ok(()) => ApiResponse::ok(story).with_status(StatusCode::OK),
                Err(e) => {
                    log::warn!("Dropping story: {e}");
                    ApiResponse::<IllustratedStory>::fail(SUPERSEDED)
                        .with_status(StatusCode::CONFLICT)
                }
            }
        }
        Some(Err(e)) => {
            log::error!("Error generating story: {e}");
            ApiResponse::<IllustratedStory>::fail(GENERATION_FAILED)
                .with_status(StatusCode::BAD_GATEWAY)
        }
    }
}

async fn current_story<G: TextGenerator + 'static>(
    State(state): State<Arc<ServerState<G>>>,
) -> Response {
    let current = state.slot().current().cloned();
    match current {
        Some(story) => ApiResponse::ok(story).with_status(StatusCode::OK),
        None => ApiResponse::<IllustratedStory>::fail("no story yet")
            .with_status(StatusCode::NOT_FOUND),
    }
}

async fn clear_story<G: TextGenerator + 'static>(
    State(state): State<Arc<ServerState<G>>>,
) -> StatusCode {
    state.clear();
    StatusCode::NO_CONTENT
}

async fn list_topics() -> Json<&'static [Preset]> {
    Json(presets())
}
