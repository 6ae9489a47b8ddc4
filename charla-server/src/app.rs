use crate::session::SessionManager;
use crate::ws_handler::ws_handler;
use axum::routing::get;
use axum::{Json, Router, extract::State};
use charla_core::IceServerConfig;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionManager,
    pub ice_servers: Vec<IceServerConfig>,
}

impl AppState {
    pub fn new(ice_servers: Vec<IceServerConfig>) -> Self {
        Self {
            sessions: SessionManager::new(),
            ice_servers,
        }
    }
}

/// Hub router: the signaling WebSocket plus the ICE server list clients
/// use to configure their media channel.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/ice-config", get(ice_config))
        .layer(cors)
        .with_state(state)
}

async fn ice_config(State(state): State<AppState>) -> Json<Vec<IceServerConfig>> {
    Json(state.ice_servers.clone())
}
