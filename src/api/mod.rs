//! HTTP layer exposing isolated conversation sessions.

pub mod routes;
pub mod types;

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use tokio::{
    net::TcpListener,
    sync::{Mutex, RwLock},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Settings,
    data::Corpus,
    dialogue::Session,
};

/// Each session sits behind its own lock, so a Q&A merge and a question on
/// the same session are serialised while other sessions proceed.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub base_corpus: Arc<Corpus>,
    pub sessions: Arc<RwLock<HashMap<String, Arc<Mutex<Session>>>>>,
}

impl AppState {
    pub fn new(settings: Settings, base_corpus: Corpus) -> Self {
        Self {
            settings,
            base_corpus: Arc::new(base_corpus),
            sessions: Arc::default(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(routes::create_session))
        .route("/sessions/:session_id", axum::routing::delete(routes::delete_session))
        .route(
            "/sessions/:session_id/profile",
            get(routes::get_profile).put(routes::put_profile),
        )
        .route("/sessions/:session_id/ask", post(routes::ask))
        .route("/sessions/:session_id/qna", post(routes::upload_qna))
        .route("/sessions/:session_id/history", get(routes::history))
        .route("/conditions", get(routes::list_conditions))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Bind and serve until ctrl-c; open sessions are dropped on shutdown.
pub async fn serve(settings: Settings, base_corpus: Corpus, host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    let app = router(AppState::new(settings, base_corpus));
    info!(%addr, "medqa-assistant API listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down");
        })
        .await?;
    Ok(())
}
