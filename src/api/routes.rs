//! HTTP route handlers for Axum.

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    advice::{profile::KNOWN_CONDITIONS, UserProfile},
    api::types::{AskReply, AskRequest, ConditionOption, SessionCreated, UploadReply, UploadRequest},
    dialogue::{render, Session, Turn},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, String)>;

pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreated>), (StatusCode, String)> {
    let mut sessions = state.sessions.write().await;
    let evicted = evict_idle(&mut sessions, state.settings.session_idle());
    if evicted > 0 {
        info!(evicted, open = sessions.len(), "dropped idle sessions");
    }
    if sessions.len() >= state.settings.max_sessions {
        warn!(open = sessions.len(), "session limit reached");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            format!("session limit of {} reached", state.settings.max_sessions),
        ));
    }

    let session = Session::new((*state.base_corpus).clone(), state.settings.policy);
    let mut session_id = new_session_id();
    while sessions.contains_key(&session_id) {
        session_id = new_session_id();
    }
    sessions.insert(session_id.clone(), Arc::new(Mutex::new(session)));
    info!(%session_id, open = sessions.len(), "session created");
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

pub async fn delete_session(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> StatusCode {
    match state.sessions.write().await.remove(&session_id) {
        Some(_) => StatusCode::NO_CONTENT,
        None => StatusCode::NOT_FOUND,
    }
}

pub async fn get_profile(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<UserProfile> {
    let session = lookup(&state, &session_id).await?;
    let profile = session.lock().await.profile.clone();
    Ok(Json(profile))
}

pub async fn put_profile(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> ApiResult<UserProfile> {
    profile.validate().map_err(|err| {
        warn!(%session_id, error = %err, "rejected profile");
        (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
    })?;
    let session = lookup(&state, &session_id).await?;
    session.lock().await.set_profile(profile.clone());
    Ok(Json(profile))
}

pub async fn ask(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> ApiResult<AskReply> {
    let chars = request.text.chars().count();
    if chars > state.settings.max_query_chars {
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            format!(
                "question has {chars} characters; the limit is {}",
                state.settings.max_query_chars
            ),
        ));
    }
    let session = lookup(&state, &session_id).await?;
    let response = with_session(session, move |session| session.respond(&request.text)).await?;
    let text = render::render(&response);
    Ok(Json(AskReply { response, text }))
}

pub async fn upload_qna(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
    Json(upload): Json<UploadRequest>,
) -> ApiResult<UploadReply> {
    let session = lookup(&state, &session_id).await?;
    let reply = with_session(session, move |session| UploadReply {
        accepted: session.ingest(&upload.file_name, upload.content.as_bytes()),
        corpus_size: session.corpus.len(),
    })
    .await?;
    Ok(Json(reply))
}

pub async fn history(
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Vec<Turn>> {
    let session = lookup(&state, &session_id).await?;
    let turns = session.lock().await.history().to_vec();
    Ok(Json(turns))
}

pub async fn list_conditions() -> Json<Vec<ConditionOption>> {
    Json(
        KNOWN_CONDITIONS
            .iter()
            .map(|&(code, label)| ConditionOption { code, label })
            .collect(),
    )
}

async fn lookup(
    state: &AppState,
    session_id: &str,
) -> Result<Arc<Mutex<Session>>, (StatusCode, String)> {
    state
        .sessions
        .read()
        .await
        .get(session_id)
        .cloned()
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("unknown session {session_id}")))
}

/// Run CPU-bound session work on the blocking pool while holding its lock.
async fn with_session<T, F>(session: Arc<Mutex<Session>>, work: F) -> Result<T, (StatusCode, String)>
where
    F: FnOnce(&mut Session) -> T + Send + 'static,
    T: Send + 'static,
{
    let mut guard = session.lock_owned().await;
    tokio::task::spawn_blocking(move || work(&mut *guard))
        .await
        .map_err(|err| (StatusCode::INTERNAL_SERVER_ERROR, format!("session worker failed: {err}")))
}

/// Drop sessions idle for at least `idle`. Sessions busy with a request stay.
fn evict_idle(sessions: &mut HashMap<String, Arc<Mutex<Session>>>, idle: Duration) -> usize {
    let before = sessions.len();
    sessions.retain(|_, session| match session.try_lock() {
        Ok(session) => session.idle_for() < idle,
        Err(_) => true,
    });
    before - sessions.len()
}

fn new_session_id() -> String {
    format!("{:016x}", rand::random::<u64>())
}
