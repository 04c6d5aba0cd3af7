use crate::constants::{EMPTY_QUESTION_REPLY, NO_MATCH_REPLY};
use crate::db::Db;
use crate::errors::{AskboxError, AskboxResult};
use crate::matching::{self, MATCH_THRESHOLD};
use crate::models::{AskMeta, AskReply, AskRequest, MatchedQuestion};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};

pub struct ServerState {
    pub db: Db,
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/ask", post(api_ask))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: Arc<ServerState>) -> AskboxResult<()> {
    log::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
        .map_err(|e| AskboxError::api_error(format!("server error: {}", e)))
}

/// Answers one question against the FAQ store. A body that fails to
/// parse counts as an empty message, as does a missing message field.
async fn api_ask(
    State(state): State<Arc<ServerState>>,
    payload: Option<Json<AskRequest>>,
) -> Result<Json<AskReply>, StatusCode> {
    let message = payload.map(|Json(req)| req.message).unwrap_or_default();
    let message = message.trim();

    if message.is_empty() {
        return Ok(Json(AskReply {
            reply: EMPTY_QUESTION_REPLY.to_string(),
            meta: Some(AskMeta {
                matched: None,
                score: 0.0,
            }),
        }));
    }

    let faqs = state.db.list_faqs().await.map_err(|err| {
        log::error!("faq lookup failed: {}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let best = matching::best_match(message, &faqs);
    match best {
        Some((faq, score)) if score >= MATCH_THRESHOLD => {
            log::info!("matched faq {} with score {:.3}", faq.id, score);
            Ok(Json(AskReply {
                reply: faq.answer.clone(),
                meta: Some(AskMeta {
                    matched: Some(MatchedQuestion {
                        id: faq.id,
                        question: faq.question.clone(),
                    }),
                    score: round3(score),
                }),
            }))
        }
        other => Ok(Json(AskReply {
            reply: NO_MATCH_REPLY.to_string(),
            meta: Some(AskMeta {
                matched: None,
                score: round3(other.map(|(_, score)| score).unwrap_or(0.0)),
            }),
        })),
    }
}

fn round3(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

async fn health(State(state): State<Arc<ServerState>>) -> (StatusCode, Json<Value>) {
    match sqlx::query("select 1").execute(&state.db.pool).await {
        Ok(_) => (StatusCode::OK, Json(json!({"status": "ok"}))),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": "error", "detail": err.to_string()})),
        ),
    }
}
