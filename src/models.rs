// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a POST /api/ask request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub message: String,
}

/// Body of a /api/ask response. The client only ever looks at `reply`;
/// `meta` is populated by the bundled server and tolerated as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskReply {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<AskMeta>,
}

/// Match metadata attached to server replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskMeta {
    pub matched: Option<MatchedQuestion>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedQuestion {
    pub id: i64,
    pub question: String,
}

/// One stored FAQ row. Timestamps are RFC 3339 text, as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FaqEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Logs details of each ask round trip.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiCallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    pub outcome: String,
    pub response_time_ms: u128,
}
