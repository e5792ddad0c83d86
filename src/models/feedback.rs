use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// One stored feedback submission. Serialized camelCase on the wire
/// (`createdAt`); the storage column stays `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub message: String,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}

/// Candidate record as submitted by a client. `rating` is kept as a raw JSON
/// value because clients send it as either a number or a numeric string;
/// validation decides whether it is an integer in range. Missing fields
/// default so the handler can produce its own error messages.
#[derive(Debug, Default, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rating: Value,
}

/// A validated, trimmed submission ready to persist.
#[derive(Debug, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub email: Option<String>,
    pub message: String,
    pub rating: i64,
}

/// List-query parameters. Each field is independently optional; present
/// constraints are ANDed. `rating=` (empty value) counts as absent — that is
/// what the original dashboard sends for "All ratings" — while a non-numeric
/// value is rejected by the extractor.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct FeedbackFilter {
    #[serde(default, deserialize_with = "empty_or_int")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl FeedbackFilter {
    pub fn descending(&self) -> bool {
        self.sort.as_deref() != Some("asc")
    }
}

fn empty_or_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom("rating filter must be an integer")),
    }
}

/// Aggregate statistics over the whole feedback table.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total: i64,
    pub avg_rating: f64,
    pub positive: i64,
    pub negative: i64,
}

/// Raw aggregate row as produced by the stats query.
#[derive(Debug, FromRow)]
pub struct StatsRow {
    pub total: i64,
    pub avg_rating: f64,
    pub positive: i64,
    pub negative: i64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
