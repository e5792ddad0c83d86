use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::feedback::{
    round2, FeedbackFilter, FeedbackRecord, FeedbackRequest, NewFeedback, StatsRow, StatsSummary,
};

/// Hard cap on list results; a safeguard against unbounded result sets, not
/// pagination.
const LIST_LIMIT: i64 = 1000;

// Submit new feedback
#[post("/api/feedback")]
pub async fn create_feedback(
    pool: web::Data<SqlitePool>,
    data: web::Json<FeedbackRequest>,
) -> Result<HttpResponse, ApiError> {
    let new = validate_request(data.into_inner())?;

    let record = FeedbackRecord {
        id: Uuid::new_v4().to_string(),
        name: new.name,
        email: new.email,
        message: new.message,
        rating: new.rating,
        created_at: Utc::now(),
    };

    sqlx::query(
        "INSERT INTO feedback (id, name, email, message, rating, created_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&record.id)
    .bind(&record.name)
    .bind(&record.email)
    .bind(&record.message)
    .bind(record.rating)
    .bind(record.created_at)
    .execute(pool.get_ref())
    .await?;

    log::info!("Feedback {} stored (rating {})", record.id, record.rating);
    Ok(HttpResponse::Created().json(record))
}

// Fetch feedback, optionally filtered by exact rating and a case-insensitive
// substring over name/email/message.
#[get("/api/feedback")]
pub async fn list_feedback(
    pool: web::Data<SqlitePool>,
    query: web::Query<FeedbackFilter>,
) -> Result<HttpResponse, ApiError> {
    let filter = query.into_inner();

    let mut conditions: Vec<&str> = Vec::new();
    if filter.rating.is_some() {
        conditions.push("rating = ?");
    }
    if filter.q.is_some() {
        conditions.push(
            "(LOWER(name) LIKE ? OR LOWER(COALESCE(email, '')) LIKE ? OR LOWER(message) LIKE ?)",
        );
    }

    let where_sql = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    let order = if filter.descending() { "DESC" } else { "ASC" };

    let sql = format!(
        "SELECT id, name, email, message, rating, created_at FROM feedback \
         {where_sql} ORDER BY created_at {order} LIMIT {LIST_LIMIT}"
    );

    let mut q = sqlx::query_as::<_, FeedbackRecord>(&sql);
    if let Some(rating) = filter.rating {
        q = q.bind(rating);
    }
    if let Some(needle) = &filter.q {
        let pattern = format!("%{}%", needle.to_lowercase());
        q = q.bind(pattern.clone()).bind(pattern.clone()).bind(pattern);
    }

    let records = q.fetch_all(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

// Aggregate statistics over the entire collection; list filters do not apply.
#[get("/api/feedback/stats")]
pub async fn feedback_stats(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let row: StatsRow = sqlx::query_as(
        "SELECT COUNT(*) AS total, \
                COALESCE(AVG(rating), 0.0) AS avg_rating, \
                COALESCE(SUM(CASE WHEN rating >= 4 THEN 1 ELSE 0 END), 0) AS positive, \
                COALESCE(SUM(CASE WHEN rating < 3 THEN 1 ELSE 0 END), 0) AS negative \
         FROM feedback",
    )
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(StatsSummary {
        total: row.total,
        avg_rating: round2(row.avg_rating),
        positive: row.positive,
        negative: row.negative,
    }))
}

fn validate_request(payload: FeedbackRequest) -> Result<NewFeedback, ApiError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::validation("Name is required"));
    }

    let message = payload.message.trim().to_string();
    if message.is_empty() {
        return Err(ApiError::validation("Message is required"));
    }

    let rating = parse_rating(&payload.rating)
        .filter(|r| (1..=5).contains(r))
        .ok_or_else(|| ApiError::validation("Rating must be between 1 and 5"))?;

    let email = payload
        .email
        .as_deref()
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string);

    Ok(NewFeedback {
        name,
        email,
        message,
        rating,
    })
}

/// Accepts a JSON number or numeric string, but only integer values: the
/// record's rating is declared an integer, so 4.5 is out even though it sits
/// inside the range.
fn parse_rating(value: &Value) -> Option<i64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    if !parsed.is_finite() || parsed.fract() != 0.0 {
        return None;
    }
    Some(parsed as i64)
}
