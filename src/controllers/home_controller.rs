use actix_web::{get, HttpResponse};

// Liveness probe.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Feedback API running")
}
