use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::auth::{self, AdminCredentials};
use crate::error::ApiError;

// Admin area. Gated by Basic auth only when both credentials are configured;
// with the gate disabled every request passes through.
#[get("/api/admin{tail:.*}")]
pub async fn admin_area(
    req: HttpRequest,
    credentials: web::Data<Option<AdminCredentials>>,
) -> Result<HttpResponse, ApiError> {
    auth::verify_basic_auth(&req, credentials.get_ref())?;

    Ok(HttpResponse::Ok().json(json!({
        "ok": true,
        "message": "Admin area"
    })))
}
