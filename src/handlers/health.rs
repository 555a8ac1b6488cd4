use actix_web::HttpResponse;

/// GET /health - Liveness probe, no authentication.
pub async fn check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}
