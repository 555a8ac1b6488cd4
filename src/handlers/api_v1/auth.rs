use actix_session::Session;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::auth::identity::Role;
use crate::auth::session::current_identity;
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub subject: String,
    pub role: Role,
}

/// GET /api/v1/auth/me - Echo the authenticated principal.
pub async fn me(session: Session) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&session)?;

    Ok(HttpResponse::Ok().json(MeResponse {
        subject: identity.subject,
        role: identity.role,
    }))
}
