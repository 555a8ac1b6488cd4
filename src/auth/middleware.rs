use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use crate::errors::ErrorBody;

/// Middleware function that checks for an authenticated session.
/// Rejects with a JSON 401 if no subject claim is present.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let session = req.get_session();
    let has_subject = session.get::<String>("subject").unwrap_or(None).is_some();

    if !has_subject {
        let response = HttpResponse::Unauthorized()
            .json(ErrorBody::new("UNAUTHORIZED", "Authentication required."));
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}
