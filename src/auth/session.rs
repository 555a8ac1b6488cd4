use actix_session::Session;

use crate::auth::identity::{Identity, Role};
use crate::errors::AppError;

pub fn get_subject(session: &Session) -> Option<String> {
    session.get::<String>("subject").unwrap_or(None)
}

/// Resolve the authenticated principal from the session claims.
/// Missing claims mean no authenticated session; an unknown role claim is a
/// session-layer fault, not a client error.
pub fn current_identity(session: &Session) -> Result<Identity, AppError> {
    let subject = get_subject(session).ok_or(AppError::Unauthorized)?;

    let role_claim = session
        .get::<String>("role")
        .map_err(|e| AppError::Session(format!("Failed to read role claim: {e}")))?
        .ok_or(AppError::Unauthorized)?;

    let role = Role::parse(&role_claim)
        .ok_or_else(|| AppError::Session(format!("Unknown role claim: {role_claim}")))?;

    Ok(Identity { subject, role })
}

/// Capability check; returns Err(AppError::Forbidden) if the claim does not match.
pub fn require_role(identity: &Identity, role: Role) -> Result<(), AppError> {
    if identity.role == role {
        Ok(())
    } else {
        Err(AppError::Forbidden(role.as_str().to_string()))
    }
}
