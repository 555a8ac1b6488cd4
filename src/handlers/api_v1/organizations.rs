use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::auth::identity::Role;
use crate::auth::session::{current_identity, require_role};
use crate::errors::AppError;
use crate::models::dashboard::{self, DashboardStore};

/// GET /api/v1/organizations/dashboard - Aggregated view for the calling
/// organization: stats, recent interests, recent posts, setup checklist.
///
/// The role check happens here, before the aggregator runs; the aggregator
/// itself takes the resolved identity as a plain argument.
pub async fn dashboard<S: DashboardStore + 'static>(
    store: web::Data<S>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let identity = current_identity(&session)?;
    require_role(&identity, Role::Organization)?;

    let view = dashboard::get_dashboard(store.get_ref(), &identity).await?;

    Ok(HttpResponse::Ok().json(view))
}
