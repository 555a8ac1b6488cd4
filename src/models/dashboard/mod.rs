pub mod queries;
pub mod store;
pub mod types;

pub use queries::PgDashboardStore;
pub use store::DashboardStore;
pub use types::{
    DashboardStats, DashboardView, InterestSummary, OrganizationRecord, PostSummary,
    SetupChecklist,
};

use crate::auth::identity::Identity;
use crate::errors::AppError;

/// Most recent interests shown on the dashboard.
const RECENT_INTEREST_LIMIT: i64 = 5;
/// Most recent posts shown on the dashboard.
const RECENT_POST_LIMIT: i64 = 3;

/// Build the dashboard view for the organization owned by `identity`.
///
/// Unverified organizations get the identity fields only; no aggregate
/// queries are issued on that branch. Verified organizations additionally
/// get stats, the recent-interest and recent-post lists, and the setup
/// checklist. Read-only; fails with `OrganizationNotFound` when the subject
/// has no active organization.
pub async fn get_dashboard<S: DashboardStore>(
    store: &S,
    identity: &Identity,
) -> Result<DashboardView, AppError> {
    let org = store
        .find_active_org_by_subject(&identity.subject)
        .await?
        .ok_or(AppError::OrganizationNotFound)?;

    if org.verification_status != "verified" {
        return Ok(DashboardView {
            organization_id: org.id,
            organization_name: org.name,
            verification_status: org.verification_status,
            stats: None,
            recent_interests: Vec::new(),
            recent_posts: Vec::new(),
            setup_checklist: None,
        });
    }

    let active_ids = store.active_opportunity_ids(org.id).await?;
    let new_interest_count = store.count_pending_interests(&active_ids).await?;

    let stats = DashboardStats {
        new_interest_count,
        active_opportunity_count: active_ids.len() as i64,
        follower_count: org.follower_count,
    };

    let all_ids = store.opportunity_ids(org.id).await?;
    let recent_interests = store.recent_interests(&all_ids, RECENT_INTEREST_LIMIT).await?;
    let recent_posts = store.recent_posts(org.id, RECENT_POST_LIMIT).await?;

    let setup_checklist = SetupChecklist {
        has_cover_image: org.cover_image_url.as_deref().map_or(false, |url| !url.is_empty()),
        has_opportunity: store.has_opportunity(org.id).await?,
        has_post: store.has_post(org.id).await?,
    };

    Ok(DashboardView {
        organization_id: org.id,
        organization_name: org.name,
        verification_status: org.verification_status,
        stats: Some(stats),
        recent_interests,
        recent_posts,
        setup_checklist: Some(setup_checklist),
    })
}
