use uuid::Uuid;

use super::types::{InterestSummary, OrganizationRecord, PostSummary};
use crate::errors::AppError;

/// Query port for the dashboard view.
///
/// Each method is one named read with its filters spelled out, so the
/// aggregator composes plain data with no hidden joins and every query can
/// be exercised on its own against fixture data.
#[allow(async_fn_in_trait)]
pub trait DashboardStore {
    /// The organization owned by the given external subject, if one exists
    /// with `is_active = true`.
    async fn find_active_org_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<OrganizationRecord>, AppError>;

    /// Ids of the organization's opportunities with status `active`.
    async fn active_opportunity_ids(&self, organization_id: Uuid) -> Result<Vec<Uuid>, AppError>;

    /// Ids of all the organization's opportunities, regardless of status.
    async fn opportunity_ids(&self, organization_id: Uuid) -> Result<Vec<Uuid>, AppError>;

    /// Number of `pending` interests referencing any of the given opportunities.
    async fn count_pending_interests(&self, opportunity_ids: &[Uuid]) -> Result<i64, AppError>;

    /// Latest interests referencing any of the given opportunities, ordered
    /// by creation time descending, id descending on ties.
    async fn recent_interests(
        &self,
        opportunity_ids: &[Uuid],
        limit: i64,
    ) -> Result<Vec<InterestSummary>, AppError>;

    /// Latest posts for the organization, same ordering as `recent_interests`.
    async fn recent_posts(
        &self,
        organization_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PostSummary>, AppError>;

    /// Whether the organization has at least one opportunity (any status).
    async fn has_opportunity(&self, organization_id: Uuid) -> Result<bool, AppError>;

    /// Whether the organization has at least one post.
    async fn has_post(&self, organization_id: Uuid) -> Result<bool, AppError>;
}
