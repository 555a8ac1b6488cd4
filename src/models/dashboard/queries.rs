use sqlx::PgPool;
use uuid::Uuid;

use super::store::DashboardStore;
use super::types::{InterestSummary, OrganizationRecord, PostSummary};
use crate::errors::AppError;

/// Postgres-backed implementation of the dashboard query port.
#[derive(Clone)]
pub struct PgDashboardStore {
    pool: PgPool,
}

impl PgDashboardStore {
    pub fn new(pool: PgPool) -> Self {
        PgDashboardStore { pool }
    }
}

impl DashboardStore for PgDashboardStore {
    async fn find_active_org_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<OrganizationRecord>, AppError> {
        let org = sqlx::query_as::<_, OrganizationRecord>(
            "SELECT id, name, verification_status, cover_image_url, follower_count \
             FROM organizations \
             WHERE subject_id = $1 AND is_active",
        )
        .bind(subject)
        .fetch_optional(&self.pool)
        .await?;

        Ok(org)
    }

    async fn active_opportunity_ids(&self, organization_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM opportunities \
             WHERE organization_id = $1 AND status = 'active'",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    async fn opportunity_ids(&self, organization_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM opportunities WHERE organization_id = $1",
        )
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    async fn count_pending_interests(&self, opportunity_ids: &[Uuid]) -> Result<i64, AppError> {
        if opportunity_ids.is_empty() {
            return Ok(0);
        }

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM volunteer_interests \
             WHERE opportunity_id = ANY($1) AND status = 'pending'",
        )
        .bind(opportunity_ids)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn recent_interests(
        &self,
        opportunity_ids: &[Uuid],
        limit: i64,
    ) -> Result<Vec<InterestSummary>, AppError> {
        if opportunity_ids.is_empty() {
            return Ok(Vec::new());
        }

        let items = sqlx::query_as::<_, InterestSummary>(
            "SELECT vi.id AS interest_id, v.display_name AS volunteer_name, \
                    v.avatar_url AS volunteer_avatar_url, o.title AS opportunity_title, \
                    vi.status, vi.created_at \
             FROM volunteer_interests vi \
             JOIN volunteers v ON v.id = vi.volunteer_id \
             JOIN opportunities o ON o.id = vi.opportunity_id \
             WHERE vi.opportunity_id = ANY($1) \
             ORDER BY vi.created_at DESC, vi.id DESC \
             LIMIT $2",
        )
        .bind(opportunity_ids)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn recent_posts(
        &self,
        organization_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PostSummary>, AppError> {
        let items = sqlx::query_as::<_, PostSummary>(
            "SELECT p.id AS post_id, p.title, \
                    (SELECT m.thumbnail_url FROM post_media m \
                      WHERE m.post_id = p.id \
                      ORDER BY m.display_order ASC, m.id ASC \
                      LIMIT 1) AS thumbnail_url, \
                    p.view_count, p.created_at \
             FROM posts p \
             WHERE p.organization_id = $1 \
             ORDER BY p.created_at DESC, p.id DESC \
             LIMIT $2",
        )
        .bind(organization_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn has_opportunity(&self, organization_id: Uuid) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM opportunities WHERE organization_id = $1)",
        )
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn has_post(&self, organization_id: Uuid) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE organization_id = $1)",
        )
        .bind(organization_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}
