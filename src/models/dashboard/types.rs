use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Organization row, narrowed to the columns the dashboard needs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrganizationRecord {
    pub id: Uuid,
    pub name: String,
    pub verification_status: String,
    pub cover_image_url: Option<String>,
    pub follower_count: i64,
}

/// Aggregate counters for a verified organization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub new_interest_count: i64,
    pub active_opportunity_count: i64,
    pub follower_count: i64,
}

/// One of the most recent volunteer interests across the organization's
/// opportunities, projected for display.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InterestSummary {
    pub interest_id: Uuid,
    pub volunteer_name: String,
    pub volunteer_avatar_url: Option<String>,
    pub opportunity_title: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// One of the most recent posts, carrying the thumbnail of its first media
/// item by display order (null when the post has no media).
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub post_id: Uuid,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Onboarding-completeness flags shown to a verified organization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupChecklist {
    pub has_cover_image: bool,
    pub has_opportunity: bool,
    pub has_post: bool,
}

/// Aggregated dashboard response, built fresh per request and never cached.
///
/// Invariant: `stats`, `recent_interests`, `recent_posts` and
/// `setup_checklist` are all empty/None together (unverified organization)
/// or all populated together (verified). There is no partial state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub organization_id: Uuid,
    pub organization_name: String,
    pub verification_status: String,
    pub stats: Option<DashboardStats>,
    pub recent_interests: Vec<InterestSummary>,
    pub recent_posts: Vec<PostSummary>,
    pub setup_checklist: Option<SetupChecklist>,
}
