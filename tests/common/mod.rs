//! Shared test infrastructure.
//!
//! `MemoryStore` is a fixture-backed implementation of the dashboard query
//! port, mirroring the filters of the Postgres queries over plain vectors.
//! `seed_session` is a test-only route that stamps identity claims into the
//! session cookie, standing in for the external identity layer.

#![allow(dead_code)]

use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use uuid::Uuid;

use causeboard::errors::AppError;
use causeboard::models::dashboard::{
    DashboardStore, InterestSummary, OrganizationRecord, PostSummary,
};

pub const ORG_SUBJECT: &str = "subject-org-1";

/// Fixed timestamp helper: day/hour within July 2026, UTC.
pub fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, day, hour, 0, 0).unwrap()
}

// ---------- Fixture rows ----------

#[derive(Debug, Clone)]
pub struct OrgFixture {
    pub id: Uuid,
    pub subject_id: String,
    pub name: String,
    pub verification_status: String,
    pub cover_image_url: Option<String>,
    pub follower_count: i64,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct VolunteerFixture {
    pub id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpportunityFixture {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct InterestFixture {
    pub id: Uuid,
    pub opportunity_id: Uuid,
    pub volunteer_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostFixture {
    pub id: Uuid,
    pub organization_id: Uuid,
    pub title: String,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MediaFixture {
    pub id: Uuid,
    pub post_id: Uuid,
    pub display_order: i32,
    pub thumbnail_url: String,
}

// ---------- In-memory store ----------

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub organizations: Vec<OrgFixture>,
    pub volunteers: Vec<VolunteerFixture>,
    pub opportunities: Vec<OpportunityFixture>,
    pub interests: Vec<InterestFixture>,
    pub posts: Vec<PostFixture>,
    pub media: Vec<MediaFixture>,
}

impl MemoryStore {
    pub fn seed_org(&mut self, subject: &str, name: &str, verification_status: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.organizations.push(OrgFixture {
            id,
            subject_id: subject.to_string(),
            name: name.to_string(),
            verification_status: verification_status.to_string(),
            cover_image_url: None,
            follower_count: 0,
            is_active: true,
        });
        id
    }

    pub fn org_mut(&mut self, id: Uuid) -> &mut OrgFixture {
        self.organizations
            .iter_mut()
            .find(|o| o.id == id)
            .expect("organization fixture exists")
    }

    pub fn seed_volunteer(&mut self, display_name: &str, avatar_url: Option<&str>) -> Uuid {
        let id = Uuid::new_v4();
        self.volunteers.push(VolunteerFixture {
            id,
            display_name: display_name.to_string(),
            avatar_url: avatar_url.map(String::from),
        });
        id
    }

    pub fn seed_opportunity(&mut self, organization_id: Uuid, title: &str, status: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.opportunities.push(OpportunityFixture {
            id,
            organization_id,
            title: title.to_string(),
            status: status.to_string(),
        });
        id
    }

    pub fn seed_interest(
        &mut self,
        opportunity_id: Uuid,
        volunteer_id: Uuid,
        status: &str,
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.interests.push(InterestFixture {
            id,
            opportunity_id,
            volunteer_id,
            status: status.to_string(),
            created_at,
        });
        id
    }

    pub fn seed_post(
        &mut self,
        organization_id: Uuid,
        title: &str,
        view_count: i64,
        created_at: DateTime<Utc>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.posts.push(PostFixture {
            id,
            organization_id,
            title: title.to_string(),
            view_count,
            created_at,
        });
        id
    }

    pub fn seed_media(&mut self, post_id: Uuid, display_order: i32, thumbnail_url: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.media.push(MediaFixture {
            id,
            post_id,
            display_order,
            thumbnail_url: thumbnail_url.to_string(),
        });
        id
    }
}

impl DashboardStore for MemoryStore {
    async fn find_active_org_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<OrganizationRecord>, AppError> {
        let org = self
            .organizations
            .iter()
            .find(|o| o.subject_id == subject && o.is_active)
            .map(|o| OrganizationRecord {
                id: o.id,
                name: o.name.clone(),
                verification_status: o.verification_status.clone(),
                cover_image_url: o.cover_image_url.clone(),
                follower_count: o.follower_count,
            });
        Ok(org)
    }

    async fn active_opportunity_ids(&self, organization_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(self
            .opportunities
            .iter()
            .filter(|o| o.organization_id == organization_id && o.status == "active")
            .map(|o| o.id)
            .collect())
    }

    async fn opportunity_ids(&self, organization_id: Uuid) -> Result<Vec<Uuid>, AppError> {
        Ok(self
            .opportunities
            .iter()
            .filter(|o| o.organization_id == organization_id)
            .map(|o| o.id)
            .collect())
    }

    async fn count_pending_interests(&self, opportunity_ids: &[Uuid]) -> Result<i64, AppError> {
        Ok(self
            .interests
            .iter()
            .filter(|i| opportunity_ids.contains(&i.opportunity_id) && i.status == "pending")
            .count() as i64)
    }

    async fn recent_interests(
        &self,
        opportunity_ids: &[Uuid],
        limit: i64,
    ) -> Result<Vec<InterestSummary>, AppError> {
        let mut rows: Vec<&InterestFixture> = self
            .interests
            .iter()
            .filter(|i| opportunity_ids.contains(&i.opportunity_id))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit as usize);

        let items = rows
            .into_iter()
            .map(|i| {
                let volunteer = self
                    .volunteers
                    .iter()
                    .find(|v| v.id == i.volunteer_id)
                    .expect("interest references a seeded volunteer");
                let opportunity = self
                    .opportunities
                    .iter()
                    .find(|o| o.id == i.opportunity_id)
                    .expect("interest references a seeded opportunity");
                InterestSummary {
                    interest_id: i.id,
                    volunteer_name: volunteer.display_name.clone(),
                    volunteer_avatar_url: volunteer.avatar_url.clone(),
                    opportunity_title: opportunity.title.clone(),
                    status: i.status.clone(),
                    created_at: i.created_at,
                }
            })
            .collect();

        Ok(items)
    }

    async fn recent_posts(
        &self,
        organization_id: Uuid,
        limit: i64,
    ) -> Result<Vec<PostSummary>, AppError> {
        let mut rows: Vec<&PostFixture> = self
            .posts
            .iter()
            .filter(|p| p.organization_id == organization_id)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        rows.truncate(limit as usize);

        let items = rows
            .into_iter()
            .map(|p| {
                let mut media: Vec<&MediaFixture> =
                    self.media.iter().filter(|m| m.post_id == p.id).collect();
                media.sort_by(|a, b| {
                    a.display_order
                        .cmp(&b.display_order)
                        .then(a.id.cmp(&b.id))
                });
                PostSummary {
                    post_id: p.id,
                    title: p.title.clone(),
                    thumbnail_url: media.first().map(|m| m.thumbnail_url.clone()),
                    view_count: p.view_count,
                    created_at: p.created_at,
                }
            })
            .collect();

        Ok(items)
    }

    async fn has_opportunity(&self, organization_id: Uuid) -> Result<bool, AppError> {
        Ok(self
            .opportunities
            .iter()
            .any(|o| o.organization_id == organization_id))
    }

    async fn has_post(&self, organization_id: Uuid) -> Result<bool, AppError> {
        Ok(self.posts.iter().any(|p| p.organization_id == organization_id))
    }
}

// ---------- Session seeding ----------

#[derive(Debug, Deserialize)]
pub struct SessionSeed {
    pub subject: String,
    pub role: String,
}

/// POST /test/session - insert identity claims into the session cookie.
pub async fn seed_session(session: Session, body: web::Json<SessionSeed>) -> HttpResponse {
    session
        .insert("subject", body.subject.clone())
        .expect("insert subject claim");
    session
        .insert("role", body.role.clone())
        .expect("insert role claim");
    HttpResponse::Ok().finish()
}
