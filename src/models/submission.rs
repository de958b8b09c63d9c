use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::SubmissionStatus;

/// An organization's proposal to become a funded project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Submission {
    pub id: Uuid,
    pub org_name: String,
    pub proposal_md: String,
    pub budget_usd: f64,
    pub initial_kpis: serde_json::Value,
    pub submitted_by: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionCreate {
    pub org_name: String,
    pub proposal_md: String,
    pub budget_usd: f64,
    pub initial_kpis: serde_json::Value,
    pub submitted_by: String,
}
