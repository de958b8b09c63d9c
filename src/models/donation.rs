use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded donation. `project_id` of None means the general fund.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    pub user_id: Uuid,
    pub amount_usd: f64,
    pub tx_ref: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationCreate {
    pub project_id: Option<Uuid>,
    pub user_id: Uuid,
    pub amount_usd: f64,
    pub tx_ref: String,
}

/// Dashboard row: a donation joined with its project title.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DonationWithProject {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    pub amount_usd: f64,
    pub tx_ref: String,
    pub created_at: DateTime<Utc>,
    pub project_title: Option<String>,
}

impl DonationWithProject {
    pub fn target_label(&self) -> &str {
        self.project_title.as_deref().unwrap_or("General Fund")
    }
}
