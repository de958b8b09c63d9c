use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Story {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body_md: String,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryCreate {
    pub user_id: Uuid,
    pub title: String,
    pub body_md: String,
}

/// Public listing row: an approved story with its author's display name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoryWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub body_md: String,
    pub created_at: DateTime<Utc>,
    pub display_name: Option<String>,
}

impl StoryWithAuthor {
    pub fn author_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Anonymous")
    }
}
