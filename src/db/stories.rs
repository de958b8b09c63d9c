use sqlx::PgPool;

use crate::common::StoryError;
use crate::models::{Story, StoryCreate, StoryWithAuthor};

/// Only moderated stories are publicly listable.
pub async fn list_approved_stories(
    pool: &PgPool,
) -> Result<Vec<StoryWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, StoryWithAuthor>(
        r#"
        SELECT
            s.id,
            s.title,
            s.body_md,
            s.created_at,
            p.display_name
        FROM stories s
        LEFT JOIN profiles p ON p.id = s.user_id
        WHERE s.approved
        ORDER BY s.created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// New stories always enter moderation: approved = false.
pub async fn create_story(
    pool: &PgPool,
    data: &StoryCreate,
) -> Result<Story, StoryError> {
    let title = data.title.trim();
    let body = data.body_md.trim();

    if title.is_empty() || body.is_empty() {
        return Err(StoryError::MissingFields);
    }

    let story = sqlx::query_as::<_, Story>(
        r#"
        INSERT INTO stories (user_id, title, body_md, approved)
        VALUES ($1, $2, $3, false)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(title)
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(story)
}
