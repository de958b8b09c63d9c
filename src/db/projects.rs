use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Project, SiteStats};

pub async fn list_projects(
    pool: &PgPool,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT *
        FROM projects
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Projects open for donation on the donate page selector.
pub async fn list_in_progress_projects(
    pool: &PgPool,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT *
        FROM projects
        WHERE status = 'in-progress'
        ORDER BY title ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_project_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        r#"
        SELECT *
        FROM projects
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Home page aggregates, folded from current rows on every call.
pub async fn site_stats(
    pool: &PgPool,
) -> Result<SiteStats, sqlx::Error> {
    let projects = list_projects(pool).await?;

    let total_donations = sqlx::query_scalar::<_, i64>(
        r#"SELECT COUNT(*) FROM donations"#,
    )
    .fetch_one(pool)
    .await?;

    Ok(SiteStats::fold(&projects, total_donations))
}
