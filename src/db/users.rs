use sqlx::PgPool;
use uuid::Uuid;

use crate::common::AuthError;
use crate::models::{Profile, User, UserCreate};

/// Creates the identity and its profile in one transaction. Either both
/// rows exist afterwards or neither does; a profile can never be
/// orphaned from its user.
pub async fn create_user_with_profile(
    pool: &PgPool,
    data: &UserCreate,
) -> Result<User, AuthError> {
    let mut tx = pool.begin().await?;

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash) VALUES ($1, $2)
        ON CONFLICT (email) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(&data.email)
    .bind(&data.password_hash)
    .fetch_optional(&mut *tx)
    .await?;

    let user = match user {
        Some(u) => u,
        None => {
            return Err(AuthError::AlreadyExists(data.email.clone()));
        }
    };

    sqlx::query(
        r#"
        INSERT INTO profiles (id, display_name, role)
        VALUES ($1, $2, 'user')
        "#,
    )
    .bind(user.id)
    .bind(&data.display_name)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(user)
}

pub async fn get_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"SELECT * FROM users WHERE email = $1"#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn get_profile(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        r#"SELECT * FROM profiles WHERE id = $1"#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
