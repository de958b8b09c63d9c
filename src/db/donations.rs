use sqlx::PgPool;
use uuid::Uuid;

use crate::common::DonationError;
use crate::models::{Donation, DonationCreate, DonationWithProject};

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
        }
        _ => false,
    }
}

/// Records a donation. The donation insert and the project's raised
/// amount increment happen in one transaction with a server-side
/// `raised_usd = raised_usd + amount`, so concurrent donations to the
/// same project cannot lose updates and a donation row can never exist
/// without its effect on the project total.
///
/// `tx_ref` is unique; replaying a capture aborts instead of
/// double-inserting.
pub async fn record_donation(
    pool: &PgPool,
    data: &DonationCreate,
) -> Result<Donation, DonationError> {
    if data.amount_usd <= 0.0 {
        return Err(DonationError::InvalidAmount);
    }

    let mut tx = pool.begin().await?;

    let donation = sqlx::query_as::<_, Donation>(
        r#"
        INSERT INTO donations (project_id, user_id, amount_usd, tx_ref)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(data.project_id)
    .bind(data.user_id)
    .bind(data.amount_usd)
    .bind(&data.tx_ref)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            DonationError::DuplicateReference
        } else {
            DonationError::Database(e)
        }
    })?;

    // General-fund donations have no project row to update.
    if let Some(project_id) = data.project_id {
        let updated = sqlx::query(
            r#"
            UPDATE projects
            SET raised_usd = raised_usd + $1
            WHERE id = $2
            "#,
        )
        .bind(data.amount_usd)
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(DonationError::ProjectNotFound(project_id));
        }
    }

    tx.commit().await?;

    Ok(donation)
}

pub async fn list_donations_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<DonationWithProject>, sqlx::Error> {
    sqlx::query_as::<_, DonationWithProject>(
        r#"
        SELECT
            d.id,
            d.project_id,
            d.amount_usd,
            d.tx_ref,
            d.created_at,
            p.title AS project_title
        FROM donations d
        LEFT JOIN projects p ON p.id = d.project_id
        WHERE d.user_id = $1
        ORDER BY d.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
