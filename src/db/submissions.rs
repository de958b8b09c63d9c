use sqlx::PgPool;

use crate::common::SubmissionError;
use crate::models::{Submission, SubmissionCreate};

/// Created submissions always start pending review.
pub async fn create_submission(
    pool: &PgPool,
    data: &SubmissionCreate,
) -> Result<Submission, SubmissionError> {
    if data.budget_usd <= 0.0 {
        return Err(SubmissionError::InvalidBudget);
    }

    let submission = sqlx::query_as::<_, Submission>(
        r#"
        INSERT INTO donee_submissions
            (org_name, proposal_md, budget_usd, initial_kpis, submitted_by, status)
        VALUES ($1, $2, $3, $4, $5, 'pending')
        RETURNING *
        "#,
    )
    .bind(&data.org_name)
    .bind(&data.proposal_md)
    .bind(data.budget_usd)
    .bind(&data.initial_kpis)
    .bind(&data.submitted_by)
    .fetch_one(pool)
    .await?;

    Ok(submission)
}
