use sqlx::PgPool;
use std::sync::Arc;

use impactfund::services::PaymentProvider;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub rate_limiter: Arc<RateLimiter>,
    pub payments: Arc<dyn PaymentProvider>,
}
