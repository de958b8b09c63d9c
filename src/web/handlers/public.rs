use actix_web::{HttpRequest, Responder, get, web};

use impactfund::common::Fetchable;
use impactfund::db;
use impactfund::models::SiteStats;

use crate::web::helpers::{current_user_id, render};
use crate::web::state::AppState;
use crate::web::templates::{AboutTemplate, HomeTemplate};

#[get("/")]
pub async fn home(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let signed_in = current_user_id(&req).is_some();

    let stats = db::site_stats(&state.pool).await;
    if let Err(e) = &stats {
        log::error!("Failed to load site stats: {}", e);
    }
    let stats = Fetchable::from_result(stats);
    let stats_failed = stats.is_failed();

    // The three most recent projects headline the landing page.
    let featured = Fetchable::from_result(db::list_projects(&state.pool).await)
        .unwrap_or(Vec::new())
        .into_iter()
        .take(3)
        .collect();

    render(HomeTemplate {
        signed_in,
        stats: stats.unwrap_or(SiteStats::default()),
        stats_failed,
        featured,
    })
}

#[get("/about")]
pub async fn about(req: HttpRequest) -> impl Responder {
    render(AboutTemplate {
        signed_in: current_user_id(&req).is_some(),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home).service(about);
}
