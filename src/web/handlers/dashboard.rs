use actix_web::{HttpRequest, Responder, get, web};

use impactfund::common::Fetchable;
use impactfund::db;
use impactfund::models::DonationSummary;

use crate::web::helpers::{load_user, render, require_user};
use crate::web::state::AppState;
use crate::web::templates::DashboardTemplate;

#[get("/dashboard")]
pub async fn dashboard(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let user_id = match require_user(&req) {
        Ok(uid) => uid,
        Err(redirect) => return redirect,
    };
    let user = match load_user(&state.pool, user_id).await {
        Ok(u) => u,
        Err(response) => return response,
    };

    // Profiles are created with the user, but fall back to the email if
    // the display name was left empty.
    let display_name = db::get_profile(&state.pool, user_id)
        .await
        .ok()
        .flatten()
        .and_then(|p| p.display_name)
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| user.email.clone());

    let fetched = db::list_donations_for_user(&state.pool, user_id).await;
    if let Err(e) = &fetched {
        log::error!("Failed to load donations for {}: {}", user_id, e);
    }
    let fetched = Fetchable::from_result(fetched);
    let load_failed = fetched.is_failed();
    let donations = fetched.unwrap_or(Vec::new());
    let summary = DonationSummary::fold(&donations);

    render(DashboardTemplate {
        signed_in: true,
        display_name,
        donations,
        summary,
        load_failed,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}
