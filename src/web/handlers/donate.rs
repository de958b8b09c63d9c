use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use uuid::Uuid;

use impactfund::common::{DonationError, Fetchable};
use impactfund::db;
use impactfund::log_err;
use impactfund::models::{Donation, DonationCreate, ImpactPreview, Project};
use impactfund::services::PaymentMethod;

use crate::web::forms::{DonateQuery, DonationForm};
use crate::web::helpers::{current_user_id, render};
use crate::web::state::AppState;
use crate::web::templates::{DonateSuccessTemplate, DonateTemplate};

/// Authorize, persist, capture. The donation row and the project's
/// raised total commit in one transaction inside `record_donation`; an
/// authorization whose donation failed to persist is refunded so no
/// money is held against a donation that does not exist.
///
/// Returns a user-facing message on failure.
pub async fn process_donation(
    state: &AppState,
    user_id: Uuid,
    project_id: Option<Uuid>,
    amount_raw: &str,
    method_raw: Option<&str>,
) -> Result<Donation, String> {
    let amount: f64 = match amount_raw.trim().parse() {
        Ok(a) if a > 0.0 => a,
        _ => return Err("Please enter a valid donation amount.".to_string()),
    };

    let method = method_raw
        .unwrap_or("")
        .parse::<PaymentMethod>()
        .unwrap_or_default();

    let auth = state.payments.authorize(amount, method).map_err(|e| {
        log::error!("Payment authorization failed: {}", e);
        "Payment was declined. Please try again.".to_string()
    })?;

    let data = DonationCreate {
        project_id,
        user_id,
        amount_usd: amount,
        tx_ref: auth.reference.clone(),
    };

    match db::record_donation(&state.pool, &data).await {
        Ok(donation) => {
            if let Err(e) = state.payments.capture(&auth) {
                log::error!(
                    "Capture failed for {}: {}",
                    auth.reference,
                    e
                );
            }
            Ok(donation)
        }
        Err(e) => {
            if let Err(refund_err) = state.payments.refund(&auth.reference) {
                log::error!(
                    "Refund failed for {}: {}",
                    auth.reference,
                    refund_err
                );
            }
            log::error!("Failed to record donation: {}", e);
            log_err!(&state.pool, &data);

            Err(match e {
                DonationError::InvalidAmount => {
                    "Please enter a valid donation amount.".to_string()
                }
                DonationError::ProjectNotFound(_) => {
                    "This project is no longer accepting donations.".to_string()
                }
                DonationError::DuplicateReference => {
                    "This donation was already recorded.".to_string()
                }
                _ => "Error processing donation. Please try again.".to_string(),
            })
        }
    }
}

async fn donation_targets(state: &AppState) -> (Vec<Project>, bool) {
    let fetched = db::list_in_progress_projects(&state.pool).await;
    if let Err(e) = &fetched {
        log::error!("Failed to load donation targets: {}", e);
    }
    let fetched = Fetchable::from_result(fetched);
    let failed = fetched.is_failed();
    (fetched.unwrap_or(Vec::new()), failed)
}

fn preview_for(amount: &str) -> Option<ImpactPreview> {
    amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| *a > 0.0)
        .map(ImpactPreview::for_amount)
}

#[get("/donate")]
pub async fn donate_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<DonateQuery>,
) -> impl Responder {
    let signed_in = current_user_id(&req).is_some();
    let (projects, load_failed) = donation_targets(&state).await;

    let amount = query.amount.clone().unwrap_or_default();
    let preview = preview_for(&amount);

    render(DonateTemplate {
        signed_in,
        projects,
        load_failed,
        selected: query.project.clone().unwrap_or_else(|| "general".to_string()),
        amount,
        method: "crypto".to_string(),
        preview,
        error: None,
    })
}

/// Re-renders the donate page with the entered values preserved.
async fn donate_failed(
    state: &AppState,
    signed_in: bool,
    form: &DonationForm,
    error: String,
) -> HttpResponse {
    let (projects, load_failed) = donation_targets(state).await;
    render(DonateTemplate {
        signed_in,
        projects,
        load_failed,
        selected: form_selected(&form.project),
        amount: form.amount.clone(),
        method: form.method.clone().unwrap_or_else(|| "crypto".to_string()),
        preview: preview_for(&form.amount),
        error: Some(error),
    })
}

#[post("/donate")]
pub async fn donate_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<DonationForm>,
) -> impl Responder {
    let signed_in = current_user_id(&req).is_some();

    let user_id = match current_user_id(&req) {
        Some(uid) => uid,
        None => {
            // No writes happen for an anonymous submit.
            return donate_failed(
                &state,
                signed_in,
                &form,
                "Please sign in to make a donation.".to_string(),
            )
            .await;
        }
    };

    let project_id = match form.project.trim() {
        "" | "general" => None,
        raw => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                return donate_failed(
                    &state,
                    signed_in,
                    &form,
                    "Please choose a valid project.".to_string(),
                )
                .await;
            }
        },
    };

    match process_donation(
        &state,
        user_id,
        project_id,
        &form.amount,
        form.method.as_deref(),
    )
    .await
    {
        Ok(donation) => {
            let target_label = match project_id {
                Some(id) => db::get_project_by_id(&state.pool, id)
                    .await
                    .ok()
                    .flatten()
                    .map(|p| p.title)
                    .unwrap_or_else(|| "General Fund".to_string()),
                None => "General Fund".to_string(),
            };

            render(DonateSuccessTemplate {
                signed_in: true,
                amount_label: format!("${:.2}", donation.amount_usd),
                target_label,
            })
        }
        Err(message) => {
            donate_failed(&state, signed_in, &form, message).await
        }
    }
}

fn form_selected(project: &str) -> String {
    let trimmed = project.trim();
    if trimmed.is_empty() {
        "general".to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(donate_form).service(donate_submit);
}
