use actix_web::{HttpRequest, Responder, get, post, web};

use impactfund::db;
use impactfund::log_err;
use impactfund::services::{WizardFields, WizardStep};

use crate::web::forms::WizardForm;
use crate::web::helpers::{current_user_id, render};
use crate::web::state::AppState;
use crate::web::templates::{SubmitSuccessTemplate, SubmitTemplate};

#[get("/submit")]
pub async fn submit_form(req: HttpRequest) -> impl Responder {
    render(SubmitTemplate {
        signed_in: current_user_id(&req).is_some(),
        step: WizardStep::default().number(),
        total_steps: WizardStep::TOTAL,
        fields: WizardFields::default(),
        error: None,
    })
}

/// One POST per wizard interaction. The posted form carries every field
/// from every step, so back/next navigation loses nothing; the only
/// database write happens on the final submit action.
#[post("/submit")]
pub async fn submit_step(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<WizardForm>,
) -> impl Responder {
    let signed_in = current_user_id(&req).is_some();

    let fields = WizardFields {
        org_name: form.org_name.clone(),
        contact_email: form.contact_email.clone(),
        proposal_md: form.proposal_md.clone(),
        budget_usd: form.budget_usd.clone(),
        expected_beneficiaries: form.expected_beneficiaries.clone(),
        timeline_months: form.timeline_months.clone(),
        kwh_target: form.kwh_target.clone(),
        students_target: form.students_target.clone(),
    };
    let step = WizardStep::from_number(form.step).unwrap_or_default();

    match form.action.as_str() {
        "back" => render(SubmitTemplate {
            signed_in,
            step: fields.back(step).number(),
            total_steps: WizardStep::TOTAL,
            fields,
            error: None,
        }),
        "next" => {
            let next = fields.advance(step);
            let error = if !fields.step_is_valid(step) {
                Some(
                    "Please fill in the required fields before continuing."
                        .to_string(),
                )
            } else {
                None
            };
            render(SubmitTemplate {
                signed_in,
                step: next.number(),
                total_steps: WizardStep::TOTAL,
                fields,
                error,
            })
        }
        "submit" => {
            let data = match fields.into_submission() {
                Ok(data) => data,
                Err(e) => {
                    return render(SubmitTemplate {
                        signed_in,
                        step: WizardStep::Impact.number(),
                        total_steps: WizardStep::TOTAL,
                        fields,
                        error: Some(e.to_string()),
                    });
                }
            };

            match db::create_submission(&state.pool, &data).await {
                Ok(_) => render(SubmitSuccessTemplate {
                    signed_in,
                    org_name: data.org_name,
                }),
                Err(e) => {
                    log::error!("Failed to create submission: {}", e);
                    log_err!(&state.pool, &data);
                    render(SubmitTemplate {
                        signed_in,
                        step: WizardStep::Impact.number(),
                        total_steps: WizardStep::TOTAL,
                        fields,
                        error: Some(
                            "Error submitting proposal. Please try again."
                                .to_string(),
                        ),
                    })
                }
            }
        }
        // Unknown action re-renders the current step untouched.
        _ => render(SubmitTemplate {
            signed_in,
            step: step.number(),
            total_steps: WizardStep::TOTAL,
            fields,
            error: None,
        }),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_form).service(submit_step);
}
