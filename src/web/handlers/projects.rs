use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use uuid::Uuid;

use impactfund::common::Fetchable;
use impactfund::db;
use impactfund::models::{ProjectStatus, filter_projects};

use crate::web::forms::{ProjectDetailQuery, ProjectDonationForm, ProjectsQuery};
use crate::web::handlers::donate::process_donation;
use crate::web::helpers::{current_user_id, render, render_status};
use crate::web::state::AppState;
use crate::web::templates::{
    ProjectDetailTemplate, ProjectNotFoundTemplate, ProjectsTemplate,
};

#[get("/projects")]
pub async fn projects_index(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ProjectsQuery>,
) -> impl Responder {
    let signed_in = current_user_id(&req).is_some();
    let search = query.q.clone().unwrap_or_default();
    let status_raw = query.status.clone().unwrap_or_default();
    let status = status_raw.parse::<ProjectStatus>().ok();

    let fetched = db::list_projects(&state.pool).await;
    if let Err(e) = &fetched {
        log::error!("Failed to load projects: {}", e);
    }
    let fetched = Fetchable::from_result(fetched);
    let load_failed = fetched.is_failed();

    // Search and status narrow the fetched rows; they never re-query.
    let all = fetched.unwrap_or(Vec::new());
    let projects = filter_projects(&all, &search, status)
        .into_iter()
        .cloned()
        .collect();

    render(ProjectsTemplate {
        signed_in,
        projects,
        search,
        status: status_raw,
        load_failed,
    })
}

#[get("/projects/{id}")]
pub async fn project_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    query: web::Query<ProjectDetailQuery>,
) -> impl Responder {
    let signed_in = current_user_id(&req).is_some();
    let id = path.into_inner();

    match db::get_project_by_id(&state.pool, id).await {
        Ok(Some(project)) => render(ProjectDetailTemplate {
            signed_in,
            project,
            donated: query.donated == Some(1),
            error: None,
        }),
        Ok(None) => render_status(
            StatusCode::NOT_FOUND,
            ProjectNotFoundTemplate { signed_in },
        ),
        Err(e) => {
            log::error!("Failed to load project {}: {}", id, e);
            HttpResponse::InternalServerError()
                .body("Database error. Please try again.")
        }
    }
}

#[post("/projects/{id}/donate")]
pub async fn project_donate(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<ProjectDonationForm>,
) -> impl Responder {
    let user_id = match current_user_id(&req) {
        Some(uid) => uid,
        None => {
            return HttpResponse::SeeOther()
                .insert_header(("Location", "/sign-in"))
                .finish();
        }
    };
    let id = path.into_inner();

    let project = match db::get_project_by_id(&state.pool, id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            return render_status(
                StatusCode::NOT_FOUND,
                ProjectNotFoundTemplate { signed_in: true },
            );
        }
        Err(e) => {
            log::error!("Failed to load project {}: {}", id, e);
            return HttpResponse::InternalServerError()
                .body("Database error. Please try again.");
        }
    };

    match process_donation(
        &state,
        user_id,
        Some(id),
        &form.amount,
        form.method.as_deref(),
    )
    .await
    {
        // Redirect so the re-fetched page shows the new raised total.
        Ok(_) => HttpResponse::SeeOther()
            .insert_header(("Location", format!("/projects/{}?donated=1", id)))
            .finish(),
        Err(message) => render(ProjectDetailTemplate {
            signed_in: true,
            project,
            donated: false,
            error: Some(message),
        }),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(projects_index)
        .service(project_detail)
        .service(project_donate);
}
