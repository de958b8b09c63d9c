use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};

use impactfund::common::{Fetchable, StoryError};
use impactfund::db;
use impactfund::log_err;
use impactfund::models::{StoryCreate, StoryWithAuthor};

use crate::web::featured::FEATURED_STORIES;
use crate::web::forms::{StoriesQuery, StoryForm};
use crate::web::helpers::{current_user_id, render, require_user};
use crate::web::state::AppState;
use crate::web::templates::StoriesTemplate;

async fn approved_stories(
    state: &AppState,
) -> (Vec<StoryWithAuthor>, bool) {
    let fetched = db::list_approved_stories(&state.pool).await;
    if let Err(e) = &fetched {
        log::error!("Failed to load stories: {}", e);
    }
    let fetched = Fetchable::from_result(fetched);
    let failed = fetched.is_failed();
    (fetched.unwrap_or(Vec::new()), failed)
}

#[get("/stories")]
pub async fn stories_index(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<StoriesQuery>,
) -> impl Responder {
    let signed_in = current_user_id(&req).is_some();
    let (stories, load_failed) = approved_stories(&state).await;

    render(StoriesTemplate {
        signed_in,
        featured: FEATURED_STORIES,
        stories,
        load_failed,
        submitted: query.submitted == Some(1),
        error: None,
    })
}

#[post("/stories")]
pub async fn story_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<StoryForm>,
) -> impl Responder {
    let user_id = match require_user(&req) {
        Ok(uid) => uid,
        Err(redirect) => return redirect,
    };

    let data = StoryCreate {
        user_id,
        title: form.title.clone(),
        body_md: form.body_md.clone(),
    };

    match db::create_story(&state.pool, &data).await {
        // The new story enters moderation and is not in the visible list.
        Ok(_) => HttpResponse::SeeOther()
            .insert_header(("Location", "/stories?submitted=1"))
            .finish(),
        Err(e) => {
            let message = match &e {
                StoryError::MissingFields => e.to_string(),
                StoryError::Database(db_err) => {
                    log::error!("Failed to create story: {}", db_err);
                    log_err!(&state.pool, &data);
                    "Error submitting story. Please try again.".to_string()
                }
            };

            let (stories, load_failed) = approved_stories(&state).await;
            render(StoriesTemplate {
                signed_in: true,
                featured: FEATURED_STORIES,
                stories,
                load_failed,
                submitted: false,
                error: Some(message),
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(stories_index).service(story_submit);
}
