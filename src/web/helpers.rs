use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use askama::Template;
use sqlx::PgPool;
use uuid::Uuid;

use impactfund::db;
use impactfund::models::User;

pub const SESSION_COOKIE: &str = "if_uid";

/// Identity is read from the session cookie on every request, so a
/// sign-out is visible to the very next render.
pub fn current_user_id(req: &HttpRequest) -> Option<Uuid> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())
        .and_then(|s| Uuid::parse_str(&s).ok())
}

pub fn require_user(req: &HttpRequest) -> Result<Uuid, HttpResponse> {
    match current_user_id(req) {
        Some(uid) => Ok(uid),
        None => Err(HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-in"))
            .finish()),
    }
}

pub async fn load_user(pool: &PgPool, uid: Uuid) -> Result<User, HttpResponse> {
    match db::get_user_by_id(pool, uid).await {
        Ok(Some(u)) => Ok(u),
        Ok(None) => Err(HttpResponse::Unauthorized().body("User not found")),
        Err(e) => {
            Err(HttpResponse::InternalServerError().body(format!("Database error: {e}")))
        }
    }
}

pub fn session_cookie(user_id: Uuid) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, user_id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(7))
        .finish()
}

pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    render_status(StatusCode::OK, t)
}

pub fn render_status<T: Template>(status: StatusCode, t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}
