use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use std::time::Duration;

use impactfund::common::AuthError;
use impactfund::db;
use impactfund::models::UserCreate;
use impactfund::services::PasswordManager;

use crate::web::forms::{AuthQuery, SignInForm, SignUpForm};
use crate::web::helpers::{removal_cookie, render, session_cookie};
use crate::web::security::PasswordValidator;
use crate::web::state::AppState;
use crate::web::templates::{SignInTemplate, SignUpTemplate};

#[get("/sign-in")]
pub async fn sign_in_form(query: web::Query<AuthQuery>) -> impl Responder {
    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Email and password are required".to_string(),
        "invalid" => "Invalid email or password".to_string(),
        "rate_limit" => {
            "Too many sign-in attempts. Please try again later.".to_string()
        }
        "oauth" => {
            "That sign-in provider is not available.".to_string()
        }
        "internal" => {
            "An internal error occurred. Please try again.".to_string()
        }
        other => other.to_string(),
    });

    render(SignInTemplate {
        signed_in: false,
        error,
    })
}

#[post("/sign-in")]
pub async fn sign_in_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SignInForm>,
) -> impl Responder {
    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.allow(
        &format!("sign-in:{}", client_ip),
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-in?error=rate_limit"))
            .finish();
    }

    let email = form.email.trim().to_string();
    let password = form.password.clone();

    if email.is_empty() || password.is_empty() {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-in?error=missing"))
            .finish();
    }

    let user = match db::get_user_by_email(&state.pool, &email).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Database error during sign-in: {}", e);
            return HttpResponse::SeeOther()
                .insert_header(("Location", "/sign-in?error=internal"))
                .finish();
        }
    };

    let stored_hash = match &user {
        Some(u) => u.password_hash.clone(),
        None => PasswordManager::timing_equalization_hash(),
    };

    let password_valid =
        PasswordManager::verify_password(&password, &stored_hash)
            .unwrap_or(false);

    match user {
        Some(user) if password_valid => HttpResponse::SeeOther()
            .cookie(session_cookie(user.id))
            .insert_header(("Location", "/dashboard"))
            .finish(),
        _ => HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-in?error=invalid"))
            .finish(),
    }
}

#[get("/sign-up")]
pub async fn sign_up_form(query: web::Query<AuthQuery>) -> impl Responder {
    let error = query.error.as_deref().map(|code| match code {
        "missing" => "Email and password are required".to_string(),
        "email" => "Please enter a valid email address".to_string(),
        "exists" => {
            "An account with this email already exists".to_string()
        }
        "rate_limit" => {
            "Too many sign-up attempts. Please try again later.".to_string()
        }
        "internal" => {
            "An internal error occurred. Please try again.".to_string()
        }
        other => other.to_string(),
    });

    render(SignUpTemplate {
        signed_in: false,
        error,
    })
}

#[post("/sign-up")]
pub async fn sign_up_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<SignUpForm>,
) -> impl Responder {
    let email = form.email.trim().to_string();
    let password = form.password.clone();

    if email.is_empty() || password.is_empty() {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-up?error=missing"))
            .finish();
    }

    // Display name defaults to the part of the email before the '@'.
    let display_name = match form.display_name.trim() {
        "" => email.split('@').next().unwrap_or(&email).to_string(),
        name => name.to_string(),
    };
    if !crate::web::security::validate_email(&email) {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-up?error=email"))
            .finish();
    }
    if let Err(message) = PasswordValidator::validate(&password) {
        return HttpResponse::SeeOther()
            .insert_header((
                "Location",
                format!("/sign-up?error={}", urlencoding::encode(&message)),
            ))
            .finish();
    }

    let client_ip = req
        .connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string();

    if !state.rate_limiter.allow(
        &format!("sign-up:{}", client_ip),
        3,                         // 3 attempts
        Duration::from_secs(3600), // per hour
    ) {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-up?error=rate_limit"))
            .finish();
    }

    let password_hash = match PasswordManager::hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return HttpResponse::SeeOther()
                .insert_header(("Location", "/sign-up?error=internal"))
                .finish();
        }
    };

    let data = UserCreate {
        email,
        password_hash,
        display_name,
    };

    // User and profile are created in one transaction; a failure leaves
    // no half-registered identity behind.
    match db::create_user_with_profile(&state.pool, &data).await {
        Ok(user) => HttpResponse::SeeOther()
            .cookie(session_cookie(user.id))
            .insert_header(("Location", "/dashboard"))
            .finish(),
        Err(AuthError::AlreadyExists(_)) => HttpResponse::SeeOther()
            .insert_header(("Location", "/sign-up?error=exists"))
            .finish(),
        Err(e) => {
            log::error!("Database error during sign-up: {}", e);
            HttpResponse::SeeOther()
                .insert_header(("Location", "/sign-up?error=internal"))
                .finish()
        }
    }
}

#[post("/sign-out")]
pub async fn sign_out() -> impl Responder {
    HttpResponse::SeeOther()
        .cookie(removal_cookie())
        .insert_header(("Location", "/"))
        .finish()
}

/// Hosted OAuth entry point. The authorize URL for a provider comes from
/// `OAUTH_<PROVIDER>_AUTHORIZE_URL`; an unconfigured provider bounces
/// back to the sign-in page instead of failing the request.
#[get("/auth/oauth/{provider}")]
pub async fn oauth_redirect(path: web::Path<String>) -> impl Responder {
    let provider = path.into_inner().to_lowercase();

    let configured = provider
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
        .then(|| {
            std::env::var(format!(
                "OAUTH_{}_AUTHORIZE_URL",
                provider.to_uppercase()
            ))
            .ok()
        })
        .flatten();

    match configured {
        Some(url) => HttpResponse::SeeOther()
            .insert_header(("Location", url))
            .finish(),
        None => {
            log::warn!("OAuth provider '{}' is not configured", provider);
            HttpResponse::SeeOther()
                .insert_header(("Location", "/sign-in?error=oauth"))
                .finish()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(sign_in_form)
        .service(sign_in_submit)
        .service(sign_up_form)
        .service(sign_up_submit)
        .service(sign_out)
        .service(oauth_redirect);
}
