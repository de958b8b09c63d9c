pub mod auth;
pub mod dashboard;
pub mod donate;
pub mod projects;
pub mod public;
pub mod stories;
pub mod submit;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    public::configure(cfg);
    auth::configure(cfg);
    projects::configure(cfg);
    stories::configure(cfg);
    donate::configure(cfg);
    submit::configure(cfg);
    dashboard::configure(cfg);
}
