use askama::Template;

use impactfund::models::{
    DonationSummary, DonationWithProject, ImpactPreview, Project, SiteStats,
    StoryWithAuthor,
};
use impactfund::services::WizardFields;

use crate::web::featured::FeaturedStory;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub signed_in: bool,
    pub stats: SiteStats,
    pub stats_failed: bool,
    pub featured: Vec<Project>,
}

#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub signed_in: bool,
}

#[derive(Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub signed_in: bool,
    pub projects: Vec<Project>,
    pub search: String,
    pub status: String,
    pub load_failed: bool,
}

#[derive(Template)]
#[template(path = "project_detail.html")]
pub struct ProjectDetailTemplate {
    pub signed_in: bool,
    pub project: Project,
    pub donated: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "project_not_found.html")]
pub struct ProjectNotFoundTemplate {
    pub signed_in: bool,
}

#[derive(Template)]
#[template(path = "stories.html")]
pub struct StoriesTemplate {
    pub signed_in: bool,
    pub featured: &'static [FeaturedStory],
    pub stories: Vec<StoryWithAuthor>,
    pub load_failed: bool,
    pub submitted: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "donate.html")]
pub struct DonateTemplate {
    pub signed_in: bool,
    pub projects: Vec<Project>,
    pub load_failed: bool,
    pub selected: String,
    pub amount: String,
    pub method: String,
    pub preview: Option<ImpactPreview>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "donate_success.html")]
pub struct DonateSuccessTemplate {
    pub signed_in: bool,
    pub amount_label: String,
    pub target_label: String,
}

#[derive(Template)]
#[template(path = "submit.html")]
pub struct SubmitTemplate {
    pub signed_in: bool,
    pub step: u8,
    pub total_steps: u8,
    pub fields: WizardFields,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "submit_success.html")]
pub struct SubmitSuccessTemplate {
    pub signed_in: bool,
    pub org_name: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub signed_in: bool,
    pub display_name: String,
    pub donations: Vec<DonationWithProject>,
    pub summary: DonationSummary,
    pub load_failed: bool,
}

#[derive(Template)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub signed_in: bool,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "sign_up.html")]
pub struct SignUpTemplate {
    pub signed_in: bool,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donate_page(load_failed: bool) -> DonateTemplate {
        DonateTemplate {
            signed_in: true,
            projects: Vec::new(),
            load_failed,
            selected: "general".to_string(),
            amount: String::new(),
            method: "crypto".to_string(),
            preview: None,
            error: None,
        }
    }

    #[test]
    fn donate_page_surfaces_project_load_failure() {
        let html = donate_page(true).render().unwrap();
        assert!(html.contains("Projects could not be loaded"));
        // The general fund stays donatable.
        assert!(html.contains("General Fund"));
    }

    #[test]
    fn donate_page_shows_no_failure_notice_on_success() {
        let html = donate_page(false).render().unwrap();
        assert!(!html.contains("Projects could not be loaded"));
    }
}
