use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthQuery {
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Deserialize)]
pub struct ProjectsQuery {
    pub q: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct ProjectDetailQuery {
    pub donated: Option<u8>,
}

#[derive(Deserialize)]
pub struct StoriesQuery {
    pub submitted: Option<u8>,
}

/// Quick-pick links prefill the donate form through the query string.
#[derive(Deserialize)]
pub struct DonateQuery {
    pub amount: Option<String>,
    pub project: Option<String>,
}

/// Donate page form. `project` is "general" or a project id.
#[derive(Deserialize)]
pub struct DonationForm {
    pub project: String,
    pub amount: String,
    pub method: Option<String>,
}

/// Inline donate form on the project detail page.
#[derive(Deserialize)]
pub struct ProjectDonationForm {
    pub amount: String,
    pub method: Option<String>,
}

#[derive(Deserialize)]
pub struct StoryForm {
    pub title: String,
    pub body_md: String,
}

/// One POST per wizard interaction. Every field round-trips so that
/// back/forward navigation is non-destructive; nothing is stored
/// server-side between steps.
#[derive(Deserialize)]
pub struct WizardForm {
    pub step: u8,
    pub action: String,
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub proposal_md: String,
    #[serde(default)]
    pub budget_usd: String,
    #[serde(default)]
    pub expected_beneficiaries: String,
    #[serde(default)]
    pub timeline_months: String,
    #[serde(default)]
    pub kwh_target: String,
    #[serde(default)]
    pub students_target: String,
}
