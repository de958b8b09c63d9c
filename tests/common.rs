use chrono::{DateTime, Utc};
use uuid::Uuid;

use impactfund::models::*;
use impactfund::services::WizardFields;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_project_solar() -> Project {
    Project {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001")
            .unwrap(),
        title: "Solar Microgrid for Kéla".to_string(),
        summary: "A village-scale solar array with battery storage"
            .to_string(),
        description: "Installs a 40 kW array serving 300 households."
            .to_string(),
        status: ProjectStatus::InProgress,
        target_usd: 50000.0,
        raised_usd: 31500.0,
        kpi_jsonb: serde_json::json!({ "kwh_generated": 18200.5 }),
        image_url: None,
        created_at: parse_time("2026-02-10 09:00:00+00"),
    }
}

pub fn get_seed_project_stem() -> Project {
    Project {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000002")
            .unwrap(),
        title: "Mobile STEM Lab".to_string(),
        summary: "A travelling classroom for rural schools".to_string(),
        description: "Brings laptops and lab kits to five schools."
            .to_string(),
        status: ProjectStatus::InProgress,
        target_usd: 20000.0,
        raised_usd: 8400.0,
        kpi_jsonb: serde_json::json!({ "students_served": 640 }),
        image_url: None,
        created_at: parse_time("2026-03-01 14:30:00+00"),
    }
}

pub fn get_seed_project_wind() -> Project {
    Project {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000003")
            .unwrap(),
        title: "Coastal Wind Turbine Refit".to_string(),
        summary: "Refurbishing two decommissioned turbines".to_string(),
        description: "Awaiting permits before work begins.".to_string(),
        status: ProjectStatus::Pending,
        target_usd: 35000.0,
        raised_usd: 0.0,
        kpi_jsonb: serde_json::json!({}),
        image_url: None,
        created_at: parse_time("2026-04-12 08:15:00+00"),
    }
}

pub fn get_seed_project_literacy() -> Project {
    Project {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000004")
            .unwrap(),
        title: "Adult Literacy Program".to_string(),
        summary: "Evening reading classes in three districts"
            .to_string(),
        description: "Completed its two-year run in 2025.".to_string(),
        status: ProjectStatus::Completed,
        target_usd: 12000.0,
        raised_usd: 12000.0,
        kpi_jsonb: serde_json::json!({ "students_served": 210 }),
        image_url: None,
        created_at: parse_time("2026-01-20 11:45:00+00"),
    }
}

pub fn get_seed_projects() -> Vec<Project> {
    vec![
        get_seed_project_solar(),
        get_seed_project_stem(),
        get_seed_project_wind(),
        get_seed_project_literacy(),
    ]
}

pub fn get_seed_donation(
    project: Option<&Project>,
    amount_usd: f64,
) -> DonationWithProject {
    DonationWithProject {
        id: Uuid::new_v4(),
        project_id: project.map(|p| p.id),
        amount_usd,
        tx_ref: format!("sim_crypto_{}", Uuid::new_v4().simple()),
        created_at: parse_time("2026-05-02 16:00:00+00"),
        project_title: project.map(|p| p.title.clone()),
    }
}

pub fn get_filled_wizard_fields() -> WizardFields {
    WizardFields {
        org_name: "Sunrise Cooperative".to_string(),
        contact_email: "hello@sunrise.example".to_string(),
        proposal_md: "We will refurbish two coastal turbines."
            .to_string(),
        budget_usd: "35000".to_string(),
        expected_beneficiaries: "1600".to_string(),
        timeline_months: "18".to_string(),
        kwh_target: "52000".to_string(),
        students_target: String::new(),
    }
}
