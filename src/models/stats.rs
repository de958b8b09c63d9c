use serde::{Deserialize, Serialize};

use std::collections::HashSet;

use super::{DonationWithProject, Project};

/// Estimated kWh of renewable energy per donated dollar, derived from
/// historical project performance.
const KWH_PER_USD: f64 = 2.5;
const STUDENTS_PER_USD: f64 = 0.1;

/// Home page aggregates, folded from current project/donation rows on
/// every render.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteStats {
    pub total_raised: f64,
    pub total_projects: usize,
    pub total_donations: i64,
    pub kwh_generated: f64,
    pub students_served: f64,
}

impl SiteStats {
    pub fn fold(projects: &[Project], total_donations: i64) -> Self {
        let total_raised = projects.iter().map(|p| p.raised_usd).sum();
        let kwh_generated = projects
            .iter()
            .filter_map(|p| p.kpi("kwh_generated"))
            .sum();
        let students_served = projects
            .iter()
            .filter_map(|p| p.kpi("students_served"))
            .sum();

        Self {
            total_raised,
            total_projects: projects.len(),
            total_donations,
            kwh_generated,
            students_served,
        }
    }
}

/// Dashboard totals for one donor.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationSummary {
    pub total_donated: f64,
    pub projects_supported: usize,
    pub impact_kwh: i64,
}

impl DonationSummary {
    pub fn fold(donations: &[DonationWithProject]) -> Self {
        let total_donated: f64 =
            donations.iter().map(|d| d.amount_usd).sum();
        let projects_supported = donations
            .iter()
            .filter_map(|d| d.project_id)
            .collect::<HashSet<_>>()
            .len();
        let impact_kwh = (total_donated * KWH_PER_USD).round() as i64;

        Self {
            total_donated,
            projects_supported,
            impact_kwh,
        }
    }
}

/// Donate page preview: what an entered amount is estimated to fund.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImpactPreview {
    pub kwh: i64,
    pub students: i64,
}

impl ImpactPreview {
    pub fn for_amount(amount_usd: f64) -> Self {
        if amount_usd <= 0.0 {
            return Self::default();
        }
        Self {
            kwh: (amount_usd * KWH_PER_USD).round() as i64,
            students: (amount_usd * STUDENTS_PER_USD).round() as i64,
        }
    }
}
