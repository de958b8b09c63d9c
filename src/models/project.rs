use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ProjectStatus;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub status: ProjectStatus,
    pub target_usd: f64,
    pub raised_usd: f64,
    pub kpi_jsonb: serde_json::Value,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Raw funding percentage. Deliberately unclamped: a project that
    /// raised more than its target reads as >100% in the numeric label.
    pub fn funding_percent(&self) -> f64 {
        if self.target_usd <= 0.0 {
            return 0.0;
        }
        self.raised_usd / self.target_usd * 100.0
    }

    /// "75.0%" style label, one decimal place, unclamped.
    pub fn funding_percent_label(&self) -> String {
        format!("{:.1}%", self.funding_percent())
    }

    /// Progress-bar width, clamped to [0, 100].
    pub fn progress_width(&self) -> f64 {
        self.funding_percent().clamp(0.0, 100.0)
    }

    /// Single numeric KPI from the open string->number map, if present.
    pub fn kpi(&self, key: &str) -> Option<f64> {
        self.kpi_jsonb.get(key).and_then(|v| v.as_f64())
    }

    /// All numeric KPIs, sorted by key for a stable render.
    pub fn kpi_entries(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<(String, f64)> = match self.kpi_jsonb.as_object() {
            Some(map) => map
                .iter()
                .filter_map(|(k, v)| v.as_f64().map(|n| (k.clone(), n)))
                .collect(),
            None => Vec::new(),
        };
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    pub fn has_kpis(&self) -> bool {
        !self.kpi_entries().is_empty()
    }
}

/// Applies the Projects page search/filter to an already-loaded list.
/// Filtering never re-queries; it only narrows the fetched rows.
pub fn filter_projects<'a>(
    projects: &'a [Project],
    search: &str,
    status: Option<ProjectStatus>,
) -> Vec<&'a Project> {
    let needle = search.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| {
            let matches_search = needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.summary.to_lowercase().contains(&needle);
            let matches_status =
                status.is_none_or(|wanted| p.status == wanted);
            matches_search && matches_status
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(raised: f64, target: f64) -> Project {
        Project {
            id: Uuid::new_v4(),
            title: "Solar Microgrid".into(),
            summary: "Village solar array".into(),
            description: String::new(),
            status: ProjectStatus::InProgress,
            target_usd: target,
            raised_usd: raised,
            kpi_jsonb: serde_json::json!({}),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn label_is_one_decimal_and_unclamped() {
        let p = project(1500.0, 1000.0);
        assert_eq!(p.funding_percent_label(), "150.0%");
        assert_eq!(p.progress_width(), 100.0);
    }

    #[test]
    fn label_and_width_agree_below_target() {
        let p = project(750.0, 1000.0);
        assert_eq!(p.funding_percent_label(), "75.0%");
        assert_eq!(p.progress_width(), 75.0);
    }

    #[test]
    fn zero_target_does_not_divide_by_zero() {
        let p = project(100.0, 0.0);
        assert_eq!(p.funding_percent(), 0.0);
        assert_eq!(p.funding_percent_label(), "0.0%");
    }

    #[test]
    fn derived_values_are_stable_across_renders() {
        let p = project(333.0, 999.0);
        let first = (p.funding_percent_label(), p.progress_width());
        let second = (p.funding_percent_label(), p.progress_width());
        assert_eq!(first, second);
    }

    #[test]
    fn kpi_entries_sorted_and_numeric_only() {
        let mut p = project(0.0, 1000.0);
        p.kpi_jsonb = serde_json::json!({
            "students_served": 640,
            "kwh_generated": 18200.5,
            "note": "not a number"
        });

        assert_eq!(
            p.kpi_entries(),
            vec![
                ("kwh_generated".to_string(), 18200.5),
                ("students_served".to_string(), 640.0),
            ]
        );
        assert_eq!(p.kpi("students_served"), Some(640.0));
        assert_eq!(p.kpi("note"), None);
    }

    #[test]
    fn filter_matches_title_and_summary_case_insensitively() {
        let projects = vec![project(0.0, 1000.0)];

        assert_eq!(filter_projects(&projects, "SOLAR", None).len(), 1);
        assert_eq!(filter_projects(&projects, "village", None).len(), 1);
        assert_eq!(filter_projects(&projects, "turbine", None).len(), 0);
    }

    #[test]
    fn filter_by_status() {
        let mut done = project(0.0, 1000.0);
        done.status = ProjectStatus::Completed;
        let projects = vec![project(0.0, 1000.0), done];

        let active =
            filter_projects(&projects, "", Some(ProjectStatus::InProgress));
        assert_eq!(active.len(), 1);

        let all = filter_projects(&projects, "", None);
        assert_eq!(all.len(), 2);
    }
}
