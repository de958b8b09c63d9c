mod common;

#[cfg(test)]
pub mod project_tests {
    use super::common::*;

    use impactfund::models::*;

    #[test]
    fn test_funding_labels_match_seed_data() {
        assert_eq!(
            get_seed_project_solar().funding_percent_label(),
            "63.0%"
        );
        assert_eq!(
            get_seed_project_stem().funding_percent_label(),
            "42.0%"
        );
        assert_eq!(
            get_seed_project_wind().funding_percent_label(),
            "0.0%"
        );
        assert_eq!(
            get_seed_project_literacy().funding_percent_label(),
            "100.0%"
        );
    }

    #[test]
    fn test_progress_width_caps_at_one_hundred() {
        let mut project = get_seed_project_literacy();
        project.raised_usd = 18000.0;

        assert_eq!(project.funding_percent_label(), "150.0%");
        assert_eq!(project.progress_width(), 100.0);
    }

    #[test]
    fn test_filter_combines_search_and_status() {
        let projects = get_seed_projects();

        let hits = filter_projects(
            &projects,
            "solar",
            Some(ProjectStatus::InProgress),
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Solar Microgrid for Kéla");

        // Same search but a status that does not match.
        let hits = filter_projects(
            &projects,
            "solar",
            Some(ProjectStatus::Completed),
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn test_filter_matches_summary_text() {
        let projects = get_seed_projects();
        let hits = filter_projects(&projects, "TRAVELLING", None);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Mobile STEM Lab");
    }

    #[test]
    fn test_filter_without_criteria_returns_everything() {
        let projects = get_seed_projects();
        assert_eq!(filter_projects(&projects, "  ", None).len(), 4);
    }

    #[test]
    fn test_site_stats_fold_over_seed_projects() {
        let projects = get_seed_projects();
        let stats = SiteStats::fold(&projects, 12);

        assert_eq!(stats.total_raised, 51900.0);
        assert_eq!(stats.total_projects, 4);
        assert_eq!(stats.total_donations, 12);
        assert_eq!(stats.kwh_generated, 18200.5);
        assert_eq!(stats.students_served, 850.0);
    }

    #[test]
    fn test_donation_summary_counts_distinct_projects_only() {
        let solar = get_seed_project_solar();
        let stem = get_seed_project_stem();

        let donations = vec![
            get_seed_donation(Some(&solar), 100.0),
            get_seed_donation(Some(&solar), 50.0),
            get_seed_donation(Some(&stem), 25.0),
            get_seed_donation(None, 25.0),
        ];

        let summary = DonationSummary::fold(&donations);
        assert_eq!(summary.total_donated, 200.0);
        assert_eq!(summary.projects_supported, 2);
        assert_eq!(summary.impact_kwh, 500);
    }

    #[test]
    fn test_general_fund_donation_labels() {
        let donation = get_seed_donation(None, 40.0);
        assert_eq!(donation.target_label(), "General Fund");

        let solar = get_seed_project_solar();
        let donation = get_seed_donation(Some(&solar), 40.0);
        assert_eq!(donation.target_label(), "Solar Microgrid for Kéla");
    }

    #[test]
    fn test_impact_preview_for_quick_pick_amounts() {
        let preview = ImpactPreview::for_amount(25.0);
        assert_eq!(preview.kwh, 63);
        assert_eq!(preview.students, 3);

        let preview = ImpactPreview::for_amount(250.0);
        assert_eq!(preview.kwh, 625);
        assert_eq!(preview.students, 25);
    }

    #[test]
    fn test_project_status_round_trips_through_strings() {
        for status in [
            ProjectStatus::Pending,
            ProjectStatus::InProgress,
            ProjectStatus::Completed,
        ] {
            let parsed: ProjectStatus =
                status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }

        assert!("archived".parse::<ProjectStatus>().is_err());
    }
}
