mod common;

#[cfg(test)]
pub mod wizard_tests {
    use super::common::*;

    use impactfund::common::SubmissionError;
    use impactfund::services::{WizardFields, WizardStep};

    #[test]
    fn test_wizard_starts_on_organization_step() {
        assert_eq!(WizardStep::default(), WizardStep::Organization);
        assert_eq!(WizardStep::default().number(), 1);
        assert_eq!(WizardStep::TOTAL, 3);
    }

    #[test]
    fn test_full_walkthrough_success() {
        let fields = get_filled_wizard_fields();

        let mut step = WizardStep::default();
        step = fields.advance(step);
        step = fields.advance(step);
        assert_eq!(step, WizardStep::Impact);
        assert!(step.is_last());

        let submission =
            fields.into_submission().expect("complete wizard submits");
        assert_eq!(submission.org_name, "Sunrise Cooperative");
        assert_eq!(submission.budget_usd, 35000.0);
        assert_eq!(
            submission.submitted_by,
            "hello@sunrise.example"
        );
        assert_eq!(submission.initial_kpis["kwh_target"], "52000");
        assert_eq!(
            submission.initial_kpis["expected_beneficiaries"],
            "1600"
        );
        // Left empty in the fixture, so it is not recorded at all.
        assert!(
            submission.initial_kpis.get("students_target").is_none()
        );
    }

    #[test]
    fn test_next_fails_on_empty_required_field() {
        let mut fields = get_filled_wizard_fields();
        fields.proposal_md = "   ".to_string();

        let step = fields.advance(WizardStep::Proposal);
        assert_eq!(step, WizardStep::Proposal);
    }

    #[test]
    fn test_back_and_forward_preserve_every_value() {
        let fields = get_filled_wizard_fields();
        let snapshot = fields.clone();

        let mut step = WizardStep::Impact;
        step = fields.back(step);
        step = fields.back(step);
        assert_eq!(step, WizardStep::Organization);
        assert!(step.is_first());

        // Back from the first step stays put.
        assert_eq!(fields.back(step), WizardStep::Organization);

        step = fields.advance(step);
        step = fields.advance(step);
        assert_eq!(step, WizardStep::Impact);
        assert_eq!(fields, snapshot);
    }

    #[test]
    fn test_submission_fails_on_nonnumeric_budget() {
        let mut fields = get_filled_wizard_fields();
        fields.budget_usd = "about 35k".to_string();

        assert!(matches!(
            fields.into_submission(),
            Err(SubmissionError::InvalidBudget)
        ));
    }

    #[test]
    fn test_submission_fails_on_nonpositive_budget() {
        let mut fields = get_filled_wizard_fields();

        fields.budget_usd = "0".to_string();
        assert!(matches!(
            fields.into_submission(),
            Err(SubmissionError::InvalidBudget)
        ));

        fields.budget_usd = "-500".to_string();
        assert!(matches!(
            fields.into_submission(),
            Err(SubmissionError::InvalidBudget)
        ));
    }

    #[test]
    fn test_submission_fails_on_incomplete_earlier_step() {
        let mut fields = get_filled_wizard_fields();
        fields.org_name = String::new();

        assert!(matches!(
            fields.into_submission(),
            Err(SubmissionError::MissingField("organization"))
        ));
    }

    #[test]
    fn test_failed_submission_leaves_fields_usable() {
        let mut fields = get_filled_wizard_fields();
        fields.budget_usd = "oops".to_string();
        assert!(fields.into_submission().is_err());

        // Fix the one bad value and submit again with everything else
        // still in place.
        fields.budget_usd = "35000".to_string();
        let submission =
            fields.into_submission().expect("corrected wizard submits");
        assert_eq!(submission.org_name, "Sunrise Cooperative");
    }

    #[test]
    fn test_step_numbers_reject_out_of_range() {
        assert!(WizardStep::from_number(0).is_none());
        assert!(WizardStep::from_number(4).is_none());
        assert_eq!(
            WizardStep::from_number(2),
            Some(WizardStep::Proposal)
        );
    }
}
