use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::common::SubmissionError;
use crate::models::SubmissionCreate;

/// The three input steps of the proposal wizard. Submitting from the
/// Impact step is handled by the caller; there is no separate terminal
/// step here because a failed submit returns the user to Impact with
/// everything preserved.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Organization,
    Proposal,
    Impact,
}

impl WizardStep {
    pub const TOTAL: u8 = 3;

    pub fn number(&self) -> u8 {
        match self {
            Self::Organization => 1,
            Self::Proposal => 2,
            Self::Impact => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Organization),
            2 => Some(Self::Proposal),
            3 => Some(Self::Impact),
            _ => None,
        }
    }

    pub fn is_first(&self) -> bool {
        *self == Self::Organization
    }

    pub fn is_last(&self) -> bool {
        *self == Self::Impact
    }
}

/// Everything the user has typed so far. Values round-trip through the
/// form on each step, so navigating back and forward loses nothing;
/// closing the tab loses everything (no draft auto-save).
#[derive(
    Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize,
)]
pub struct WizardFields {
    pub org_name: String,
    pub contact_email: String,
    pub proposal_md: String,
    pub budget_usd: String,
    pub expected_beneficiaries: String,
    pub timeline_months: String,
    pub kwh_target: String,
    pub students_target: String,
}

impl WizardFields {
    /// Required fields for a step, non-empty after trimming. The kWh and
    /// students targets are optional and never gate navigation.
    pub fn step_is_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Organization => {
                !self.org_name.trim().is_empty()
                    && !self.contact_email.trim().is_empty()
            }
            WizardStep::Proposal => {
                !self.proposal_md.trim().is_empty()
                    && !self.budget_usd.trim().is_empty()
            }
            WizardStep::Impact => {
                !self.expected_beneficiaries.trim().is_empty()
                    && !self.timeline_months.trim().is_empty()
            }
        }
    }

    /// Forward transition, gated on the current step's required fields.
    /// An invalid step never changes the current step.
    pub fn advance(&self, step: WizardStep) -> WizardStep {
        if !self.step_is_valid(step) {
            return step;
        }
        match step {
            WizardStep::Organization => WizardStep::Proposal,
            WizardStep::Proposal => WizardStep::Impact,
            WizardStep::Impact => WizardStep::Impact,
        }
    }

    /// Backward transition, always permitted except at the first step.
    pub fn back(&self, step: WizardStep) -> WizardStep {
        match step {
            WizardStep::Organization => WizardStep::Organization,
            WizardStep::Proposal => WizardStep::Organization,
            WizardStep::Impact => WizardStep::Proposal,
        }
    }

    /// Builds the one-and-only write of the flow. All three steps must
    /// validate and the budget must parse to a positive number.
    pub fn into_submission(&self) -> Result<SubmissionCreate, SubmissionError> {
        if !self.step_is_valid(WizardStep::Organization) {
            return Err(SubmissionError::MissingField("organization"));
        }
        if !self.step_is_valid(WizardStep::Proposal) {
            return Err(SubmissionError::MissingField("proposal"));
        }
        if !self.step_is_valid(WizardStep::Impact) {
            return Err(SubmissionError::MissingField("impact goals"));
        }

        let budget_usd: f64 = self
            .budget_usd
            .trim()
            .parse()
            .map_err(|_| SubmissionError::InvalidBudget)?;
        if budget_usd <= 0.0 {
            return Err(SubmissionError::InvalidBudget);
        }

        let mut kpis = json!({
            "expected_beneficiaries": self.expected_beneficiaries.trim(),
            "timeline_months": self.timeline_months.trim(),
        });
        if !self.kwh_target.trim().is_empty() {
            kpis["kwh_target"] = json!(self.kwh_target.trim());
        }
        if !self.students_target.trim().is_empty() {
            kpis["students_target"] = json!(self.students_target.trim());
        }

        Ok(SubmissionCreate {
            org_name: self.org_name.trim().to_string(),
            proposal_md: self.proposal_md.trim().to_string(),
            budget_usd,
            initial_kpis: kpis,
            submitted_by: self.contact_email.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WizardFields {
        WizardFields {
            org_name: "Sunrise Cooperative".into(),
            contact_email: "hello@sunrise.example".into(),
            proposal_md: "We will refurbish two turbines.".into(),
            budget_usd: "35000".into(),
            expected_beneficiaries: "1600".into(),
            timeline_months: "18".into(),
            kwh_target: String::new(),
            students_target: String::new(),
        }
    }

    #[test]
    fn advance_is_blocked_by_whitespace_only_fields() {
        let mut fields = filled();
        fields.contact_email = "   ".into();

        assert!(!fields.step_is_valid(WizardStep::Organization));
        assert_eq!(
            fields.advance(WizardStep::Organization),
            WizardStep::Organization
        );
    }

    #[test]
    fn advance_walks_all_three_steps_when_valid() {
        let fields = filled();
        let step = fields.advance(WizardStep::Organization);
        assert_eq!(step, WizardStep::Proposal);
        let step = fields.advance(step);
        assert_eq!(step, WizardStep::Impact);
        // Impact has no forward neighbor; submit is a separate action.
        assert_eq!(fields.advance(step), WizardStep::Impact);
    }

    #[test]
    fn optional_targets_never_gate_the_impact_step() {
        let fields = filled();
        assert!(fields.kwh_target.is_empty());
        assert!(fields.students_target.is_empty());
        assert!(fields.step_is_valid(WizardStep::Impact));
    }

    #[test]
    fn back_is_nondestructive_and_disabled_at_first_step() {
        let fields = filled();
        assert_eq!(fields.back(WizardStep::Impact), WizardStep::Proposal);
        assert_eq!(
            fields.back(WizardStep::Proposal),
            WizardStep::Organization
        );
        assert_eq!(
            fields.back(WizardStep::Organization),
            WizardStep::Organization
        );

        // Navigation only moves the step pointer; the fields struct is
        // untouched, so every entered value survives a full round trip.
        let before = fields.clone();
        let mut step = WizardStep::Impact;
        step = fields.back(step);
        step = fields.back(step);
        step = fields.advance(step);
        step = fields.advance(step);
        assert_eq!(step, WizardStep::Impact);
        assert_eq!(fields, before);
    }

    #[test]
    fn submission_requires_numeric_positive_budget() {
        let mut fields = filled();
        fields.budget_usd = "lots".into();
        assert!(matches!(
            fields.into_submission(),
            Err(SubmissionError::InvalidBudget)
        ));

        fields.budget_usd = "-10".into();
        assert!(matches!(
            fields.into_submission(),
            Err(SubmissionError::InvalidBudget)
        ));
    }

    #[test]
    fn submission_trims_fields_and_includes_optional_kpis() {
        let mut fields = filled();
        fields.org_name = "  Sunrise Cooperative  ".into();
        fields.kwh_target = "5000".into();

        let create = fields.into_submission().expect("valid submission");
        assert_eq!(create.org_name, "Sunrise Cooperative");
        assert_eq!(create.budget_usd, 35000.0);
        assert_eq!(create.submitted_by, "hello@sunrise.example");
        assert_eq!(create.initial_kpis["kwh_target"], "5000");
        assert_eq!(create.initial_kpis["expected_beneficiaries"], "1600");
        assert!(create.initial_kpis.get("students_target").is_none());
    }

    #[test]
    fn submission_refuses_incomplete_earlier_steps() {
        let mut fields = filled();
        fields.proposal_md = String::new();
        assert!(matches!(
            fields.into_submission(),
            Err(SubmissionError::MissingField("proposal"))
        ));
    }

    #[test]
    fn step_numbers_round_trip() {
        for n in 1..=WizardStep::TOTAL {
            let step = WizardStep::from_number(n).unwrap();
            assert_eq!(step.number(), n);
        }
        assert!(WizardStep::from_number(0).is_none());
        assert!(WizardStep::from_number(4).is_none());
    }
}
