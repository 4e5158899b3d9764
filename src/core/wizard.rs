use thiserror::Error;
use tracing::info;
use validator::Validate;

use crate::models::{field_errors, Field, FieldError, OnboardingForm};
use crate::services::{SubmissionGateway, SubmissionReceipt, SubmitError};

/// Wizard step, in fixed order
///
/// Four data-entry steps plus the terminal success state. The initial
/// state is `PersonalInfo`; `Complete` is only reachable through
/// [`Wizard::submit`] and only left through [`Wizard::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    PersonalInfo,
    ProfessionalDetails,
    PricingLocation,
    Review,
    Complete,
}

impl Step {
    /// 1-based step number shown in the progress header
    pub fn number(self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::ProfessionalDetails => 2,
            Step::PricingLocation => 3,
            Step::Review => 4,
            Step::Complete => 5,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::ProfessionalDetails => "Professional Details",
            Step::PricingLocation => "Pricing & Location",
            Step::Review => "Review & Submit",
            Step::Complete => "Welcome to Artistly!",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Basic information about you",
            Step::ProfessionalDetails => "Your skills and experience",
            Step::PricingLocation => "Set your rates and availability",
            Step::Review => "Review your profile",
            Step::Complete => "Your profile has been submitted",
        }
    }

    /// Fields that must validate before leaving this step forwards
    ///
    /// Review has no gate of its own; the submit action re-checks the full
    /// schema instead.
    pub fn required_fields(self) -> &'static [Field] {
        match self {
            Step::PersonalInfo => &[Field::Name, Field::Email, Field::Phone],
            Step::ProfessionalDetails => {
                &[Field::Bio, Field::Categories, Field::Languages, Field::Experience]
            }
            Step::PricingLocation => &[Field::PriceRange, Field::Location],
            Step::Review | Step::Complete => &[],
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => Some(Step::ProfessionalDetails),
            Step::ProfessionalDetails => Some(Step::PricingLocation),
            Step::PricingLocation => Some(Step::Review),
            // Forward from Review is submit, not advance
            Step::Review | Step::Complete => None,
        }
    }

    fn back(self) -> Option<Step> {
        match self {
            Step::PersonalInfo | Step::Complete => None,
            Step::ProfessionalDetails => Some(Step::PersonalInfo),
            Step::PricingLocation => Some(Step::ProfessionalDetails),
            Step::Review => Some(Step::PricingLocation),
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::PersonalInfo
    }
}

/// Errors surfaced by wizard transitions, all recoverable
#[derive(Debug, Error)]
pub enum WizardError {
    /// One entry per failing field, in step-table order
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("submit is only available from the review step")]
    NotAtReview,
    #[error("submission failed: {0}")]
    Gateway(#[from] SubmitError),
}

/// Onboarding wizard state machine
///
/// Holds the single mutable form plus the current step; forward navigation
/// is gated on the active step's required fields, backward navigation is
/// unconditional and never re-validates.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    step: Step,
    form: OnboardingForm,
    submitting: bool,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    /// Mutable access for the data-entry surfaces; fields are only
    /// validation-checked when their owning step gates a transition
    pub fn form_mut(&mut self) -> &mut OnboardingForm {
        &mut self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Progress percentage over the four data-entry steps, capped at 100
    pub fn progress(&self) -> f32 {
        (f32::from(self.step.number()) / 4.0 * 100.0).min(100.0)
    }

    /// Move forward one step after validating the current step's fields
    ///
    /// On failure the step is unchanged and the error carries one message
    /// per offending field. Advancing from Review or Complete is a no-op.
    pub fn advance(&mut self) -> Result<Step, WizardError> {
        let errors = self.check(self.step.required_fields());
        if !errors.is_empty() {
            return Err(WizardError::Invalid(errors));
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move back one step unconditionally; field values are kept
    pub fn retreat(&mut self) -> Step {
        if let Some(back) = self.step.back() {
            self.step = back;
        }
        self.step
    }

    /// Submit the finished profile through the injected gateway
    ///
    /// Only reachable from Review. The full schema is re-validated, the
    /// in-flight flag is held across the gateway call, and on success the
    /// form is cleared and the wizard lands on `Complete`. A gateway error
    /// leaves the form and step untouched for a retry.
    pub async fn submit<G: SubmissionGateway>(
        &mut self,
        gateway: &G,
    ) -> Result<SubmissionReceipt, WizardError> {
        if self.step != Step::Review {
            return Err(WizardError::NotAtReview);
        }

        let errors = self.check(&Field::ALL);
        if !errors.is_empty() {
            return Err(WizardError::Invalid(errors));
        }

        self.submitting = true;
        let result = gateway.submit(self.form.clone()).await;
        self.submitting = false;

        let receipt = result?;
        info!(submission = %receipt.submission_id, "onboarding profile submitted");
        self.form = OnboardingForm::default();
        self.step = Step::Complete;
        Ok(receipt)
    }

    /// Reset to the first step with an empty form ("Submit Another Profile")
    pub fn restart(&mut self) {
        self.step = Step::PersonalInfo;
        self.form = OnboardingForm::default();
        self.submitting = false;
    }

    fn check(&self, fields: &[Field]) -> Vec<FieldError> {
        match self.form.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_errors(&errors, fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockSubmissionGateway;

    fn filled_form() -> OnboardingForm {
        OnboardingForm {
            name: "Sanya Malhotra".to_string(),
            email: "sanya@example.com".to_string(),
            phone: "+91 9876543214".to_string(),
            bio: "Multi-talented performer specializing in fusion of Indian classical and western styles."
                .to_string(),
            categories: vec!["Singers".to_string(), "Dancers".to_string()],
            languages: vec!["Hindi".to_string(), "English".to_string()],
            experience: "5-10".to_string(),
            price_range: "₹30,000 - ₹60,000".to_string(),
            location: "Pune, Maharashtra".to_string(),
            profile_image: None,
        }
    }

    fn wizard_at_review() -> Wizard {
        let mut wizard = Wizard::new();
        *wizard.form_mut() = filled_form();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), Step::Review);
        wizard
    }

    #[test]
    fn starts_at_personal_info() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::PersonalInfo);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn empty_first_step_reports_three_errors_and_stays_put() {
        let mut wizard = Wizard::new();
        let err = wizard.advance().unwrap_err();
        match err {
            WizardError::Invalid(errors) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors[0].field, Field::Name);
                assert_eq!(errors[1].field, Field::Email);
                assert_eq!(errors[2].field, Field::Phone);
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
        assert_eq!(wizard.step(), Step::PersonalInfo);
    }

    #[test]
    fn step_gate_ignores_later_steps_problems() {
        let mut wizard = Wizard::new();
        let form = wizard.form_mut();
        form.name = "Aria Sharma".to_string();
        form.email = "aria@example.com".to_string();
        form.phone = "9876543210".to_string();
        // Bio, categories etc. are still empty and must not block step 1
        assert_eq!(wizard.advance().unwrap(), Step::ProfessionalDetails);
    }

    #[test]
    fn retreat_keeps_entered_values() {
        let mut wizard = Wizard::new();
        *wizard.form_mut() = filled_form();
        wizard.advance().unwrap();
        assert_eq!(wizard.retreat(), Step::PersonalInfo);
        assert_eq!(wizard.form().name, "Sanya Malhotra");
    }

    #[test]
    fn retreat_is_a_noop_on_the_first_step() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.retreat(), Step::PersonalInfo);
    }

    #[test]
    fn retreat_never_validates() {
        let mut wizard = wizard_at_review();
        wizard.form_mut().bio.clear();
        // Invalid bio must not block going backwards
        assert_eq!(wizard.retreat(), Step::PricingLocation);
        assert_eq!(wizard.retreat(), Step::ProfessionalDetails);
    }

    #[test]
    fn advance_at_review_is_a_noop() {
        let mut wizard = wizard_at_review();
        assert_eq!(wizard.advance().unwrap(), Step::Review);
    }

    #[test]
    fn progress_tracks_step_number() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.progress(), 25.0);
        *wizard.form_mut() = filled_form();
        wizard.advance().unwrap();
        assert_eq!(wizard.progress(), 50.0);
    }

    #[test]
    fn submit_requires_the_review_step() {
        let mut wizard = Wizard::new();
        let err = tokio_test::block_on(wizard.submit(&MockSubmissionGateway::instant()));
        assert!(matches!(err, Err(WizardError::NotAtReview)));
    }

    #[test]
    fn submit_rechecks_the_full_schema() {
        let mut wizard = wizard_at_review();
        wizard.form_mut().bio = "too short".to_string();
        let err = tokio_test::block_on(wizard.submit(&MockSubmissionGateway::instant()));
        match err {
            Err(WizardError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::Bio);
            }
            other => panic!("expected validation errors, got {other:?}"),
        }
        assert_eq!(wizard.step(), Step::Review);
    }

    #[tokio::test]
    async fn submit_reaches_the_success_state_with_a_cleared_form() {
        let mut wizard = wizard_at_review();
        let receipt = wizard.submit(&MockSubmissionGateway::instant()).await.unwrap();
        assert!(!receipt.message.is_empty());
        assert_eq!(wizard.step(), Step::Complete);
        assert_eq!(wizard.form(), &OnboardingForm::default());
        assert!(!wizard.is_submitting());
    }

    #[tokio::test]
    async fn restart_returns_to_an_empty_first_step() {
        let mut wizard = wizard_at_review();
        wizard.submit(&MockSubmissionGateway::instant()).await.unwrap();
        wizard.restart();
        assert_eq!(wizard.step(), Step::PersonalInfo);
        assert!(wizard.form().name.is_empty());
    }
}
