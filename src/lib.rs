//! Artistly Core - filtering and onboarding logic for the Artistly
//! booking marketplace.
//!
//! Two independent units make up the crate: the directory filter engine
//! (visible artist/submission subsets from a free-text query plus a
//! structured selection) and the onboarding wizard state machine
//! (step-gated form validation ending in a gateway submission).

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{Directory, ReviewError, Step, SubmissionQueue, Wizard, WizardError};
pub use models::{
    Artist, Category, Field, FieldError, FilterSelection, OnboardingForm, StatusNotice,
    Submission, SubmissionFilter, SubmissionStatus,
};
pub use services::{MockSubmissionGateway, SubmissionGateway, SubmissionReceipt, SubmitError};
