// Model exports
pub mod domain;
pub mod form;

pub use domain::{
    Artist, Category, FilterSelection, StatusNotice, Submission, SubmissionFilter,
    SubmissionStatus,
};
pub use form::{field_errors, Field, FieldError, OnboardingForm};
