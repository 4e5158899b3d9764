use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Artist onboarding form, filled in incrementally across the wizard steps
///
/// The validation attributes are the full field-level schema; step gating
/// applies the same rules to a per-step subset of fields (see
/// [`crate::core::wizard::Step::required_fields`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct OnboardingForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,
    #[validate(length(min = 50, message = "Bio must be at least 50 characters"))]
    pub bio: String,
    /// Category display labels the artist performs under, at least one
    #[validate(length(min = 1, message = "Select at least one category"))]
    pub categories: Vec<String>,
    #[validate(length(min = 1, message = "Select at least one language"))]
    pub languages: Vec<String>,
    #[validate(length(min = 1, message = "Experience is required"))]
    pub experience: String,
    #[validate(length(min = 1, message = "Select a price range"))]
    #[serde(rename = "priceRange")]
    pub price_range: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Optional, no constraint
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
}

/// Typed handle for each form field
///
/// Replaces the stringly-typed field lookups of a dynamic form layer with a
/// static enum the step table can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Bio,
    Categories,
    Languages,
    Experience,
    PriceRange,
    Location,
    ProfileImage,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Bio,
        Field::Categories,
        Field::Languages,
        Field::Experience,
        Field::PriceRange,
        Field::Location,
        Field::ProfileImage,
    ];

    /// Key under which `validator` reports errors for this field
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Bio => "bio",
            Field::Categories => "categories",
            Field::Languages => "languages",
            Field::Experience => "experience",
            Field::PriceRange => "price_range",
            Field::Location => "location",
            Field::ProfileImage => "profile_image",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Single failed field with its user-facing message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Collect the errors for `fields` out of a full-schema validation run
///
/// Output order follows `fields`, one entry per failing field (first
/// message wins when a field carries several). Fields outside the slice
/// are ignored, so a step never surfaces another step's problems.
pub fn field_errors(errors: &ValidationErrors, fields: &[Field]) -> Vec<FieldError> {
    let by_field = errors.field_errors();
    fields
        .iter()
        .filter_map(|&field| {
            by_field
                .get(field.key())
                .and_then(|list| list.first())
                .map(|err| FieldError {
                    field,
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
        })
        .collect()
}
