// Core logic exports
pub mod directory;
pub mod filters;
pub mod submissions;
pub mod wizard;

pub use directory::Directory;
pub use filters::{
    matches_categories, matches_location, matches_price, matches_query, matches_selection,
    matches_submission,
};
pub use submissions::{ReviewError, SubmissionQueue};
pub use wizard::{Step, Wizard, WizardError};
