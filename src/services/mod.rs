// Service exports
pub mod gateway;

pub use gateway::{MockSubmissionGateway, SubmissionGateway, SubmissionReceipt, SubmitError};
