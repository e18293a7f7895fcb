pub mod pattern;
pub mod submission_scanner;

pub use pattern::{Submission, SubmissionPattern, CORRECTED_SUFFIX};
pub use submission_scanner::SubmissionScanner;
