pub mod checks;
pub mod engine;
pub mod rules;

use chrono::NaiveDate;

use crate::schema::resume::Resume;
pub use engine::Violation;

/// Runs the full constraint pass over a decoded resume. `now` is the
/// reference date for the not-in-the-future rules; callers pass today's
/// date, tests pass a fixed one. An empty list means the document is valid.
pub fn validate_resume(resume: &Resume, now: NaiveDate) -> Vec<Violation> {
    engine::validate(resume, now)
}
