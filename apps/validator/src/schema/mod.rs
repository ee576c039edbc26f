pub mod date;
pub mod resume;
