//! Kouketsu - fills in the off-campus absence form
//!
//! The desktop window collects the student's details, looks up dependent
//! fields in the reference tables, and draws everything onto both halves of
//! the scanned form image.

pub mod config;
pub mod form;
pub mod generate;
pub mod reference;
pub mod ui;

pub use config::AppConfig;
pub use form::{FormState, Transport};
pub use generate::generate;
pub use reference::{ReferenceTables, Student, Subject};
