//! Terminal output formatting

pub mod display;
pub mod formatters;
