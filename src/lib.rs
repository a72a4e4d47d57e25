//! reflekt - Terminal journaling application
//!
//! A command-line journal that stores entries locally as JSON records,
//! with mood tracking, tag-based filtering, writing streaks and simple
//! analytics over past entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReflektError;
