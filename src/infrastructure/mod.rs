//! Infrastructure layer - Persistence

pub mod repository;
pub mod store;

pub use repository::{EntryRepository, TagCount};
pub use store::JsonStore;
