//! Shared types used across all modules.
//!
//! This module defines the user record, the sort key, and the sorted
//! table handed to renderers. Other modules import from here rather
//! than reaching into each other's internals.

pub mod sort;
pub mod table;
pub mod user;

pub use sort::{SortKey, sort_users};
pub use table::UserTable;
pub use user::User;
