//! Output renderers for the sorted user table: HTML, JSON, terminal.

pub mod html;
pub mod json;
pub mod terminal;

use crate::models::UserTable;

/// Trait for rendering a user table to an output format.
pub trait TableRenderer {
    /// Render the table to a string.
    fn render(&self, table: &UserTable) -> String;
}
