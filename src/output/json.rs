//! JSON output renderer.
//!
//! Outputs `{"sort_order": "...", "users": [...]}`.

use crate::models::UserTable;
use crate::output::TableRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl TableRenderer for JsonRenderer {
    fn render(&self, table: &UserTable) -> String {
        serde_json::to_string_pretty(table).unwrap_or_else(|_| "{}".to_string())
    }
}
