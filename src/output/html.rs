//! HTML table renderer.
//!
//! Every column header links back to the listing page with its field as
//! the `sortOrder` parameter; the active column carries `aria-sort`.

use crate::constants::{SORT_QUERY_PARAM, USERS_PATH};
use crate::models::{SortKey, UserTable};
use crate::output::TableRenderer;

/// HTML `<table>` fragment renderer.
pub struct HtmlRenderer;

impl TableRenderer for HtmlRenderer {
    fn render(&self, table: &UserTable) -> String {
        let mut output = String::new();
        output.push_str("<table class=\"table table-zebra\">\n");
        output.push_str("  <thead>\n    <tr>\n");

        for key in SortKey::ALL {
            let aria = if key == table.sort_order {
                " aria-sort=\"ascending\""
            } else {
                ""
            };
            output.push_str(&format!(
                "      <th{aria}><a href=\"{}\">{}</a></th>\n",
                sort_href(key),
                key.label()
            ));
        }

        output.push_str("    </tr>\n  </thead>\n  <tbody>\n");

        for user in &table.users {
            output.push_str("    <tr>\n");
            output.push_str(&format!("      <td>{}</td>\n", user.id));
            output.push_str(&format!("      <td>{}</td>\n", escape(&user.name)));
            output.push_str(&format!("      <td>{}</td>\n", escape(&user.email)));
            output.push_str("    </tr>\n");
        }

        output.push_str("  </tbody>\n</table>\n");
        output
    }
}

/// Link target that re-requests the listing sorted by `key`.
pub fn sort_href(key: SortKey) -> String {
    format!("{USERS_PATH}?{SORT_QUERY_PARAM}={}", key.as_str())
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
