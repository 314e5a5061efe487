//! Page-level entry points.
//!
//! Each page is a complete HTML document. The users page is the only one
//! that touches the network: one fetch, one sort, one render.

use tracing::debug;

use crate::constants::USERS_PATH;
use crate::fetch::{FetchError, FetchOptions, UserSource};
use crate::models::{SortKey, UserTable};
use crate::output::TableRenderer;
use crate::output::html::{HtmlRenderer, escape};

/// Fetch users and sort them by `sort_order`.
pub async fn load_table(
    source: &dyn UserSource,
    options: FetchOptions,
    sort_order: SortKey,
) -> Result<UserTable, FetchError> {
    let users = source.fetch_users(options).await?;
    debug!(count = users.len(), %sort_order, "sorting users");
    Ok(UserTable::new(users, sort_order))
}

/// The sortable user listing.
pub async fn users_page(
    source: &dyn UserSource,
    options: FetchOptions,
    sort_order: SortKey,
) -> Result<String, FetchError> {
    let table = load_table(source, options, sort_order).await?;
    Ok(render_users_page(&table))
}

/// Render an already-loaded table as the listing document.
pub fn render_users_page(table: &UserTable) -> String {
    let mut body = String::from("<h1>Users List</h1>\n");
    body.push_str(&HtmlRenderer.render(table));
    document("Users", &body)
}

/// Landing page with a link to the listing.
pub fn landing_page() -> String {
    let body = format!("<h1>Hello World!</h1>\n<a class=\"btn\" href=\"{USERS_PATH}\">Users</a>\n");
    document("Home", &body)
}

/// Shown in place of the listing when the user API can't be reached.
pub fn fetch_error_page() -> String {
    let body = "<h1>Users List</h1>\n\
                <p role=\"alert\">Could not load users. Please try again later.</p>\n\
                <a href=\"/\">Home</a>\n";
    document("Users unavailable", body)
}

pub fn not_found_page() -> String {
    document("Not found", "<h1>Not found</h1>\n<a href=\"/\">Home</a>\n")
}

/// Wrap `body` in a minimal HTML document.
fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         </head>\n\
         <body>\n\
         <main>\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        escape(title)
    )
}
