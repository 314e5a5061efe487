//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and default endpoints so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "roster";

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target triple the binary was compiled for.
pub const TARGET: &str = env!("ROSTER_BUILD_TARGET");

/// Cargo profile the binary was compiled with.
pub const PROFILE: &str = env!("ROSTER_BUILD_PROFILE");

/// `User-Agent` sent with outbound requests.
pub const USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Local config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "roster.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "roster";

/// Remote endpoint serving the user collection.
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Path of the user listing page.
pub const USERS_PATH: &str = "/users";

/// Query parameter selecting the sort key on the listing page.
pub const SORT_QUERY_PARAM: &str = "sortOrder";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_HOST: &str = "ROSTER_HOST";
pub const ENV_PORT: &str = "ROSTER_PORT";
pub const ENV_USERS_URL: &str = "ROSTER_USERS_URL";
pub const ENV_CACHE: &str = "ROSTER_CACHE";
pub const ENV_TIMEOUT_SECS: &str = "ROSTER_TIMEOUT_SECS";
