/// Expose build metadata to the `version` command.
///
/// `TARGET` and `PROFILE` are only visible to build scripts, so they are
/// forwarded as compile-time environment variables.
fn main() {
    for key in ["TARGET", "PROFILE"] {
        let value = std::env::var(key).unwrap_or_else(|_| "unknown".to_string());
        println!("cargo:rustc-env=ROSTER_BUILD_{key}={value}");
    }
}
