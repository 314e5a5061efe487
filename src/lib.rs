//! roster — server-rendered user directory (library crate).
//!
//! Re-exports public modules for integration tests and the binary.

pub mod config;
pub mod constants;
pub mod env;
pub mod fetch;
pub mod models;
pub mod output;
pub mod pages;
pub mod server;
