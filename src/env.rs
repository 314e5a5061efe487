//! Environment variable abstraction for testability.
//!
//! The binary uses [`Env::real()`], which reads the process environment.
//! Config tests use [`Env::mock()`] so `ROSTER_*` overrides can be
//! exercised without touching global process state.

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Read only from the given key-value pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable. Empty values count as unset.
    pub fn var(&self, name: &str) -> Result<String, std::env::VarError> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned().ok_or(std::env::VarError::NotPresent)?,
            None => std::env::var(name)?,
        };
        if value.is_empty() {
            return Err(std::env::VarError::NotPresent);
        }
        Ok(value)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::real()
    }
}
