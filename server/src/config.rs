//! Process configuration for the SSR host.
//!
//! Only the listen port lives here. Client settings (`SIGNAL402_*`) are read
//! by the app itself during server render.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors that stop the server before it binds.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Parse `PORT`, falling back to [`DEFAULT_PORT`] when unset or blank.
///
/// # Errors
///
/// Returns [`ServerError::InvalidPort`] for anything that is not a `u16`.
pub fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ServerError::InvalidPort(value.to_owned())),
    }
}
