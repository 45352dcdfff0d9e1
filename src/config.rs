//! Client configuration resolved from environment-style keys.
//!
//! The browser bundle has no process environment, so hydrate builds bake the
//! values in at compile time with `option_env!`. SSR reads them from the
//! process environment at startup. Both paths feed the same pure parser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const BACKEND_URL_KEY: &str = "SIGNAL402_BACKEND_URL";
pub const VAULT_ADDRESS_KEY: &str = "SIGNAL402_VAULT_ADDRESS";
pub const RPC_URL_KEY: &str = "SIGNAL402_RPC_URL";

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Errors produced when a required configuration value is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing config: {key} not set")]
    Missing { key: &'static str },
}

/// Typed client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the signal backend, without a trailing slash.
    pub backend_url: Option<String>,
    /// Raw base58 vault address that receives reveal payments. Validated
    /// when a transfer is built, not here.
    pub vault_address: Option<String>,
    /// JSON-RPC endpoint of the chain.
    pub rpc_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: None,
            vault_address: None,
            rpc_url: DEFAULT_RPC_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build a config from any key lookup.
    ///
    /// Empty or whitespace-only values are treated as unset. URLs lose any
    /// trailing `/`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        Self {
            backend_url: read(BACKEND_URL_KEY).map(|v| v.trim_end_matches('/').to_owned()),
            vault_address: read(VAULT_ADDRESS_KEY),
            rpc_url: read(RPC_URL_KEY)
                .map_or_else(|| DEFAULT_RPC_URL.to_owned(), |v| v.trim_end_matches('/').to_owned()),
        }
    }

    /// Resolve the config for the current build target.
    pub fn from_env() -> Self {
        #[cfg(feature = "hydrate")]
        {
            Self::from_lookup(|key| {
                let baked = match key {
                    BACKEND_URL_KEY => option_env!("SIGNAL402_BACKEND_URL"),
                    VAULT_ADDRESS_KEY => option_env!("SIGNAL402_VAULT_ADDRESS"),
                    RPC_URL_KEY => option_env!("SIGNAL402_RPC_URL"),
                    _ => None,
                };
                baked.map(str::to_owned)
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
    }

    /// Backend base URL, or an error naming the missing key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when no backend URL is configured.
    pub fn require_backend_url(&self) -> Result<&str, ConfigError> {
        self.backend_url
            .as_deref()
            .ok_or(ConfigError::Missing { key: BACKEND_URL_KEY })
    }
}
