//! # Configuration
//!
//! A minimal string key/value store, the same shape the HTTP layer and
//! the server read their settings from.
//!
//! ```rust
//! use momantza_core::TenancyConfig;
//! let mut cfg = TenancyConfig::new();
//!
//! cfg.set("frontend.origin", "https://app.momantza.com");
//! assert_eq!(cfg.get("frontend.origin"), Some("https://app.momantza.com"));
//! ```
//!
//! ## Environment overrides
//!
//! [`TenancyConfig::load_env`] copies every variable that starts with a
//! prefix into the store, lower-casing it and turning `__` into `.`:
//!
//! ```bash
//! export MOMANTZA__FRONTEND__ORIGIN=https://app.momantza.com   # frontend.origin
//! export MOMANTZA__HTTP__PORT=8080                             # http.port
//! ```

use std::collections::HashMap;

/// Redirect target for root-path tenant navigation.
pub const FRONTEND_ORIGIN: &str = "frontend.origin";
pub const HTTP_HOST: &str = "http.host";
pub const HTTP_PORT: &str = "http.port";
/// Optional path to a JSON array of tenant records.
pub const TENANTS_SEED: &str = "tenants.seed";

pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Default, Clone)]
pub struct TenancyConfig {
    values: HashMap<String, String>,
}

impl TenancyConfig {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Defaults for every key the workspace reads.
    pub fn with_defaults() -> Self {
        let mut cfg = Self::new();
        cfg.set(HTTP_HOST, "127.0.0.1");
        cfg.set(HTTP_PORT, "5000");
        cfg.set(FRONTEND_ORIGIN, DEFAULT_FRONTEND_ORIGIN);
        cfg
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    /// Overlay environment variables named `{prefix}__A__B` as `a.b`.
    pub fn load_env(&mut self, prefix: &str) {
        self.load_vars(prefix, std::env::vars());
    }

    pub(crate) fn load_vars<I>(&mut self, prefix: &str, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let prefix = format!("{prefix}__");
        for (key, value) in vars {
            if let Some(stripped) = key.strip_prefix(&prefix) {
                let normalized = stripped.to_lowercase().replace("__", ".");
                self.set(normalized, value);
            }
        }
    }

    pub fn snapshot(&self) -> TenancyConfigSnapshot {
        TenancyConfigSnapshot::new(self.values.clone())
    }
}

/// Read-only copy of a [`TenancyConfig`], cheap to hand to request handlers.
#[derive(Debug, Clone, Default)]
pub struct TenancyConfigSnapshot {
    map: HashMap<String, String>,
}

impl TenancyConfigSnapshot {
    pub(crate) fn new(map: HashMap<String, String>) -> Self {
        Self { map }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn frontend_origin(&self) -> &str {
        self.get(FRONTEND_ORIGIN).unwrap_or(DEFAULT_FRONTEND_ORIGIN)
    }
}
