//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USERFORM_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::LanguagePolicy;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Runtime settings for the user form server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERFORM")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it records live in memory only.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Reject languages outside the offered choices.
    #[ortho_config(default = false)]
    pub restrict_languages: bool,
}

impl AppSettings {
    /// Configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Database URL, treating a blank value as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to 10 connections.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// `Restricted` when `restrict_languages` is set, otherwise `Open`.
    pub fn language_policy(&self) -> LanguagePolicy {
        LanguagePolicy::from_restricted(self.restrict_languages)
    }
}
