use std::env;

use tracing::warn;

/// How the catalog store is populated at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Load the fixed seed catalog; otherwise start empty
    pub seed: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_SEED: "true"/"false" (default: "true")
    pub fn from_env() -> Self {
        Self {
            seed: parse_flag(env::var("CATALOG_SEED").ok().as_deref(), true),
        }
    }
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            warn!("Unrecognized boolean '{}', using default {}", other, default);
            default
        }
    }
}
