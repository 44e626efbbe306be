//! Dashboard configuration for the web bundle.
//!
//! The embedded default can be replaced at build time by setting
//! `DASHBOARD_CONFIG` to a TOML document.

use contracts::shared::config::{load_config, DashboardConfig};
use leptos::prelude::*;

pub fn load_app_config() -> DashboardConfig {
    match load_config(option_env!("DASHBOARD_CONFIG")) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid DASHBOARD_CONFIG, using defaults: {}", e);
            DashboardConfig::default()
        }
    }
}

/// Configuration provided by `App`, or the default when rendered standalone.
pub fn use_app_config() -> DashboardConfig {
    use_context::<DashboardConfig>().unwrap_or_else(load_app_config)
}
