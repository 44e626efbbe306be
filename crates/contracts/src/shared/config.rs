use crate::shared::summary::RangeMode;
use crate::shared::tabular::DEFAULT_ROWS_PER_PAGE;
use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend origin, e.g. "http://localhost:5000". Empty means same origin.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    pub rows_per_page: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Fixed offset used for every day boundary, in minutes east of UTC.
    pub utc_offset_minutes: i32,
    pub default_mode: RangeMode,
}

impl SummaryConfig {
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| {
            log::warn!(
                "utc_offset_minutes={} out of range, using UTC",
                self.utc_offset_minutes
            );
            Utc.fix()
        })
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[table]
rows_per_page = 10
page_size_options = [10, 25, 50, 100]

[summary]
utc_offset_minutes = 0
default_mode = "day"
"#;

/// Parses the dashboard configuration.
///
/// `override_toml` (usually baked in at build time) replaces the embedded
/// default; sections and keys it omits keep their defaults.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<DashboardConfig> {
    let source = match override_toml {
        Some(text) if !text.trim().is_empty() => text,
        _ => DEFAULT_CONFIG,
    };
    let mut config: DashboardConfig = toml::from_str(source)?;

    if config.table.rows_per_page == 0 {
        anyhow::bail!("table.rows_per_page must be positive");
    }
    config.table.page_size_options.retain(|&size| size > 0);
    if !config.table.page_size_options.contains(&config.table.rows_per_page) {
        config.table.page_size_options.push(config.table.rows_per_page);
        config.table.page_size_options.sort_unstable();
    }
    Ok(config)
}
