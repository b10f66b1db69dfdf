// File: crates/sales-core/src/config.rs
// Summary: Host configuration (chart sizing, transition, default chart, theme) loadable from TOML.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::chart::ChartKind;
use crate::error::ChartError;
use crate::theme::{self, Theme};
use crate::types::ChartConfig;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub chart: ChartConfig,
    /// Fade duration applied when swapping charts, in milliseconds.
    pub transition_ms: u64,
    /// Chart shown once the data has loaded.
    pub default_chart: String,
    pub theme: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            chart: ChartConfig::new("chart").with_size(700, 430),
            transition_ms: 500,
            default_chart: ChartKind::Area.as_str().to_string(),
            theme: "dashboard".to_string(),
        }
    }
}

impl HostConfig {
    /// Parse TOML; missing keys keep their defaults.
    ///
    /// ```toml
    /// transition_ms = 250
    /// theme = "light"
    ///
    /// [chart]
    /// container_width = 800
    /// margin = { top = 10, right = 10, bottom = 30, left = 50 }
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let cfg: HostConfig = toml::from_str(s).map_err(|e| ChartError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        let c = &self.chart;
        if c.parent_element.trim().is_empty() {
            return Err(ChartError::Config("chart.parent_element must not be empty".into()));
        }
        if c.container_width <= c.margin.hsum() || c.container_height <= c.margin.vsum() {
            return Err(ChartError::Config(format!(
                "container {}x{} leaves no room inside margins",
                c.container_width, c.container_height
            )));
        }
        self.default_chart.parse::<ChartKind>()?;
        Ok(())
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
