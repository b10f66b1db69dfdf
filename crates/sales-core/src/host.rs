// File: crates/sales-core/src/host.rs
// Summary: Chart host; owns the shared dataset and swaps the active chart with a fade transition.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::chart::{build_chart, ActiveChart, ChartKind};
use crate::config::HostConfig;
use crate::dataset::DatasetState;
use crate::error::{ChartError, ChartResult};
use crate::surface::Surface;
use crate::view::UpdateOutcome;

/// Container the active chart is mounted in.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    pub opacity: f64,
    pub transition: Duration,
}

pub struct ChartHost {
    config: HostConfig,
    data: Arc<DatasetState>,
    container: Container,
    active: Option<Box<dyn ActiveChart>>,
}

impl ChartHost {
    pub fn new(config: HostConfig, data: Arc<DatasetState>) -> Self {
        let container = Container { opacity: 1.0, transition: config.transition() };
        Self { config, data, container, active: None }
    }

    pub fn config(&self) -> &HostConfig { &self.config }
    pub fn data(&self) -> &Arc<DatasetState> { &self.data }
    pub fn container(&self) -> &Container { &self.container }

    pub fn active(&self) -> Option<&dyn ActiveChart> { self.active.as_deref() }

    pub fn active_mut(&mut self) -> Option<&mut (dyn ActiveChart + 'static)> {
        self.active.as_deref_mut()
    }

    /// Show the configured default chart.
    pub fn load_default(&mut self) -> ChartResult<UpdateOutcome> {
        let token = self.config.default_chart.clone();
        self.load_chart(&token)
    }

    /// Swap to the chart named by `token`: fade out and dispose the current
    /// chart, build the new one while hidden, then fade in.
    ///
    /// An unknown token is logged and returned; the container stays hidden and empty.
    pub fn load_chart(&mut self, token: &str) -> ChartResult<UpdateOutcome> {
        self.fade_out();
        let outcome = self.mount(token)?;
        self.fade_in();
        Ok(outcome)
    }

    /// Hide the container and dispose the active chart.
    pub fn fade_out(&mut self) {
        self.container.opacity = 0.0;
        self.unmount();
    }

    /// Build the chart named by `token` (first update + render) at the
    /// container's current opacity, replacing any chart still mounted.
    pub fn mount(&mut self, token: &str) -> ChartResult<UpdateOutcome> {
        self.unmount();
        let kind = token.parse::<ChartKind>().inspect_err(|err| {
            error!(error = %err, "unknown chart type");
        })?;

        let (mut chart, outcome) =
            build_chart(kind, self.config.chart.clone(), self.config.theme(), Arc::clone(&self.data));
        chart.set_opacity(self.container.opacity);
        info!(chart = %kind, ready = outcome.is_ready(), "chart loaded");
        self.active = Some(chart);
        Ok(outcome)
    }

    /// Reveal the container and the mounted chart.
    pub fn fade_in(&mut self) {
        self.container.opacity = 1.0;
        if let Some(chart) = self.active.as_deref_mut() {
            chart.set_opacity(1.0);
        }
        debug!(transition_ms = self.container.transition.as_millis() as u64, "container shown");
    }

    fn unmount(&mut self) {
        if let Some(mut previous) = self.active.take() {
            debug!(chart = %previous.kind(), "disposing chart");
            previous.dispose();
        }
    }

    /// Forward a selector change to the active chart.
    pub fn select(&mut self, selector: &str, value: &str) -> ChartResult<UpdateOutcome> {
        match self.active.as_deref_mut() {
            Some(chart) => chart.select(selector, value),
            None => Err(ChartError::UnknownSelector(selector.to_string())),
        }
    }

    /// The active chart's surface, if a chart is shown.
    pub fn surface(&self) -> Option<&Surface> {
        self.active.as_deref().and_then(|c| c.surface())
    }

    /// Current container as a standalone SVG document; `None` when empty.
    pub fn export_svg(&self) -> Option<String> {
        self.surface()
            .map(|s| crate::svg::to_svg_string(s, Some(self.container.transition)))
    }
}
