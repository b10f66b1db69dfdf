// File: crates/sales-core/src/chart.rs
// Summary: Chart base (config + surface + selection), the ChartVariant contract and the chart-type factory.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::charts::{Area, Bar, Line, Pie, Scatter};
use crate::dataset::{Dataset, DatasetState};
use crate::error::{ChartError, ChartResult};
use crate::surface::{Frame, Surface};
use crate::theme::Theme;
use crate::types::ChartConfig;
use crate::view::{DerivedView, NoData, UpdateOutcome};

/// Chart-type token accepted by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Area,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [ChartKind::Line, ChartKind::Bar, ChartKind::Scatter, ChartKind::Pie, ChartKind::Area];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| ChartError::UnknownChartType(token.to_string()))
    }
}

/// Two-phase contract every chart variant implements.
///
/// `update` is pure: the same dataset and selection always give the same
/// view. `render` draws a view onto an already-cleared frame.
pub trait ChartVariant {
    const KIND: ChartKind;
    type Selection: Clone + Default + fmt::Debug + PartialEq + 'static;
    type View: Clone + fmt::Debug + Into<DerivedView> + 'static;

    fn update(data: &Dataset, selection: &Self::Selection) -> Result<Self::View, NoData>;

    /// Draw in order: title, axes, marks, legend, selectors (tooltips ride on the marks).
    fn render(view: &Self::View, selection: &Self::Selection, data: &Dataset, frame: &mut Frame<'_>);

    /// New selection with `selector` set to `value` and every other field kept.
    fn select(selection: &Self::Selection, selector: &str, value: &str) -> ChartResult<Self::Selection>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    SurfaceUnavailable,
}

/// A chart variant bound to its config, surface and current selection.
pub struct Chart<V: ChartVariant> {
    config: ChartConfig,
    data: Arc<DatasetState>,
    surface: Option<Surface>,
    selection: V::Selection,
    _variant: PhantomData<V>,
}

impl<V: ChartVariant> Chart<V> {
    /// Establish the surface without drawing anything.
    pub fn init(config: ChartConfig, theme: Theme, data: Arc<DatasetState>) -> Self {
        let surface = Surface::new(&config, theme);
        debug!(
            chart = %V::KIND,
            width = surface.inner_width,
            height = surface.inner_height,
            "chart surface ready"
        );
        Self { config, data, surface: Some(surface), selection: V::Selection::default(), _variant: PhantomData }
    }

    /// Establish the surface and run the first update with the default selection.
    pub fn new(config: ChartConfig, theme: Theme, data: Arc<DatasetState>) -> Self {
        let mut chart = Self::init(config, theme, data);
        chart.update(V::Selection::default());
        chart
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    /// Selection of the last successful draw.
    pub fn selection(&self) -> &V::Selection { &self.selection }

    pub fn surface(&self) -> Option<&Surface> { self.surface.as_ref() }

    /// Recompute the view for `selection` and redraw. Soft failures leave the
    /// surface and the stored selection untouched; a view that could not be
    /// drawn comes back as `SurfaceUnavailable`.
    pub fn update(&mut self, selection: V::Selection) -> UpdateOutcome {
        let data = match self.data.as_ref() {
            DatasetState::Ready(ds) => ds,
            DatasetState::Failed(err) => {
                error!(chart = %V::KIND, error = %err, "no data available: dataset failed to load");
                return UpdateOutcome::LoadFailed(err.to_string());
            }
        };

        let view = match V::update(data, &selection) {
            Ok(view) => view,
            Err(reason) => {
                warn!(chart = %V::KIND, selection = ?selection, "{reason}");
                return UpdateOutcome::NoData(reason);
            }
        };
        debug!(chart = %V::KIND, selection = ?selection, "derived view computed");

        match self.render(&view, &selection) {
            RenderOutcome::Drawn => {
                self.selection = selection;
                UpdateOutcome::Ready(view.into())
            }
            RenderOutcome::SurfaceUnavailable => UpdateOutcome::SurfaceUnavailable(view.into()),
        }
    }

    /// Clear the surface and draw `view`.
    pub fn render(&mut self, view: &V::View, selection: &V::Selection) -> RenderOutcome {
        let Some(surface) = self.surface.as_mut() else {
            warn!(chart = %V::KIND, "surface is unavailable; skipping render");
            return RenderOutcome::SurfaceUnavailable;
        };
        let DatasetState::Ready(data) = self.data.as_ref() else {
            return RenderOutcome::SurfaceUnavailable;
        };
        surface.clear();
        V::render(view, selection, data, &mut surface.frame());
        debug!(chart = %V::KIND, nodes = surface.nodes().len(), "surface redrawn");
        RenderOutcome::Drawn
    }

    /// Apply a selector change on top of the current selection.
    pub fn select(&mut self, selector: &str, value: &str) -> ChartResult<UpdateOutcome> {
        let next = V::select(&self.selection, selector, value).inspect_err(|err| {
            warn!(chart = %V::KIND, error = %err, "selector change rejected");
        })?;
        Ok(self.update(next))
    }

    /// Set the surface opacity (used by the host while fading).
    pub fn set_opacity(&mut self, opacity: f64) {
        if let Some(surface) = self.surface.as_mut() {
            surface.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    /// Detach and return the surface; later renders become no-ops.
    pub fn dispose(&mut self) -> Option<Surface> {
        self.surface.take()
    }
}

/// Object-safe view of a chart, used by the host to hold any variant.
pub trait ActiveChart {
    fn kind(&self) -> ChartKind;
    /// Re-run update + render with the current selection.
    fn refresh(&mut self) -> UpdateOutcome;
    fn select(&mut self, selector: &str, value: &str) -> ChartResult<UpdateOutcome>;
    fn surface(&self) -> Option<&Surface>;
    fn set_opacity(&mut self, opacity: f64);
    fn dispose(&mut self) -> Option<Surface>;
    /// Debug rendering of the current selection.
    fn describe_selection(&self) -> String;
}

impl<V: ChartVariant> ActiveChart for Chart<V> {
    fn kind(&self) -> ChartKind { V::KIND }

    fn refresh(&mut self) -> UpdateOutcome {
        let selection = self.selection.clone();
        self.update(selection)
    }

    fn select(&mut self, selector: &str, value: &str) -> ChartResult<UpdateOutcome> {
        Chart::select(self, selector, value)
    }

    fn surface(&self) -> Option<&Surface> { Chart::surface(self) }

    fn set_opacity(&mut self, opacity: f64) { Chart::set_opacity(self, opacity) }

    fn dispose(&mut self) -> Option<Surface> { Chart::dispose(self) }

    fn describe_selection(&self) -> String { format!("{:?}", self.selection) }
}

/// Construct the variant for `kind` and run its initial update + render
/// with the default selection.
pub fn build_chart(
    kind: ChartKind,
    config: ChartConfig,
    theme: Theme,
    data: Arc<DatasetState>,
) -> (Box<dyn ActiveChart>, UpdateOutcome) {
    fn boxed<V: ChartVariant + 'static>(
        config: ChartConfig,
        theme: Theme,
        data: Arc<DatasetState>,
    ) -> (Box<dyn ActiveChart>, UpdateOutcome) {
        let mut chart = Chart::<V>::init(config, theme, data);
        let outcome = chart.update(V::Selection::default());
        (Box::new(chart), outcome)
    }

    match kind {
        ChartKind::Bar => boxed::<Bar>(config, theme, data),
        ChartKind::Line => boxed::<Line>(config, theme, data),
        ChartKind::Area => boxed::<Area>(config, theme, data),
        ChartKind::Pie => boxed::<Pie>(config, theme, data),
        ChartKind::Scatter => boxed::<Scatter>(config, theme, data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_tokens_parse_case_insensitively() {
        assert_eq!("Pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert_eq!(" area ".parse::<ChartKind>().unwrap(), ChartKind::Area);
        assert!(matches!("donut".parse::<ChartKind>(), Err(ChartError::UnknownChartType(t)) if t == "donut"));
    }

    #[test]
    fn every_kind_round_trips_through_its_token() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.as_str().parse::<ChartKind>().unwrap(), kind);
        }
    }
}
