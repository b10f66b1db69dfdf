// File: crates/sales-core/src/charts/mod.rs
// Summary: Chart variants plus the year-series aggregation and layout they share.

mod area;
mod bar;
mod line;
mod pie;
mod scatter;

pub use area::Area;
pub use bar::Bar;
pub use line::Line;
pub use pie::Pie;
pub use scatter::Scatter;

use indexmap::IndexMap;

use crate::axis::Axis;
use crate::dataset::{Dataset, Record};
use crate::error::ChartError;
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};
use crate::surface::{Frame, Selector};
use crate::types::Margin;
use crate::view::{NoData, YearSeries, YearValue};

/// Padding between the frame edge and the plot area of axis-based charts.
const PLOT_MARGIN: Margin = Margin::new(20, 50, 30, 50);

/// Filter to `category`, sort by year (stable, ascending) and sum `amount`
/// per year in first-appearance order.
pub(crate) fn sum_by_year(
    data: &Dataset,
    category: &str,
    amount: impl Fn(&Record) -> f64,
) -> Result<YearSeries, NoData> {
    if data.is_empty() {
        return Err(NoData::EmptyDataset);
    }
    let filter = || format!("category {category}");

    let mut filtered = data.records().iter().filter(|r| r.category == category).collect::<Vec<_>>();
    if filtered.is_empty() {
        return Err(NoData::NoMatches { filter: filter() });
    }
    filtered.sort_by(|a, b| a.year.cmp(&b.year));

    let mut groups: IndexMap<&str, f64> = IndexMap::new();
    for r in filtered {
        *groups.entry(r.year.as_str()).or_insert(0.0) += amount(r);
    }
    let series = groups
        .into_iter()
        .map(|(year, value)| YearValue { year: year.to_string(), value })
        .collect::<Vec<_>>();
    if series.is_empty() {
        return Err(NoData::EmptyView { filter: filter() });
    }
    Ok(series)
}

/// Linear scale from `min(0, values)` to `max(0, values)`, mapped onto `[r0, r1]`.
pub(crate) fn value_scale(values: impl Iterator<Item = f64>, r0: f64, r1: f64) -> LinearScale {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((0.0f64, 0.0f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    LinearScale::new(lo, hi, r0, r1).nice(10)
}

/// Band-x / linear-y plot area shared by the bar, line and area charts.
pub(crate) struct YearPlot {
    pub x: BandScale,
    pub y: LinearScale,
    /// Plot width/height (frame size minus plot margins).
    pub width: f64,
    pub height: f64,
}

impl YearPlot {
    pub fn new(series: &[YearValue], frame: &Frame<'_>) -> Self {
        let width = (frame.width - PLOT_MARGIN.hsum() as f64).max(1.0);
        let height = (frame.height - PLOT_MARGIN.vsum() as f64).max(1.0);
        let x = BandScale::new(series.iter().map(|d| d.year.clone()).collect(), 0.0, width, 0.1);
        let y = value_scale(series.iter().map(|d| d.value), height, 0.0);
        Self { x, y, width, height }
    }

    pub fn left(&self) -> f64 { PLOT_MARGIN.left as f64 }
    pub fn top(&self) -> f64 { PLOT_MARGIN.top as f64 }

    /// Right-hand column where legends and selectors go.
    pub fn side(&self) -> f64 { self.width + self.left() }

    pub fn draw_axes(&self, frame: &mut Frame<'_>) {
        let baseline = self.y.map(0.0) + self.top();
        Axis::band_bottom(&self.x, Point::new(self.left(), baseline), self.width).draw(frame);
        Axis::linear_left(&self.y, Point::new(self.left(), self.top()), self.height).draw(frame);
    }

    /// Frame position of a value at the start of its year band.
    pub fn point(&self, d: &YearValue) -> Option<Point> {
        self.x
            .position(&d.year)
            .map(|x| Point::new(x + self.left(), self.y.map(d.value) + self.top()))
    }

    /// Frame Y of the zero line.
    pub fn zero_y(&self) -> f64 {
        self.y.map(0.0) + self.top()
    }
}

/// Category selector listing the dataset's categories (current one always included).
pub(crate) fn category_selector(data: &Dataset, current: &str) -> Selector {
    Selector::new("category", current).options(with_current(data.categories(), current))
}

pub(crate) fn with_current(mut values: Vec<String>, current: &str) -> Vec<String> {
    if !values.iter().any(|v| v == current) {
        values.push(current.to_string());
    }
    values
}

/// Reject empty selector values; return the trimmed value otherwise.
pub(crate) fn non_empty<'a>(selector: &str, value: &'a str) -> Result<&'a str, ChartError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ChartError::InvalidSelection { selector: selector.to_string(), value: value.to_string() });
    }
    Ok(v)
}
