// File: crates/sales-core/src/view.rs
// Summary: Derived views computed by chart updates and the update outcome type.

use std::fmt;

use crate::dataset::Record;
use crate::format::percent;

/// Summed value for one year.
#[derive(Clone, Debug, PartialEq)]
pub struct YearValue {
    pub year: String,
    pub value: f64,
}

/// Summed sales for one pie slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Share {
    pub label: String,
    pub value: f64,
}

/// Year-ordered sums (bar, line, area).
pub type YearSeries = Vec<YearValue>;

/// Per-category slices (pie).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryShares(pub Vec<Share>);

impl CategoryShares {
    pub fn total(&self) -> f64 {
        self.0.iter().map(|s| s.value).sum()
    }

    /// Whole-percent share of each slice, in slice order.
    pub fn percentages(&self) -> Vec<i64> {
        let total = self.total();
        self.0.iter().map(|s| percent(s.value, total)).collect()
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// Any variant's derived view, as reported by [`UpdateOutcome`].
#[derive(Clone, Debug, PartialEq)]
pub enum DerivedView {
    YearSeries(YearSeries),
    CategoryShares(CategoryShares),
    PointCloud(Vec<Record>),
}

impl DerivedView {
    pub fn len(&self) -> usize {
        match self {
            DerivedView::YearSeries(v) => v.len(),
            DerivedView::CategoryShares(s) => s.len(),
            DerivedView::PointCloud(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl From<YearSeries> for DerivedView {
    fn from(v: YearSeries) -> Self { DerivedView::YearSeries(v) }
}

impl From<CategoryShares> for DerivedView {
    fn from(v: CategoryShares) -> Self { DerivedView::CategoryShares(v) }
}

impl From<Vec<Record>> for DerivedView {
    fn from(v: Vec<Record>) -> Self { DerivedView::PointCloud(v) }
}

/// Why an update produced nothing to draw.
#[derive(Clone, Debug, PartialEq)]
pub enum NoData {
    /// The dataset has no records at all.
    EmptyDataset,
    /// The filter matched no records; `filter` describes it (e.g. `category Sports`).
    NoMatches { filter: String },
    /// Records matched but the aggregation came out empty.
    EmptyView { filter: String },
}

impl fmt::Display for NoData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoData::EmptyDataset => f.write_str("no data available"),
            NoData::NoMatches { filter } | NoData::EmptyView { filter } => {
                write!(f, "no data available for {filter}")
            }
        }
    }
}

/// Result of a chart's update phase.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateOutcome {
    /// View computed and drawn.
    Ready(DerivedView),
    /// Expected "nothing for this selection" condition; surface left untouched.
    NoData(NoData),
    /// View computed but not drawn: the chart's surface was disposed.
    SurfaceUnavailable(DerivedView),
    /// The dataset never loaded; carries the load error message.
    LoadFailed(String),
}

impl UpdateOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, UpdateOutcome::Ready(_))
    }

    /// The computed view, whether or not it reached a surface.
    pub fn view(&self) -> Option<&DerivedView> {
        match self {
            UpdateOutcome::Ready(v) | UpdateOutcome::SurfaceUnavailable(v) => Some(v),
            _ => None,
        }
    }
}
