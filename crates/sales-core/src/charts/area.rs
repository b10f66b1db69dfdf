// File: crates/sales-core/src/charts/area.rs
// Summary: Area chart: the line chart's sales-by-year series with the region under the curve filled.

use crate::chart::{ChartKind, ChartVariant};
use crate::dataset::Dataset;
use crate::error::ChartResult;
use crate::selection::LineSelection;
use crate::surface::Frame;
use crate::view::{NoData, YearSeries};

use super::line::{draw_sales_series, select_category};
use super::sum_by_year;

pub struct Area;

impl ChartVariant for Area {
    const KIND: ChartKind = ChartKind::Area;
    type Selection = LineSelection;
    type View = YearSeries;

    fn update(data: &Dataset, selection: &LineSelection) -> Result<YearSeries, NoData> {
        sum_by_year(data, &selection.category, |r| r.sales)
    }

    fn render(view: &YearSeries, selection: &LineSelection, data: &Dataset, frame: &mut Frame<'_>) {
        let title = format!("Sales Area Over Time for {}", selection.category);
        draw_sales_series(view, selection, data, frame, title, true);
    }

    fn select(selection: &LineSelection, selector: &str, value: &str) -> ChartResult<LineSelection> {
        select_category(selection, selector, value)
    }
}
