// File: crates/sales-core/src/charts/line.rs
// Summary: Line chart: sales summed per year for one category, drawn as a line with hoverable points.

use crate::chart::{ChartKind, ChartVariant};
use crate::dataset::Dataset;
use crate::error::{ChartError, ChartResult};
use crate::format::format_number;
use crate::geometry::Point;
use crate::selection::LineSelection;
use crate::surface::{CircleNode, Frame, Node, PathNode};
use crate::view::{NoData, YearSeries};

use super::{category_selector, non_empty, sum_by_year, YearPlot};

pub struct Line;

impl ChartVariant for Line {
    const KIND: ChartKind = ChartKind::Line;
    type Selection = LineSelection;
    type View = YearSeries;

    fn update(data: &Dataset, selection: &LineSelection) -> Result<YearSeries, NoData> {
        sum_by_year(data, &selection.category, |r| r.sales)
    }

    fn render(view: &YearSeries, selection: &LineSelection, data: &Dataset, frame: &mut Frame<'_>) {
        draw_sales_series(view, selection, data, frame, format!("Sales Over Time for {}", selection.category), false);
    }

    fn select(selection: &LineSelection, selector: &str, value: &str) -> ChartResult<LineSelection> {
        select_category(selection, selector, value)
    }
}

pub(super) fn select_category(_current: &LineSelection, selector: &str, value: &str) -> ChartResult<LineSelection> {
    match selector {
        "category" => Ok(LineSelection { category: non_empty(selector, value)?.to_string() }),
        other => Err(ChartError::UnknownSelector(other.to_string())),
    }
}

/// Shared line/area drawing; `filled` adds the area under the curve.
pub(super) fn draw_sales_series(
    view: &YearSeries,
    selection: &LineSelection,
    data: &Dataset,
    frame: &mut Frame<'_>,
    title: String,
    filled: bool,
) {
    let plot = YearPlot::new(view, frame);
    let theme = frame.theme;

    frame.title(frame.width / 2.0, plot.top(), title);
    plot.draw_axes(frame);

    let points = view.iter().filter_map(|d| plot.point(d)).collect::<Vec<_>>();
    if filled {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            let zero = plot.zero_y();
            let mut outline = points.clone();
            outline.push(Point::new(last.x, zero));
            outline.push(Point::new(first.x, zero));
            frame.push(Node::Path(PathNode {
                points: outline,
                closed: true,
                stroke: None,
                fill: Some(theme.area_fill),
                class: "area",
            }));
        }
    }
    frame.push(Node::Path(PathNode {
        points: points.clone(),
        closed: false,
        stroke: Some((theme.line_stroke, 2.0)),
        fill: None,
        class: "line",
    }));

    let side = plot.side();
    frame.legend_entry(side + 20.0, plot.top(), theme.point_fill, selection.category.clone(), None);
    frame.selector(category_selector(data, &selection.category).at(side - 30.0, plot.top() + 50.0));

    for (d, p) in view.iter().zip(points) {
        frame.push(Node::Circle(CircleNode {
            center: p,
            radius: 5.0,
            fill: theme.point_fill,
            class: "dot",
            tooltip: Some(format!("Year: {}\nSales: {}", d.year, format_number(d.value))),
        }));
    }
}
