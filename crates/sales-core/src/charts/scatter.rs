// File: crates/sales-core/src/charts/scatter.rs
// Summary: Scatter plot: sales vs profit per record, filtered by rating and coloured on a blue ramp.

use crate::axis::Axis;
use crate::chart::{ChartKind, ChartVariant};
use crate::dataset::{Dataset, Record};
use crate::error::{ChartError, ChartResult};
use crate::format::format_number;
use crate::geometry::Point;
use crate::selection::{RatingFilter, ScatterSelection};
use crate::surface::{CircleNode, Frame, Node, Selector};
use crate::view::NoData;

use super::{value_scale, PLOT_MARGIN};

pub struct Scatter;

impl ChartVariant for Scatter {
    const KIND: ChartKind = ChartKind::Scatter;
    type Selection = ScatterSelection;
    type View = Vec<Record>;

    fn update(data: &Dataset, selection: &ScatterSelection) -> Result<Vec<Record>, NoData> {
        if data.is_empty() {
            return Err(NoData::EmptyDataset);
        }
        let mut points = data
            .records()
            .iter()
            .filter(|r| selection.rating.accepts(r.rating))
            .cloned()
            .collect::<Vec<_>>();
        if points.is_empty() {
            return Err(NoData::NoMatches { filter: format!("rating range {}", selection.rating) });
        }
        points.sort_by(|a, b| a.year.cmp(&b.year));
        Ok(points)
    }

    fn render(view: &Vec<Record>, selection: &ScatterSelection, _data: &Dataset, frame: &mut Frame<'_>) {
        let theme = frame.theme;
        let left = PLOT_MARGIN.left as f64;
        let top = PLOT_MARGIN.top as f64;
        let width = (frame.width - PLOT_MARGIN.hsum() as f64).max(1.0);
        let height = (frame.height - PLOT_MARGIN.vsum() as f64).max(1.0);

        let x = value_scale(view.iter().map(|r| r.sales), 0.0, width);
        let y = value_scale(view.iter().map(|r| r.profit), height, 0.0);

        frame.title(frame.width / 2.0, 10.0, format!("Sales vs Profit (Rating: {})", selection.rating));
        Axis::linear_bottom(&x, Point::new(left, y.map(0.0) + top), width).draw(frame);
        Axis::linear_left(&y, Point::new(left, top), height).draw(frame);

        let (r_min, r_max) = view
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| (lo.min(r.rating), hi.max(r.rating)));

        for r in view {
            frame.push(Node::Circle(CircleNode {
                center: Point::new(x.map(r.sales) + left, y.map(r.profit) + top),
                radius: 5.0,
                fill: theme.ramp(r.rating, r_min, r_max),
                class: "dot",
                tooltip: Some(format!(
                    "Year: {}\nSales: {}\nProfit: {}\nRating: {}",
                    r.year,
                    format_number(r.sales),
                    format_number(r.profit),
                    format_number(r.rating),
                )),
            }));
        }

        let side = width + left;
        frame.legend_entry(side + 20.0, top, theme.ramp_low, format!("Rating {}", format_number(r_min)), None);
        frame.legend_entry(side + 20.0, top + 22.0, theme.ramp_high, format!("Rating {}", format_number(r_max)), None);

        let mut select = Selector::new("rating", selection.rating.to_string());
        for token in RatingFilter::OPTIONS {
            if let Ok(filter) = token.parse::<RatingFilter>() {
                select = select.option(token, filter.label());
            }
        }
        if !select.values().any(|v| v == select.selected) {
            let current = selection.rating;
            select = select.option(current.to_string(), current.label());
        }
        frame.selector(select.at(side - 30.0, top + 50.0));
    }

    fn select(_selection: &ScatterSelection, selector: &str, value: &str) -> ChartResult<ScatterSelection> {
        match selector {
            "rating" => Ok(ScatterSelection { rating: value.parse()? }),
            other => Err(ChartError::UnknownSelector(other.to_string())),
        }
    }
}
