// File: crates/sales-core/src/charts/pie.rs
// Summary: Pie chart: sales per category for one year, with percentage labels and legend tooltips.

use indexmap::IndexMap;

use crate::chart::{ChartKind, ChartVariant};
use crate::dataset::Dataset;
use crate::error::{ChartError, ChartResult};
use crate::geometry::{pie_layout, Point};
use crate::selection::PieSelection;
use crate::surface::{Anchor, Frame, Node, Selector, TextNode, WedgeNode};
use crate::view::{CategoryShares, NoData, Share};

use super::{non_empty, with_current};

pub struct Pie;

impl ChartVariant for Pie {
    const KIND: ChartKind = ChartKind::Pie;
    type Selection = PieSelection;
    type View = CategoryShares;

    fn update(data: &Dataset, selection: &PieSelection) -> Result<CategoryShares, NoData> {
        if data.is_empty() {
            return Err(NoData::EmptyDataset);
        }
        let filter = || format!("year {}", selection.year);

        let mut groups: IndexMap<&str, f64> = IndexMap::new();
        for r in data.records().iter().filter(|r| r.year == selection.year) {
            *groups.entry(r.category.as_str()).or_insert(0.0) += r.sales;
        }
        if groups.is_empty() {
            return Err(NoData::NoMatches { filter: filter() });
        }

        let shares = groups
            .into_iter()
            .map(|(label, value)| Share {
                label: label.to_string(),
                value: if value.is_finite() { value } else { 0.0 },
            })
            .collect::<Vec<_>>();
        if shares.is_empty() {
            return Err(NoData::EmptyView { filter: filter() });
        }
        Ok(CategoryShares(shares))
    }

    fn render(view: &CategoryShares, selection: &PieSelection, data: &Dataset, frame: &mut Frame<'_>) {
        let theme = frame.theme;
        let radius = (frame.width.min(frame.height) / 2.0).max(1.0);
        let center = Point::new(frame.width / 2.0, frame.height / 2.0 + 30.0);

        frame.title(frame.width / 2.0, 0.0, format!("Sales Distribution by Category in {}", selection.year));

        let values = view.0.iter().map(|s| s.value).collect::<Vec<_>>();
        let percents = view.percentages();
        let wedges = pie_layout(&values);

        for ((share, wedge), pct) in view.0.iter().zip(&wedges).zip(&percents) {
            let caption = format!("{}: {pct}%", share.label);
            frame.push(Node::Wedge(WedgeNode {
                center,
                radius,
                start_angle: wedge.start_angle,
                end_angle: wedge.end_angle,
                fill: theme.category_color(wedge.index),
                hover_radius: Some(radius + 10.0),
                class: "arc",
                tooltip: Some(caption.clone()),
            }));
            let c = wedge.centroid(radius);
            frame.push(Node::Text(TextNode {
                pos: Point::new(center.x + c.x, center.y + c.y),
                text: caption,
                size: 12.0,
                color: theme.slice_label,
                anchor: Anchor::Middle,
                bold: false,
                class: "arc-label",
                tooltip: None,
            }));
        }

        let legend_x = frame.width / 2.0 + radius + 20.0;
        for (i, (share, pct)) in view.0.iter().zip(&percents).enumerate() {
            let tooltip = format!("{}: {pct}%", share.label);
            frame.legend_entry(legend_x, 50.0 + i as f64 * 20.0, theme.category_color(i), share.label.clone(), Some(tooltip));
        }

        let mut years = with_current(data.years(), &selection.year);
        years.sort();
        let mut select = Selector::new("year", selection.year.clone());
        for y in years {
            select = select.option(y.clone(), format!("Year {y}"));
        }
        frame.selector(select.at(legend_x, frame.height / 2.0 - 30.0));
    }

    fn select(_selection: &PieSelection, selector: &str, value: &str) -> ChartResult<PieSelection> {
        match selector {
            "year" => Ok(PieSelection { year: non_empty(selector, value)?.to_string() }),
            other => Err(ChartError::UnknownSelector(other.to_string())),
        }
    }
}
