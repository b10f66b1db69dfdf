// File: crates/sales-core/src/charts/bar.rs
// Summary: Bar chart: selected metric summed per year for one category.

use crate::chart::{ChartKind, ChartVariant};
use crate::dataset::{Dataset, Metric};
use crate::error::{ChartError, ChartResult};
use crate::format::format_number;
use crate::geometry::Rect;
use crate::selection::BarSelection;
use crate::surface::{Frame, Node, RectNode, Selector};
use crate::view::{NoData, YearSeries};

use super::{category_selector, non_empty, sum_by_year, YearPlot};

pub struct Bar;

impl ChartVariant for Bar {
    const KIND: ChartKind = ChartKind::Bar;
    type Selection = BarSelection;
    type View = YearSeries;

    fn update(data: &Dataset, selection: &BarSelection) -> Result<YearSeries, NoData> {
        let metric = selection.metric;
        sum_by_year(data, &selection.category, |r| r.metric(metric))
    }

    fn render(view: &YearSeries, selection: &BarSelection, data: &Dataset, frame: &mut Frame<'_>) {
        let plot = YearPlot::new(view, frame);
        let metric = selection.metric;

        frame.title(
            frame.width / 2.0,
            plot.top(),
            format!("Total {metric} Over Time for {}", selection.category),
        );
        plot.draw_axes(frame);

        let zero = plot.zero_y();
        for d in view {
            let Some(p) = plot.point(d) else { continue };
            let bw = plot.x.bandwidth();
            frame.push(Node::Rect(RectNode {
                rect: Rect::from_xywh(p.x, p.y.min(zero), bw, (zero - p.y).abs()),
                fill: frame.theme.bar_fill,
                corner_radius: 10.0,
                class: "bar",
                tooltip: Some(format!("Year: {}\n{metric}: {}", d.year, format_number(d.value))),
                hover_fill: Some(frame.theme.bar_hover),
            }));
        }

        let side = plot.side();
        frame.legend_entry(side + 20.0, plot.top(), frame.theme.bar_fill, selection.category.clone(), None);

        frame.selector(category_selector(data, &selection.category).at(side - 20.0, plot.top() + 50.0));
        frame.selector(
            Selector::new("metric", metric.as_str())
                .options(Metric::ALL.iter().map(|m| m.as_str()))
                .at(side + 10.0, plot.top() + 150.0),
        );
    }

    fn select(selection: &BarSelection, selector: &str, value: &str) -> ChartResult<BarSelection> {
        match selector {
            "category" => Ok(BarSelection { category: non_empty(selector, value)?.to_string(), ..selection.clone() }),
            "metric" => Ok(BarSelection { metric: value.parse()?, ..selection.clone() }),
            other => Err(ChartError::UnknownSelector(other.to_string())),
        }
    }
}
