// File: crates/sales-core/tests/lifecycle.rs
// Purpose: Chart base lifecycle: init, update outcomes, render order, selector changes, disposal.

use std::sync::Arc;

use sales_core::surface::Node;
use sales_core::{
    Bar, BarSelection, Chart, ChartConfig, ChartError, DatasetState, DerivedView, LoadError, Metric, NoData,
    Pie, RenderOutcome, Scatter, Theme, UpdateOutcome,
};

fn data() -> Arc<DatasetState> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/sales_small.csv");
    Arc::new(DatasetState::load(path))
}

fn bar_chart() -> Chart<Bar> {
    Chart::<Bar>::new(ChartConfig::new("chart"), Theme::dashboard(), data())
}

#[test]
fn new_chart_draws_default_selection() {
    let chart = bar_chart();
    assert_eq!(chart.selection(), &BarSelection::default());
    let surface = chart.surface().expect("surface");
    assert_eq!(surface.title(), Some("Total Sales Over Time for Sports"));
    assert_eq!(surface.marks("bar").count(), 2);
    assert_eq!(surface.selector("category").map(|s| s.selected.as_str()), Some("Sports"));
    assert_eq!(surface.selector("metric").map(|s| s.selected.as_str()), Some("Sales"));
}

#[test]
fn init_alone_leaves_surface_blank() {
    let chart = Chart::<Pie>::init(ChartConfig::default(), Theme::light(), data());
    assert!(chart.surface().unwrap().is_blank());
}

#[test]
fn render_order_is_title_axes_marks_legend_selectors() {
    let chart = bar_chart();
    let nodes = chart.surface().unwrap().nodes();
    let pos = |pred: &dyn Fn(&Node) -> bool| nodes.iter().position(|n| pred(n)).expect("node present");

    let title = pos(&|n| n.class() == "title");
    let axis = pos(&|n| matches!(n, Node::Line(_)));
    let bar = pos(&|n| n.class() == "bar");
    let legend = pos(&|n| n.class() == "legend");
    let selector = pos(&|n| matches!(n, Node::Selector(_)));
    assert!(title < axis && axis < bar && bar < legend && legend < selector);
}

#[test]
fn bars_carry_tooltips() {
    let chart = bar_chart();
    let tips = chart.surface().unwrap().marks("bar").filter_map(Node::tooltip).collect::<Vec<_>>();
    assert_eq!(tips, vec!["Year: 2020\nSales: 150", "Year: 2021\nSales: 200"]);
}

#[test]
fn no_data_leaves_surface_and_selection_untouched() {
    let mut chart = bar_chart();
    let before = chart.surface().unwrap().clone();

    let outcome = chart.update(BarSelection { category: "Garden".into(), metric: Metric::Sales });
    assert_eq!(outcome, UpdateOutcome::NoData(NoData::NoMatches { filter: "category Garden".into() }));
    assert_eq!(chart.surface().unwrap(), &before);
    assert_eq!(chart.selection(), &BarSelection::default());
}

#[test]
fn metric_change_keeps_category() {
    let mut chart = bar_chart();
    chart.select("category", "Home").unwrap();
    let outcome = chart.select("metric", "Profit").unwrap();

    assert_eq!(chart.selection(), &BarSelection { category: "Home".into(), metric: Metric::Profit });
    match outcome {
        UpdateOutcome::Ready(DerivedView::YearSeries(s)) => {
            assert_eq!(s.iter().map(|d| d.value).collect::<Vec<_>>(), vec![100.0, 150.0]);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(chart.surface().unwrap().title(), Some("Total Profit Over Time for Home"));
}

#[test]
fn bad_selector_input_is_an_error_and_changes_nothing() {
    let mut chart = bar_chart();
    assert!(matches!(chart.select("metric", "Rating"), Err(ChartError::InvalidSelection { .. })));
    assert!(matches!(chart.select("year", "2020"), Err(ChartError::UnknownSelector(s)) if s == "year"));
    assert!(matches!(chart.select("category", "  "), Err(ChartError::InvalidSelection { .. })));
    assert_eq!(chart.selection(), &BarSelection::default());
}

#[test]
fn failed_load_reports_load_failed() {
    let state = Arc::new(DatasetState::Failed(LoadError::MissingColumn("Sales")));
    let mut chart = Chart::<Scatter>::new(ChartConfig::default(), Theme::dashboard(), state);
    assert!(chart.surface().unwrap().is_blank());
    match chart.update(Default::default()) {
        UpdateOutcome::LoadFailed(msg) => assert!(msg.contains("Sales")),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn disposed_chart_skips_render() {
    let mut chart = bar_chart();
    let surface = chart.dispose().expect("had a surface");
    assert!(!surface.is_blank());
    assert!(chart.surface().is_none());

    let view = vec![sales_core::view::YearValue { year: "2020".into(), value: 1.0 }];
    assert_eq!(chart.render(&view, &BarSelection::default()), RenderOutcome::SurfaceUnavailable);
    // the view is still computed, but the outcome says it was not drawn
    let home = BarSelection { category: "Home".into(), ..BarSelection::default() };
    match chart.update(home) {
        UpdateOutcome::SurfaceUnavailable(DerivedView::YearSeries(s)) => {
            assert_eq!(s.iter().map(|d| d.value).collect::<Vec<_>>(), vec![300.0, 400.0]);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(chart.selection().category, "Sports");
}

#[test]
fn scatter_rating_all_option_and_pie_year_selector() {
    let mut scatter = Chart::<Scatter>::new(ChartConfig::default(), Theme::dashboard(), data());
    let outcome = scatter.select("rating", "All").unwrap();
    assert_eq!(outcome.view().map(|v| v.len()), Some(6));
    let surface = scatter.surface().unwrap();
    assert_eq!(surface.title(), Some("Sales vs Profit (Rating: All)"));
    let values = surface.selector("rating").unwrap().values().collect::<Vec<_>>();
    assert_eq!(values, vec![">3", ">4", ">5", "All"]);

    let mut pie = Chart::<Pie>::new(ChartConfig::default(), Theme::dashboard(), data());
    assert_eq!(pie.surface().unwrap().marks("arc").count(), 3);
    pie.select("year", "2021").unwrap();
    let surface = pie.surface().unwrap();
    assert_eq!(surface.selector("year").unwrap().selected, "2021");
    assert_eq!(surface.marks("arc").count(), 2);
    let labels = surface
        .nodes()
        .iter()
        .filter_map(|n| match n {
            Node::Text(t) if t.class == "arc-label" => Some(t.text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Sports: 33%", "Home: 67%"]);
}
