// File: crates/sales-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - The hand-built scene snapshot is committed and always compared.
// - Per-chart snapshots are compared when present, else logged and skipped.

use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sales_core::geometry::{Point, Rect};
use sales_core::surface::{CircleNode, LineNode, Node, PathNode, RectNode, WedgeNode};
use sales_core::svg::to_svg_string;
use sales_core::theme::CATEGORY10;
use sales_core::{ChartConfig, ChartHost, ChartKind, DatasetState, HostConfig, Selector, Surface, Theme};

fn snap_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__")
}

fn blessing() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Compare `got` with `name`, or rewrite it when blessing. Returns false when
/// the snapshot is missing.
fn check(name: &str, got: &str) -> bool {
    let snap_path = snap_dir().join(name);
    if blessing() {
        std::fs::create_dir_all(snap_dir()).expect("create snapshots dir");
        std::fs::write(&snap_path, got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), got.len());
        return true;
    }
    if !snap_path.exists() {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        return false;
    }
    let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
    assert_eq!(got, want, "rendered SVG differs from golden snapshot: {}", snap_path.display());
    true
}

/// One node of every kind, at fixed coordinates.
fn scene() -> Surface {
    let theme = Theme::dashboard();
    let mut surface = Surface::new(&ChartConfig::new("golden").with_size(200, 100), theme);
    let mut frame = surface.frame();
    frame.title(65.0, 0.0, "Q1 & Q2");
    frame.push(Node::Rect(RectNode {
        rect: Rect::from_xywh(10.0, 20.0, 30.0, 40.0),
        fill: theme.bar_fill,
        corner_radius: 10.0,
        class: "bar",
        tooltip: Some("Year: 2020\nSales: 150".into()),
        hover_fill: Some(theme.bar_hover),
    }));
    frame.push(Node::Line(LineNode {
        from: Point::new(0.0, 60.0),
        to: Point::new(130.0, 60.0),
        stroke: theme.axis_line,
        width: 1.0,
    }));
    frame.push(Node::Path(PathNode {
        points: vec![Point::new(0.0, 50.0), Point::new(25.5, 10.0), Point::new(50.0, 30.333)],
        closed: false,
        stroke: Some((theme.line_stroke, 2.0)),
        fill: None,
        class: "line",
    }));
    frame.push(Node::Circle(CircleNode {
        center: Point::new(25.5, 10.0),
        radius: 5.0,
        fill: theme.point_fill,
        class: "dot",
        tooltip: Some("a<b".into()),
    }));
    frame.push(Node::Wedge(WedgeNode {
        center: Point::new(100.0, 40.0),
        radius: 10.0,
        start_angle: 0.0,
        end_angle: FRAC_PI_2,
        fill: CATEGORY10[0],
        hover_radius: Some(11.0),
        class: "arc",
        tooltip: Some("Sports: 25%".into()),
    }));
    frame.selector(
        Selector::new("year", "2021")
            .option("2020", "Year 2020")
            .option("2021", "Year 2021")
            .at(140.0, 0.0),
    );
    surface
}

#[test]
fn golden_scene_svg() {
    let svg = to_svg_string(&scene(), Some(Duration::from_millis(500)));
    assert!(check("scene.svg", &svg), "scene.svg is a committed snapshot");
}

fn render_chart_svg(kind: ChartKind) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sales_small.csv");
    let mut host = ChartHost::new(HostConfig::default(), Arc::new(DatasetState::load(path)));
    host.load_chart(kind.as_str()).expect("known chart");
    host.export_svg().expect("active chart")
}

#[test]
fn golden_svg_per_chart() {
    for kind in ChartKind::ALL {
        check(&format!("{kind}.svg"), &render_chart_svg(kind));
    }
}

#[test]
fn svg_render_is_deterministic() {
    for kind in ChartKind::ALL {
        assert_eq!(render_chart_svg(kind), render_chart_svg(kind), "{kind} output changed between runs");
    }
}
