// File: crates/sales-core/src/surface.rs
// Summary: Retained drawing surface (scene nodes, selectors, tooltips) and the Frame handle charts draw through.

use crate::geometry::{Point, Rect};
use crate::theme::{Rgba, Theme};
use crate::types::ChartConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextNode {
    pub pos: Point,
    pub text: String,
    pub size: f64,
    pub color: Rgba,
    pub anchor: Anchor,
    pub bold: bool,
    pub class: &'static str,
    pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub rect: Rect,
    pub fill: Rgba,
    pub corner_radius: f64,
    pub class: &'static str,
    pub tooltip: Option<String>,
    /// Fill swapped in while the pointer is over the mark.
    pub hover_fill: Option<Rgba>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineNode {
    pub from: Point,
    pub to: Point,
    pub stroke: Rgba,
    pub width: f64,
}

/// Polyline (open) or polygon (closed).
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub points: Vec<Point>,
    pub closed: bool,
    pub stroke: Option<(Rgba, f64)>,
    pub fill: Option<Rgba>,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CircleNode {
    pub center: Point,
    pub radius: f64,
    pub fill: Rgba,
    pub class: &'static str,
    pub tooltip: Option<String>,
}

/// Pie slice centred on `center`; angles follow [`crate::geometry::polar`].
#[derive(Clone, Debug, PartialEq)]
pub struct WedgeNode {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill: Rgba,
    /// Radius the slice grows to while hovered.
    pub hover_radius: Option<f64>,
    pub class: &'static str,
    pub tooltip: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
}

/// Drop-down control: its `id` is what [`crate::chart::Chart::select`] accepts.
#[derive(Clone, Debug, PartialEq)]
pub struct Selector {
    pub id: &'static str,
    pub options: Vec<SelectorOption>,
    pub selected: String,
    pub pos: Point,
}

impl Selector {
    pub fn new(id: &'static str, selected: impl Into<String>) -> Self {
        Self { id, options: Vec::new(), selected: selected.into(), pos: Point::new(0.0, 0.0) }
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(SelectorOption { value: value.into(), label: label.into() });
        self
    }

    /// Add options whose label equals their value.
    pub fn options<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for v in values {
            let v = v.into();
            self = self.option(v.clone(), v);
        }
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.pos = Point::new(x, y);
        self
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Text(TextNode),
    Rect(RectNode),
    Line(LineNode),
    Path(PathNode),
    Circle(CircleNode),
    Wedge(WedgeNode),
    Selector(Selector),
}

impl Node {
    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Node::Text(n) => n.tooltip.as_deref(),
            Node::Rect(n) => n.tooltip.as_deref(),
            Node::Circle(n) => n.tooltip.as_deref(),
            Node::Wedge(n) => n.tooltip.as_deref(),
            Node::Line(_) | Node::Path(_) | Node::Selector(_) => None,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Node::Text(n) => n.class,
            Node::Rect(n) => n.class,
            Node::Path(n) => n.class,
            Node::Circle(n) => n.class,
            Node::Wedge(n) => n.class,
            Node::Line(_) => "tick",
            Node::Selector(_) => "selector",
        }
    }
}

/// Fixed-size drawing target. Node coordinates are relative to the inner
/// area, which starts at `(margin.left, margin.top)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub origin: Point,
    pub inner_width: f64,
    pub inner_height: f64,
    pub opacity: f64,
    pub theme: Theme,
    nodes: Vec<Node>,
}

impl Surface {
    pub fn new(config: &ChartConfig, theme: Theme) -> Self {
        Self {
            id: config.parent_element.clone(),
            width: config.container_width,
            height: config.container_height,
            origin: Point::new(config.margin.left as f64, config.margin.top as f64),
            inner_width: config.inner_width(),
            inner_height: config.inner_height(),
            opacity: 1.0,
            theme,
            nodes: Vec::new(),
        }
    }

    pub fn clear(&mut self) { self.nodes.clear(); }
    pub fn nodes(&self) -> &[Node] { &self.nodes }
    pub fn is_blank(&self) -> bool { self.nodes.is_empty() }

    pub fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Selector(s) => Some(s),
            _ => None,
        })
    }

    pub fn selector(&self, id: &str) -> Option<&Selector> {
        self.selectors().find(|s| s.id == id)
    }

    pub fn tooltips(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(Node::tooltip)
    }

    /// Nodes carrying `class` (e.g. "bar", "dot", "arc").
    pub fn marks<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.class() == class)
    }

    /// Text of the chart title, if drawn.
    pub fn title(&self) -> Option<&str> {
        self.nodes.iter().find_map(|n| match n {
            Node::Text(t) if t.class == "title" => Some(t.text.as_str()),
            _ => None,
        })
    }

    pub fn frame(&mut self) -> Frame<'_> {
        let theme = self.theme;
        Frame { width: self.inner_width, height: self.inner_height, theme, surface: self }
    }
}

/// Drawing handle passed to a variant's render phase.
pub struct Frame<'a> {
    pub width: f64,
    pub height: f64,
    pub theme: Theme,
    surface: &'a mut Surface,
}

impl Frame<'_> {
    pub fn push(&mut self, node: Node) {
        self.surface.nodes.push(node);
    }

    /// Bold centred heading at `(x, y)`.
    pub fn title(&mut self, x: f64, y: f64, text: impl Into<String>) {
        let color = self.theme.title;
        self.push(Node::Text(TextNode {
            pos: Point::new(x, y),
            text: text.into(),
            size: 30.0,
            color,
            anchor: Anchor::Middle,
            bold: true,
            class: "title",
            tooltip: None,
        }));
    }

    /// Plain 12px label.
    pub fn label(&mut self, x: f64, y: f64, text: impl Into<String>, anchor: Anchor) {
        let node = self.text_node(x, y, text, anchor, "label");
        self.push(Node::Text(node));
    }

    fn text_node(&self, x: f64, y: f64, text: impl Into<String>, anchor: Anchor, class: &'static str) -> TextNode {
        TextNode {
            pos: Point::new(x, y),
            text: text.into(),
            size: 12.0,
            color: self.theme.text,
            anchor,
            bold: false,
            class,
            tooltip: None,
        }
    }

    /// Coloured square followed by a label, as used by legends.
    pub fn legend_entry(&mut self, x: f64, y: f64, swatch: Rgba, text: impl Into<String>, tooltip: Option<String>) {
        self.push(Node::Rect(RectNode {
            rect: Rect::from_xywh(x, y, 18.0, 18.0),
            fill: swatch,
            corner_radius: 0.0,
            class: "legend",
            tooltip: tooltip.clone(),
            hover_fill: None,
        }));
        let mut label = self.text_node(x + 25.0, y + 13.0, text, Anchor::Start, "legend");
        label.tooltip = tooltip;
        self.push(Node::Text(label));
    }

    pub fn selector(&mut self, selector: Selector) {
        self.push(Node::Selector(selector));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_inner_area_subtracts_margins() {
        let s = Surface::new(&ChartConfig::default(), Theme::dashboard());
        assert_eq!((s.width, s.height), (600, 400));
        assert_eq!(s.inner_width, 530.0);
        assert_eq!(s.inner_height, 340.0);
        assert_eq!(s.origin, Point::new(40.0, 20.0));
        assert!(s.is_blank());
    }

    #[test]
    fn legend_entry_pushes_swatch_and_label() {
        let mut s = Surface::new(&ChartConfig::default(), Theme::dashboard());
        s.frame().legend_entry(0.0, 0.0, Rgba::rgb(1, 2, 3), "Sports", Some("Sports: 40%".into()));
        assert_eq!(s.marks("legend").count(), 2);
        assert_eq!(s.tooltips().collect::<Vec<_>>(), vec!["Sports: 40%", "Sports: 40%"]);
    }
}
