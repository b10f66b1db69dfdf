// File: crates/sales-core/src/svg.rs
// Summary: Serialises a Surface into a standalone interactive SVG document.

use std::collections::BTreeSet;
use std::f64::consts::{PI, TAU};
use std::fmt::Write;
use std::time::Duration;

use crate::format::xml_escape;
use crate::geometry::polar;
use crate::surface::{Anchor, Node, Surface, WedgeNode};

/// Render `surface` as SVG. Marks with tooltips get a `<title>` child (shown
/// on hover), hover colours become `:hover` rules, selectors become HTML
/// `<select>` elements inside `<foreignObject>`. When `fade_in` is given the
/// document fades in over that duration.
pub fn to_svg_string(surface: &Surface, fade_in: Option<Duration>) -> String {
    let mut out = String::new();
    let theme = &surface.theme;

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" id="{}" class="chart" width="{}" height="{}" viewBox="0 0 {} {}" opacity="{}">"#,
        xml_escape(&surface.id),
        surface.width,
        surface.height,
        surface.width,
        surface.height,
        num(surface.opacity),
    );

    out.push_str("  <style>\n");
    if let Some(d) = fade_in {
        let _ = writeln!(
            out,
            "    .chart {{ animation: chart-fade-in {}ms ease-in; }}\n    @keyframes chart-fade-in {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}",
            d.as_millis()
        );
    }
    for (class, color) in hover_rules(surface) {
        let _ = writeln!(out, "    .{class}:hover {{ fill: {color}; }}");
    }
    if let Some(scale) = wedge_hover_scale(surface) {
        let _ = writeln!(out, "    .arc {{ transition: transform 200ms; }}\n    .arc:hover {{ transform: scale({}); }}", num(scale));
    }
    let _ = writeln!(
        out,
        "    select {{ background-color: {}; color: {}; font-size: 14px; border-radius: 5px; padding: 5px; }}",
        theme.control_background.to_css(),
        theme.control_text.to_css()
    );
    out.push_str("  </style>\n");

    let _ = writeln!(
        out,
        r#"  <rect class="background" width="{}" height="{}" fill="{}"/>"#,
        surface.width,
        surface.height,
        theme.background.to_css()
    );
    let _ = writeln!(out, r#"  <g transform="translate({},{})">"#, num(surface.origin.x), num(surface.origin.y));
    for node in surface.nodes() {
        write_node(&mut out, node);
    }
    out.push_str("  </g>\n</svg>\n");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(t) => {
            let anchor = match t.anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let weight = if t.bold { r#" font-weight="bold""# } else { "" };
            let _ = write!(
                out,
                r#"    <text class="{}" x="{}" y="{}" text-anchor="{anchor}" font-size="{}px" fill="{}"{weight}>"#,
                t.class,
                num(t.pos.x),
                num(t.pos.y),
                num(t.size),
                t.color.to_css(),
            );
            write_title(out, t.tooltip.as_deref());
            let _ = writeln!(out, "{}</text>", xml_escape(&t.text));
        }
        Node::Rect(r) => {
            let _ = write!(
                out,
                r#"    <rect class="{}" x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="{}""#,
                r.class,
                num(r.rect.x),
                num(r.rect.y),
                num(r.rect.width),
                num(r.rect.height),
                num(r.corner_radius),
                num(r.corner_radius),
                r.fill.to_css(),
            );
            close_with_title(out, "rect", r.tooltip.as_deref());
        }
        Node::Line(l) => {
            let _ = writeln!(
                out,
                r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                num(l.from.x),
                num(l.from.y),
                num(l.to.x),
                num(l.to.y),
                l.stroke.to_css(),
                num(l.width),
            );
        }
        Node::Path(p) => {
            let mut d = String::new();
            for (i, pt) in p.points.iter().enumerate() {
                let _ = write!(d, "{}{},{}", if i == 0 { "M" } else { "L" }, num(pt.x), num(pt.y));
            }
            if p.closed && !p.points.is_empty() {
                d.push('Z');
            }
            let fill = p.fill.map(|c| c.to_css()).unwrap_or_else(|| "none".to_string());
            let stroke = match p.stroke {
                Some((c, w)) => format!(r#" stroke="{}" stroke-width="{}""#, c.to_css(), num(w)),
                None => String::new(),
            };
            let _ = writeln!(out, r#"    <path class="{}" d="{d}" fill="{fill}"{stroke}/>"#, p.class);
        }
        Node::Circle(c) => {
            let _ = write!(
                out,
                r#"    <circle class="{}" cx="{}" cy="{}" r="{}" fill="{}""#,
                c.class,
                num(c.center.x),
                num(c.center.y),
                num(c.radius),
                c.fill.to_css(),
            );
            close_with_title(out, "circle", c.tooltip.as_deref());
        }
        Node::Wedge(w) => {
            let _ = write!(
                out,
                r#"    <g transform="translate({},{})"><path class="{}" d="{}" fill="{}""#,
                num(w.center.x),
                num(w.center.y),
                w.class,
                wedge_path(w),
                w.fill.to_css(),
            );
            match w.tooltip.as_deref() {
                Some(tip) => {
                    out.push('>');
                    write_title(out, Some(tip));
                    out.push_str("</path></g>\n");
                }
                None => out.push_str("/></g>\n"),
            }
        }
        Node::Selector(s) => {
            let _ = writeln!(
                out,
                r#"    <foreignObject x="{}" y="{}" width="300" height="100">"#,
                num(s.pos.x),
                num(s.pos.y)
            );
            let _ = writeln!(
                out,
                r#"      <select xmlns="http://www.w3.org/1999/xhtml" name="{}" data-selector="{}">"#,
                s.id, s.id
            );
            for opt in &s.options {
                let selected = if opt.value == s.selected { r#" selected="selected""# } else { "" };
                let _ = writeln!(
                    out,
                    r#"        <option value="{}"{selected}>{}</option>"#,
                    xml_escape(&opt.value),
                    xml_escape(&opt.label)
                );
            }
            out.push_str("      </select>\n    </foreignObject>\n");
        }
    }
}

fn write_title(out: &mut String, tooltip: Option<&str>) {
    if let Some(tip) = tooltip {
        let _ = write!(out, "<title>{}</title>", xml_escape(tip));
    }
}

fn close_with_title(out: &mut String, tag: &str, tooltip: Option<&str>) {
    match tooltip {
        Some(tip) => {
            out.push('>');
            write_title(out, Some(tip));
            let _ = writeln!(out, "</{tag}>");
        }
        None => out.push_str("/>\n"),
    }
}

/// Path data for a wedge centred on the origin.
fn wedge_path(w: &WedgeNode) -> String {
    let r = w.radius;
    let sweep = w.end_angle - w.start_angle;
    if sweep >= TAU - 1e-9 {
        // a single arc cannot start and end on the same point
        return format!("M0,{}A{r},{r} 0 1,1 0,{}A{r},{r} 0 1,1 0,{}Z", num(-r), num(r), num(-r), r = num(r));
    }
    let p0 = polar(r, w.start_angle);
    let p1 = polar(r, w.end_angle);
    let large = if sweep > PI { 1 } else { 0 };
    format!(
        "M0,0L{},{}A{r},{r} 0 {large},1 {},{}Z",
        num(p0.x),
        num(p0.y),
        num(p1.x),
        num(p1.y),
        r = num(r)
    )
}

fn hover_rules(surface: &Surface) -> BTreeSet<(&'static str, String)> {
    surface
        .nodes()
        .iter()
        .filter_map(|n| match n {
            Node::Rect(r) => r.hover_fill.map(|c| (r.class, c.to_css())),
            _ => None,
        })
        .collect()
}

fn wedge_hover_scale(surface: &Surface) -> Option<f64> {
    surface.nodes().iter().find_map(|n| match n {
        Node::Wedge(w) if w.radius > 0.0 => w.hover_radius.map(|h| h / w.radius),
        _ => None,
    })
}

/// Coordinates with at most two decimals.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
