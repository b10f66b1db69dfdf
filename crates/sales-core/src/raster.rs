// File: crates/sales-core/src/raster.rs
// Summary: Headless PNG export of a Surface using Skia CPU raster surfaces.

use std::f64::consts::TAU;
use std::path::Path;

use anyhow::Result;
use skia_safe as skia;

use crate::surface::{Anchor, Node, Surface, TextNode};
use crate::theme::Rgba;

/// Rasterise `surface` and return PNG bytes. Tooltips and hover styles have
/// no raster equivalent and are skipped; selectors are drawn showing their
/// selected option.
pub fn render_png_bytes(surface: &Surface) -> Result<Vec<u8>> {
    let (w, h) = (surface.width as i32, surface.height as i32);
    let mut raster = skia::surfaces::raster_n32_premul((w.max(1), h.max(1)))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let canvas = raster.canvas();

    canvas.clear(surface.theme.background.to_skia());
    canvas.save();
    canvas.translate((surface.origin.x as f32, surface.origin.y as f32));
    for node in surface.nodes() {
        draw_node(canvas, surface, node);
    }
    canvas.restore();

    let image = raster.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `surface` to a PNG file, creating parent directories as needed.
pub fn render_to_png(surface: &Surface, output_png_path: impl AsRef<Path>) -> Result<()> {
    let bytes = render_png_bytes(surface)?;
    if let Some(parent) = output_png_path.as_ref().parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_png_path, bytes)?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color.to_skia());
    paint
}

fn stroke_paint(color: Rgba, width: f64) -> skia::Paint {
    let mut paint = fill_paint(color);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width as f32);
    paint
}

fn draw_node(canvas: &skia::Canvas, surface: &Surface, node: &Node) {
    match node {
        Node::Text(t) => draw_text(canvas, t),
        Node::Rect(r) => {
            let rect = skia::Rect::from_xywh(r.rect.x as f32, r.rect.y as f32, r.rect.width as f32, r.rect.height as f32);
            let paint = fill_paint(r.fill);
            if r.corner_radius > 0.0 {
                let rad = r.corner_radius as f32;
                canvas.draw_round_rect(rect, rad, rad, &paint);
            } else {
                canvas.draw_rect(rect, &paint);
            }
        }
        Node::Line(l) => {
            canvas.draw_line(
                (l.from.x as f32, l.from.y as f32),
                (l.to.x as f32, l.to.y as f32),
                &stroke_paint(l.stroke, l.width),
            );
        }
        Node::Path(p) => {
            let Some(first) = p.points.first() else { return };
            let mut path = skia::Path::new();
            path.move_to((first.x as f32, first.y as f32));
            for pt in p.points.iter().skip(1) {
                path.line_to((pt.x as f32, pt.y as f32));
            }
            if p.closed {
                path.close();
            }
            if let Some(fill) = p.fill {
                canvas.draw_path(&path, &fill_paint(fill));
            }
            if let Some((color, width)) = p.stroke {
                canvas.draw_path(&path, &stroke_paint(color, width));
            }
        }
        Node::Circle(c) => {
            canvas.draw_circle((c.center.x as f32, c.center.y as f32), c.radius as f32, &fill_paint(c.fill));
        }
        Node::Wedge(w) => {
            let (cx, cy, r) = (w.center.x as f32, w.center.y as f32, w.radius as f32);
            let sweep = w.end_angle - w.start_angle;
            let paint = fill_paint(w.fill);
            if sweep >= TAU - 1e-9 {
                canvas.draw_circle((cx, cy), r, &paint);
            } else if sweep > 0.0 {
                // Skia measures angles from three o'clock; ours start at twelve
                let start = (w.start_angle.to_degrees() - 90.0) as f32;
                let oval = skia::Rect::from_ltrb(cx - r, cy - r, cx + r, cy + r);
                let mut path = skia::Path::new();
                path.move_to((cx, cy));
                path.arc_to(oval, start, sweep.to_degrees() as f32, false);
                path.close();
                canvas.draw_path(&path, &paint);
            }
        }
        Node::Selector(s) => {
            let theme = &surface.theme;
            let label = s
                .options
                .iter()
                .find(|o| o.value == s.selected)
                .map(|o| o.label.as_str())
                .unwrap_or(s.selected.as_str());
            let rect = skia::Rect::from_xywh(s.pos.x as f32, s.pos.y as f32, 140.0, 28.0);
            canvas.draw_round_rect(rect, 5.0, 5.0, &fill_paint(theme.control_background));
            draw_text(
                canvas,
                &TextNode {
                    pos: s.pos.offset(8.0, 19.0),
                    text: format!("{label} \u{25BE}"),
                    size: 14.0,
                    color: theme.control_text,
                    anchor: Anchor::Start,
                    bold: false,
                    class: "selector",
                    tooltip: None,
                },
            );
        }
    }
}

fn draw_text(canvas: &skia::Canvas, t: &TextNode) {
    let mut font = skia::Font::default();
    font.set_size(t.size as f32);
    font.set_embolden(t.bold);
    let paint = fill_paint(t.color);

    let (width, _bounds) = font.measure_str(&t.text, Some(&paint));
    let x = match t.anchor {
        Anchor::Start => t.pos.x as f32,
        Anchor::Middle => t.pos.x as f32 - width / 2.0,
        Anchor::End => t.pos.x as f32 - width,
    };
    canvas.draw_str(&t.text, (x, t.pos.y as f32), &font, &paint);
}
