// File: crates/sales-core/src/geometry.rs
// Summary: Point/rect helpers and pie arc layout (angles, centroids).

use std::f64::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    pub fn offset(&self, dx: f64, dy: f64) -> Self { Self::new(self.x + dx, self.y + dy) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Point on a circle of radius `r` around the origin; angle 0 is twelve
/// o'clock and angles grow clockwise (screen Y points down).
pub fn polar(r: f64, angle: f64) -> Point {
    Point::new(r * angle.sin(), -r * angle.cos())
}

/// Angular extent of one pie slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    /// Index of the value this wedge was laid out for.
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Wedge {
    pub fn sweep(&self) -> f64 { self.end_angle - self.start_angle }

    /// Midpoint of the wedge at half the radius (where the slice label goes).
    pub fn centroid(&self, radius: f64) -> Point {
        let mid = (self.start_angle + self.end_angle) / 2.0 - FRAC_PI_2;
        let r = radius / 2.0;
        Point::new(mid.cos() * r, mid.sin() * r)
    }
}

/// Lay out `values` around a full circle. Larger values are placed first
/// (ties keep input order); wedges are returned in input order. Negative or
/// non-finite values get a zero sweep; an all-zero input gives all-zero wedges.
pub fn pie_layout(values: &[f64]) -> Vec<Wedge> {
    let clean = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    let total: f64 = values.iter().map(|&v| clean(v)).sum();
    let k = if total > 0.0 { TAU / total } else { 0.0 };

    let mut order = (0..values.len()).collect::<Vec<_>>();
    order.sort_by(|&a, &b| clean(values[b]).total_cmp(&clean(values[a])));

    let mut wedges = vec![
        Wedge { index: 0, value: 0.0, start_angle: 0.0, end_angle: 0.0 };
        values.len()
    ];
    let mut angle = 0.0;
    for i in order {
        let sweep = clean(values[i]) * k;
        wedges[i] = Wedge { index: i, value: values[i], start_angle: angle, end_angle: angle + sweep };
        angle += sweep;
    }
    wedges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_places_larger_values_first_but_keeps_order() {
        let w = pie_layout(&[30.0, 70.0]);
        assert_eq!(w[0].index, 0);
        assert!((w[1].start_angle - 0.0).abs() < 1e-12);
        assert!((w[1].sweep() - TAU * 0.7).abs() < 1e-9);
        assert!((w[0].start_angle - TAU * 0.7).abs() < 1e-9);
        assert!((w[0].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_total_gives_empty_wedges() {
        let w = pie_layout(&[0.0, 0.0]);
        assert!(w.iter().all(|w| w.sweep() == 0.0));
    }

    #[test]
    fn polar_zero_is_twelve_oclock() {
        let p = polar(10.0, 0.0);
        assert!(p.x.abs() < 1e-12 && (p.y + 10.0).abs() < 1e-12);
        let c = Wedge { index: 0, value: 1.0, start_angle: 0.0, end_angle: std::f64::consts::PI }.centroid(10.0);
        // right half: centroid at three o'clock
        assert!((c.x - 5.0).abs() < 1e-9 && c.y.abs() < 1e-9);
    }
}
