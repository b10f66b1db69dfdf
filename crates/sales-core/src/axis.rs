// File: crates/sales-core/src/axis.rs
// Summary: Axis model (ticks + labels) for band and linear scales, drawn onto a Frame.

use crate::format::format_number;
use crate::geometry::Point;
use crate::scale::{BandScale, LinearScale};
use crate::surface::{Anchor, Frame, LineNode, Node};

const TICK_SIZE: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Offset along the axis from its origin.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub origin: Point,
    pub length: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Bottom axis with one tick at the centre of each band.
    pub fn band_bottom(scale: &BandScale, origin: Point, length: f64) -> Self {
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|k| scale.center(k).map(|offset| Tick { offset, label: k.clone() }))
            .collect();
        Self { orient: Orient::Bottom, origin, length, ticks }
    }

    /// Bottom axis for a left-to-right linear scale.
    pub fn linear_bottom(scale: &LinearScale, origin: Point, length: f64) -> Self {
        Self { orient: Orient::Bottom, origin, length, ticks: linear_ticks(scale) }
    }

    /// Left axis for a bottom-to-top linear scale.
    pub fn linear_left(scale: &LinearScale, origin: Point, length: f64) -> Self {
        Self { orient: Orient::Left, origin, length, ticks: linear_ticks(scale) }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let stroke = frame.theme.axis_line;
        let o = self.origin;
        let end = match self.orient {
            Orient::Bottom => o.offset(self.length, 0.0),
            Orient::Left => o.offset(0.0, self.length),
        };
        frame.push(Node::Line(LineNode { from: o, to: end, stroke, width: 1.0 }));

        for t in &self.ticks {
            match self.orient {
                Orient::Bottom => {
                    let p = o.offset(t.offset, 0.0);
                    frame.push(Node::Line(LineNode { from: p, to: p.offset(0.0, TICK_SIZE), stroke, width: 1.0 }));
                    frame.label(p.x, p.y + TICK_SIZE + 12.0, t.label.clone(), Anchor::Middle);
                }
                Orient::Left => {
                    let p = o.offset(0.0, t.offset);
                    frame.push(Node::Line(LineNode { from: p, to: p.offset(-TICK_SIZE, 0.0), stroke, width: 1.0 }));
                    frame.label(p.x - TICK_SIZE - 3.0, p.y + 4.0, t.label.clone(), Anchor::End);
                }
            }
        }
    }
}

fn linear_ticks(scale: &LinearScale) -> Vec<Tick> {
    scale
        .ticks(10)
        .into_iter()
        .map(|v| Tick { offset: scale.map(v), label: format_number(v) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_ticks_sit_at_band_centres() {
        let s = BandScale::new(vec!["2020".into(), "2021".into()], 0.0, 210.0, 0.1);
        let a = Axis::band_bottom(&s, Point::new(0.0, 100.0), 210.0);
        assert_eq!(a.ticks.len(), 2);
        assert!((a.ticks[0].offset - 55.0).abs() < 1e-9);
        assert_eq!(a.ticks[1].label, "2021");
    }

    #[test]
    fn left_ticks_follow_inverted_range() {
        let s = LinearScale::zero_based(100.0, 200.0, 0.0);
        let a = Axis::linear_left(&s, Point::new(0.0, 0.0), 200.0);
        let first = &a.ticks[0];
        assert_eq!(first.label, "0");
        assert_eq!(first.offset, 200.0);
    }
}
