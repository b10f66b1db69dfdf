// File: crates/sales-core/src/types.rs
// Summary: Shared sizing types and constants (container size, margins).

use serde::Deserialize;

/// Default container width in pixels.
pub const WIDTH: u32 = 600;
/// Default container height in pixels.
pub const HEIGHT: u32 = 400;

/// Container margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20, 30, 40, 40)
    }
}

/// Configuration accepted by every chart: target container plus sizing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Identifier of the element the chart is mounted in (emitted as the SVG id).
    pub parent_element: String,
    pub container_width: u32,
    pub container_height: u32,
    pub margin: Margin,
}

impl ChartConfig {
    pub fn new(parent_element: impl Into<String>) -> Self {
        Self { parent_element: parent_element.into(), ..Self::default() }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.container_width = width;
        self.container_height = height;
        self
    }

    /// Inner drawing width, `container_width - left - right`, saturating at zero.
    pub fn inner_width(&self) -> f64 {
        self.container_width.saturating_sub(self.margin.hsum()) as f64
    }

    /// Inner drawing height, `container_height - top - bottom`, saturating at zero.
    pub fn inner_height(&self) -> f64 {
        self.container_height.saturating_sub(self.margin.vsum()) as f64
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            parent_element: "chart".to_string(),
            container_width: WIDTH,
            container_height: HEIGHT,
            margin: Margin::default(),
        }
    }
}
