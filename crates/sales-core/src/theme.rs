// File: crates/sales-core/src/theme.rs
// Summary: Dashboard/light theming, categorical palette and sequential colour ramp.

use skia_safe as skia;

/// 8-bit RGBA colour usable by both the SVG and the Skia exporters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// `#rrggbb`, or `rgba(...)` when translucent.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }

    pub fn to_skia(&self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }

    /// Linear blend, `t` clamped to `[0, 1]`.
    pub fn lerp(&self, other: Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgba::rgba(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b), mix(self.a, other.a))
    }
}

/// Ten-colour categorical palette used for pie slices.
pub const CATEGORY10: [Rgba; 10] = [
    Rgba::rgb(0x1f, 0x77, 0xb4),
    Rgba::rgb(0xff, 0x7f, 0x0e),
    Rgba::rgb(0x2c, 0xa0, 0x2c),
    Rgba::rgb(0xd6, 0x27, 0x28),
    Rgba::rgb(0x94, 0x67, 0xbd),
    Rgba::rgb(0x8c, 0x56, 0x4b),
    Rgba::rgb(0xe3, 0x77, 0xc2),
    Rgba::rgb(0x7f, 0x7f, 0x7f),
    Rgba::rgb(0xbc, 0xbd, 0x22),
    Rgba::rgb(0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub title: Rgba,
    pub text: Rgba,
    pub axis_line: Rgba,
    pub bar_fill: Rgba,
    pub bar_hover: Rgba,
    pub line_stroke: Rgba,
    pub point_fill: Rgba,
    pub area_fill: Rgba,
    pub slice_label: Rgba,
    pub control_background: Rgba,
    pub control_text: Rgba,
    /// Low and high ends of the sequential ramp (scatter colouring).
    pub ramp_low: Rgba,
    pub ramp_high: Rgba,
}

impl Theme {
    /// Dark dashboard look: yellow text, sky-blue bars, amber controls.
    pub fn dashboard() -> Self {
        Self {
            name: "dashboard",
            background: Rgba::rgb(0x1e, 0x1e, 0x2f),
            title: Rgba::rgb(0xff, 0xff, 0x00),
            text: Rgba::rgb(0xff, 0xff, 0x00),
            axis_line: Rgba::rgb(0xd0, 0xd0, 0xd0),
            bar_fill: Rgba::rgb(0x87, 0xce, 0xfa),
            bar_hover: Rgba::rgb(0x46, 0x82, 0xb4),
            line_stroke: Rgba::rgb(0x87, 0xce, 0xfa),
            point_fill: Rgba::rgb(0xff, 0xcc, 0x00),
            area_fill: Rgba::rgba(0x87, 0xce, 0xfa, 0x66),
            slice_label: Rgba::rgb(0xff, 0xff, 0xff),
            control_background: Rgba::rgb(0xff, 0xcc, 0x00),
            control_text: Rgba::rgb(0x33, 0x33, 0x33),
            ramp_low: Rgba::rgb(0xf7, 0xfb, 0xff),
            ramp_high: Rgba::rgb(0x08, 0x30, 0x6b),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(0xfa, 0xfa, 0xfc),
            title: Rgba::rgb(0x14, 0x14, 0x1e),
            text: Rgba::rgb(0x3c, 0x3c, 0x46),
            axis_line: Rgba::rgb(0x3c, 0x3c, 0x46),
            bar_fill: Rgba::rgb(0x20, 0x78, 0xc8),
            bar_hover: Rgba::rgb(0x10, 0x4a, 0x80),
            line_stroke: Rgba::rgb(0x20, 0x78, 0xc8),
            point_fill: Rgba::rgb(0xe0, 0x8a, 0x00),
            area_fill: Rgba::rgba(0x20, 0x78, 0xc8, 0x50),
            slice_label: Rgba::rgb(0xff, 0xff, 0xff),
            control_background: Rgba::rgb(0xe6, 0xe6, 0xeb),
            control_text: Rgba::rgb(0x14, 0x14, 0x1e),
            ramp_low: Rgba::rgb(0xde, 0xeb, 0xf7),
            ramp_high: Rgba::rgb(0x08, 0x45, 0x94),
        }
    }

    /// Colour for slice `i`, cycling through the categorical palette.
    pub fn category_color(&self, i: usize) -> Rgba {
        CATEGORY10[i % CATEGORY10.len()]
    }

    /// Sequential colour for `v` within `[min, max]`; a flat domain maps to the midpoint.
    pub fn ramp(&self, v: f64, min: f64, max: f64) -> Rgba {
        let span = max - min;
        let t = if span.abs() < 1e-12 { 0.5 } else { (v - min) / span };
        self.ramp_low.lerp(self.ramp_high, t)
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::dashboard() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dashboard(), Theme::light()]
}

/// Find a theme by its `name`, falling back to the dashboard theme.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dashboard()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_output() {
        assert_eq!(Rgba::rgb(0x87, 0xce, 0xfa).to_css(), "#87cefa");
        assert_eq!(Rgba::rgba(0, 0, 0, 0).to_css(), "rgba(0, 0, 0, 0.000)");
    }

    #[test]
    fn ramp_endpoints_and_flat_domain() {
        let t = Theme::dashboard();
        assert_eq!(t.ramp(1.0, 1.0, 5.0), t.ramp_low);
        assert_eq!(t.ramp(5.0, 1.0, 5.0), t.ramp_high);
        assert_eq!(t.ramp(2.0, 2.0, 2.0), t.ramp_low.lerp(t.ramp_high, 0.5));
    }

    #[test]
    fn unknown_theme_falls_back() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("nope").name, "dashboard");
    }
}
