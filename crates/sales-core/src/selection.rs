// File: crates/sales-core/src/selection.rs
// Summary: Per-variant selection state values and their selector tokens.

use std::fmt;
use std::str::FromStr;

use crate::dataset::Metric;
use crate::error::ChartError;

pub const DEFAULT_CATEGORY: &str = "Sports";
pub const DEFAULT_YEAR: &str = "2020";

/// Category + metric driving the bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarSelection {
    pub category: String,
    pub metric: Metric,
}

impl Default for BarSelection {
    fn default() -> Self {
        Self { category: DEFAULT_CATEGORY.to_string(), metric: Metric::Sales }
    }
}

/// Category driving the line and area charts.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSelection {
    pub category: String,
}

impl Default for LineSelection {
    fn default() -> Self {
        Self { category: DEFAULT_CATEGORY.to_string() }
    }
}

/// Year driving the pie chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSelection {
    pub year: String,
}

impl Default for PieSelection {
    fn default() -> Self {
        Self { year: DEFAULT_YEAR.to_string() }
    }
}

/// Rating threshold driving the scatter plot.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScatterSelection {
    pub rating: RatingFilter,
}

/// `>N` keeps records rated strictly above N; `All` disables the filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RatingFilter {
    Above(f64),
    All,
}

impl RatingFilter {
    /// Options offered by the rating selector.
    pub const OPTIONS: [&'static str; 4] = [">3", ">4", ">5", "All"];

    pub fn accepts(&self, rating: f64) -> bool {
        match *self {
            RatingFilter::Above(min) => rating > min,
            RatingFilter::All => true,
        }
    }

    /// Human label for the selector option.
    pub fn label(&self) -> String {
        match self {
            RatingFilter::All => "All Ratings".to_string(),
            other => format!("Rating {other}"),
        }
    }
}

impl Default for RatingFilter {
    fn default() -> Self {
        RatingFilter::Above(3.0)
    }
}

impl fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingFilter::Above(min) => write!(f, ">{}", crate::format::format_number(*min)),
            RatingFilter::All => f.write_str("All"),
        }
    }
}

impl FromStr for RatingFilter {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(RatingFilter::All);
        }
        s.strip_prefix('>')
            .unwrap_or(s)
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(RatingFilter::Above)
            .ok_or_else(|| ChartError::InvalidSelection {
                selector: "rating".to_string(),
                value: s.to_string(),
            })
    }
}
