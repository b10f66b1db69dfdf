// File: crates/sales-core/src/lib.rs
// Summary: Core library entry point; exports dataset loading, chart variants, host and exporters.

pub mod axis;
pub mod chart;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod geometry;
pub mod host;
pub mod raster;
pub mod scale;
pub mod selection;
pub mod surface;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use chart::{build_chart, ActiveChart, Chart, ChartKind, ChartVariant, RenderOutcome};
pub use charts::{Area, Bar, Line, Pie, Scatter};
pub use config::HostConfig;
pub use dataset::{Dataset, DatasetState, Metric, Record};
pub use error::{ChartError, ChartResult, LoadError};
pub use host::ChartHost;
pub use selection::{BarSelection, LineSelection, PieSelection, RatingFilter, ScatterSelection};
pub use surface::{Selector, Surface};
pub use theme::Theme;
pub use types::{ChartConfig, Margin};
pub use view::{DerivedView, NoData, UpdateOutcome};
