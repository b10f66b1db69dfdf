// File: crates/demo/src/main.rs
// Summary: Dashboard CLI; loads the sales CSV once, swaps through the requested charts and writes SVG/PNG files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sales_core::raster::render_to_png;
use sales_core::{ChartHost, ChartKind, DatasetState, HostConfig, UpdateOutcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Format {
    Svg,
    Png,
    Both,
}

/// Command-line arguments for the sales dashboard
#[derive(Parser, Debug)]
#[command(version, about = "Render sales charts from a CSV file")]
struct Args {
    /// Sales CSV (Category, Year, Sales, Cost, Profit, Rating)
    #[arg(long, default_value = "data/sales_data_100.csv")]
    data: String,

    /// Chart to render (line, bar, scatter, pie, area); repeatable. Defaults to the configured chart.
    #[arg(long = "chart")]
    charts: Vec<String>,

    /// Render every chart type
    #[arg(long, action)]
    all: bool,

    /// Category for bar, line and area charts
    #[arg(long)]
    category: Option<String>,

    /// Metric for the bar chart (Sales, Cost, Profit)
    #[arg(long)]
    metric: Option<String>,

    /// Year for the pie chart
    #[arg(long)]
    year: Option<String>,

    /// Rating filter for the scatter plot (>3, >4, >5, All)
    #[arg(long)]
    rating: Option<String>,

    #[arg(long, value_enum, default_value = "both")]
    format: Format,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Host configuration TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset name, overriding the config file
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => HostConfig::from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => HostConfig::default(),
    };
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }

    let (path, used_alt) = resolve_path(&args.data)?;
    if used_alt {
        info!(path = %path.display(), "extension swapped between .csv/.cvs");
    }
    let data = Arc::new(DatasetState::load(&path));
    if let DatasetState::Failed(err) = data.as_ref() {
        anyhow::bail!("failed to load '{}': {err}", path.display());
    }

    let tokens: Vec<String> = if args.all {
        ChartKind::ALL.iter().map(|k| k.as_str().to_string()).collect()
    } else if args.charts.is_empty() {
        vec![config.default_chart.clone()]
    } else {
        args.charts.clone()
    };

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output dir {}", args.out.display()))?;

    let mut host = ChartHost::new(config, data);
    let selections = requested_selections(&args);
    let written = render_charts(&mut host, &tokens, &selections, &path, &args.out, args.format)?;
    info!(charts = written, requested = tokens.len(), "done");

    Ok(())
}

/// Load each chart in turn, apply the selections it understands and write its
/// outputs. Unknown chart tokens are logged and skipped. Returns how many
/// charts were written.
fn render_charts(
    host: &mut ChartHost,
    tokens: &[String],
    selections: &[(&'static str, &str)],
    input: &Path,
    out_dir: &Path,
    format: Format,
) -> Result<usize> {
    let mut written = 0;
    for token in tokens {
        let outcome = match host.load_chart(token) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(chart = %token, error = %err, "skipping chart");
                continue;
            }
        };
        report(token, &outcome);

        for &(selector, value) in selections {
            let accepted = host.active().map(|c| accepts(c.kind(), selector)).unwrap_or(false);
            if !accepted {
                continue;
            }
            let outcome = host
                .select(selector, value)
                .with_context(|| format!("{token}: invalid {selector} '{value}'"))?;
            report(token, &outcome);
        }

        write_outputs(host, token, input, out_dir, format)?;
        written += 1;
    }
    Ok(written)
}

fn requested_selections(args: &Args) -> Vec<(&'static str, &str)> {
    [
        ("category", args.category.as_deref()),
        ("metric", args.metric.as_deref()),
        ("year", args.year.as_deref()),
        ("rating", args.rating.as_deref()),
    ]
    .into_iter()
    .filter_map(|(selector, value)| value.map(|v| (selector, v)))
    .collect()
}

/// Selector ids each chart kind responds to.
fn accepts(kind: ChartKind, selector: &str) -> bool {
    match kind {
        ChartKind::Bar => matches!(selector, "category" | "metric"),
        ChartKind::Line | ChartKind::Area => selector == "category",
        ChartKind::Pie => selector == "year",
        ChartKind::Scatter => selector == "rating",
    }
}

fn report(token: &str, outcome: &UpdateOutcome) {
    match outcome {
        UpdateOutcome::Ready(view) => info!(chart = %token, points = view.len(), "rendered"),
        UpdateOutcome::NoData(reason) => warn!(chart = %token, "{reason}"),
        UpdateOutcome::SurfaceUnavailable(_) => warn!(chart = %token, "surface unavailable; nothing drawn"),
        UpdateOutcome::LoadFailed(err) => warn!(chart = %token, error = %err, "dataset unavailable"),
    }
}

fn write_outputs(host: &ChartHost, token: &str, input: &Path, out_dir: &Path, format: Format) -> Result<()> {
    let out = out_name_with(out_dir, input, token);
    if matches!(format, Format::Svg | Format::Both) {
        let svg = host.export_svg().context("no active chart to export")?;
        let svg_path = out.with_extension("svg");
        std::fs::write(&svg_path, svg).with_context(|| format!("writing {}", svg_path.display()))?;
        println!("Wrote {}", svg_path.display());
    }
    if matches!(format, Format::Png | Format::Both) {
        let surface = host.surface().context("no active chart to export")?;
        render_to_png(surface, &out)?;
        println!("Wrote {}", out.display());
    }
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_str()?.to_ascii_lowercase();
    let alt = match ext.as_str() {
        "csv" => "cvs",
        "cvs" => "csv",
        _ => return None,
    };
    Some(p.with_extension(alt))
}

/// Produce output file name like <out>/chart_<stem>_<token>.png
fn out_name_with(out_dir: &Path, input: &Path, token: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("");
    let short = stem.split('_').take(2).collect::<Vec<_>>().join("_");
    let token = token.trim().to_ascii_lowercase();
    if short.is_empty() {
        out_dir.join(format!("chart_{token}.png"))
    } else {
        out_dir.join(format!("chart_{short}_{token}.png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_name_uses_stem_prefix_and_chart() {
        let out = out_name_with(Path::new("target/out"), Path::new("data/sales_data_100.csv"), "Pie");
        assert_eq!(out, PathBuf::from("target/out/chart_sales_data_pie.png"));
    }

    #[test]
    fn swap_ext_handles_typo() {
        assert_eq!(swap_ext(Path::new("a.cvs")), Some(PathBuf::from("a.csv")));
        assert_eq!(swap_ext(Path::new("a.txt")), None);
    }

    #[test]
    fn unknown_chart_token_is_skipped() {
        let input = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sales_data_100.csv");
        let out_dir = PathBuf::from("target/test_out/unknown_token");
        std::fs::create_dir_all(&out_dir).unwrap();
        let mut host = ChartHost::new(HostConfig::default(), Arc::new(DatasetState::load(&input)));
        let tokens = vec!["donut".to_string(), "pie".to_string()];

        let written = render_charts(&mut host, &tokens, &[], &input, &out_dir, Format::Svg).expect("run continues");
        assert_eq!(written, 1);
        assert!(out_dir.join("chart_sales_data_pie.svg").exists());
        assert!(!out_dir.join("chart_sales_data_donut.svg").exists());
    }

    #[test]
    fn selectors_route_to_matching_chart() {
        assert!(accepts(ChartKind::Bar, "metric"));
        assert!(!accepts(ChartKind::Line, "metric"));
        assert!(accepts(ChartKind::Scatter, "rating"));
    }
}
