// File: crates/sales-core/tests/smoke.rs
// Purpose: End-to-end render smoke test writing PNGs through the Skia rasteriser.

use std::path::PathBuf;
use std::sync::Arc;

use sales_core::raster::{render_png_bytes, render_to_png};
use sales_core::{ChartHost, ChartKind, DatasetState, HostConfig};

#[test]
fn render_smoke_png() {
    let data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sales_small.csv");
    let mut host = ChartHost::new(HostConfig::default(), Arc::new(DatasetState::load(data)));
    let out_dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&out_dir).unwrap();

    for kind in ChartKind::ALL {
        host.load_chart(kind.as_str()).expect("known chart");
        let surface = host.surface().expect("active surface");

        let out = out_dir.join(format!("smoke_{kind}.png"));
        render_to_png(surface, &out).expect("render should succeed");
        let meta = std::fs::metadata(&out).expect("output exists");
        assert!(meta.len() > 0, "png should be non-empty");

        let bytes = render_png_bytes(surface).expect("render bytes");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        let img = image::load_from_memory(&bytes).expect("decode png");
        assert_eq!((img.width(), img.height()), (700, 430));
    }
}

#[test]
fn blank_surface_still_rasterises() {
    let mut host = ChartHost::new(HostConfig::default(), Arc::new(DatasetState::load("missing.csv")));
    host.load_chart("pie").unwrap();
    let surface = host.surface().unwrap();
    assert!(surface.is_blank());
    let bytes = render_png_bytes(surface).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
