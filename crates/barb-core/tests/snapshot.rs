// File: crates/barb-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small field to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use barb_core::{
    ArrowAnchor, BarbChart, GlyphKind, GlyphStyle, Gradient, MarkerShape, RenderOptions, Sample, SampleGrid,
    WindBarbField,
};
use skia_safe as skia;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(style: GlyphStyle) -> Vec<u8> {
    let xs: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let ys: Vec<f64> = (0..5).map(|j| j as f64).collect();
    let grid = SampleGrid::from_fn(xs, ys, |i, j, x, y| {
        Sample::new((x * 0.8 + y * 1.5).abs(), ((i * 45 + j * 20) % 360) as f64)
    })
    .expect("grid");
    let turbo = Gradient::turbo();
    let field = WindBarbField::new(grid, Some(&turbo), skia::Color::WHITE).with_style(style);

    let mut opts = RenderOptions::default();
    opts.width = 480;
    opts.height = 320;
    BarbChart::new(field).render_to_png_bytes(&opts).expect("render bytes")
}

#[test]
fn golden_barb_field() {
    let bytes = render_bytes(GlyphStyle::default());
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/barb_field.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_arrow_field_with_markers() {
    let style = GlyphStyle {
        kind: GlyphKind::Arrow,
        anchor: ArrowAnchor::Tip,
        marker_shape: MarkerShape::FilledCircle,
        marker_size: 4.0,
        ..GlyphStyle::default()
    };
    let bytes = render_bytes(style);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/arrow_field.png");
    write_or_compare(&path, &bytes);
}
