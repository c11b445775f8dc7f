// File: crates/barb-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test producing PNG bytes in memory.

use barb_core::{BarbChart, Gradient, RenderOptions, Sample, SampleGrid, WindBarbField};
use skia_safe as skia;

#[test]
fn render_smoke_png() {
    // Small rotating field with increasing speed
    let xs: Vec<f64> = (0..6).map(|i| i as f64).collect();
    let ys: Vec<f64> = (0..4).map(|j| j as f64).collect();
    let grid = SampleGrid::from_fn(xs, ys, |i, j, _, _| {
        Sample::new((i + j) as f64 * 2.0, (i * 30 + j * 15) as f64)
    })
    .expect("valid grid");

    let viridis = Gradient::viridis();
    let field = WindBarbField::new(grid, Some(&viridis), skia::Color::WHITE).with_label("wind");
    let chart = BarbChart::new(field);

    let opts = RenderOptions::default();
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_light_theme_monochrome() {
    let grid = SampleGrid::from_fn(vec![0.0, 5.0, 10.0], vec![0.0, 5.0], |_, j, _, _| Sample::new(3.0, j as f64 * 180.0))
        .expect("valid grid");
    let opts = RenderOptions { theme: barb_core::theme::find("LIGHT"), ..RenderOptions::default() };
    let field = WindBarbField::new(grid, None, opts.theme.glyph);
    assert!(field.colors().as_slice().iter().all(|&c| c == opts.theme.glyph));

    let (px, w, h, _) = BarbChart::new(field).render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(px.len(), (w * h * 4) as usize);
    // light background in the corner
    assert!(px[0] > 240 && px[1] > 240 && px[2] > 240);
}
