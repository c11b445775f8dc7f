// File: crates/barb-core/tests/anchor_transform.rs
// Purpose: Tail/head placement per anchor mode through a host-supplied scale, and
//          anchor parsing from configuration strings.

use barb_core::{
    ArrowAnchor, FieldError, GlyphStyle, GlyphTransform, Sample, SampleGrid, ScaleTransform, WindBarbField,
};
use skia_safe as skia;

/// 10 px per unit, origin at (100, 200), y up.
struct Fixed;

impl ScaleTransform for Fixed {
    fn pixel_x(&self, x: f64) -> f32 { (100.0 + 10.0 * x) as f32 }
    fn pixel_y(&self, y: f64) -> f32 { (200.0 - 10.0 * y) as f32 }
    fn px_per_unit_x(&self) -> f64 { 10.0 }
    fn px_per_unit_y(&self) -> f64 { 10.0 }
}

fn pt(x: f32, y: f32) -> skia::Point { skia::Point::new(x, y) }

#[test]
fn center_anchor_straddles_the_sample() {
    let seg = GlyphTransform::new(ArrowAnchor::Center).segment(&Fixed, (0.0, 0.0), (4.0, 2.0));
    assert_eq!(seg.tail, Fixed.pixel(-2.0, -1.0));
    assert_eq!(seg.head, Fixed.pixel(2.0, 1.0));
    assert_eq!(seg.tail, pt(80.0, 210.0));
}

#[test]
fn tip_anchor_puts_head_on_sample() {
    let seg = GlyphTransform::new(ArrowAnchor::Tip).segment(&Fixed, (3.0, -1.0), (5.0, 45.0));
    assert_eq!(seg.head, Fixed.pixel(3.0, -1.0));
    assert_eq!(seg.tail, Fixed.pixel(-2.0, -46.0));
}

#[test]
fn base_anchor_puts_tail_on_sample() {
    let seg = GlyphTransform::new(ArrowAnchor::Base).segment(&Fixed, (1.0, 1.0), (2.0, 3.0));
    assert_eq!(seg.tail, Fixed.pixel(1.0, 1.0));
    assert_eq!(seg.head, Fixed.pixel(3.0, 4.0));
}

#[test]
fn field_placements_follow_style_anchor() {
    let grid = SampleGrid::try_new(vec![0.0, 1.0], vec![0.0], vec![vec![Sample::new(4.0, 2.0)], vec![Sample::new(1.0, 1.0)]])
        .expect("grid");
    let field = WindBarbField::new(grid, None, skia::Color::WHITE)
        .with_style(GlyphStyle { anchor: ArrowAnchor::Tip, ..GlyphStyle::default() });

    let placed: Vec<_> = field.placements(&Fixed).collect();
    assert_eq!(placed.len(), 2);
    for p in &placed {
        assert_eq!(p.segment.head, p.anchor);
    }
    assert_eq!(placed[0].segment.tail, Fixed.pixel(-4.0, -2.0));
    assert_eq!(placed[1].anchor, Fixed.pixel(1.0, 0.0));
}

#[test]
fn anchor_strings_parse_or_fail_loudly() {
    assert_eq!("center".parse::<ArrowAnchor>().expect("center"), ArrowAnchor::Center);
    for name in ["head", "tail", "middle", ""] {
        assert!(matches!(name.parse::<ArrowAnchor>(), Err(FieldError::UnsupportedAnchor(_))), "{name:?} accepted");
    }
    assert_eq!(ArrowAnchor::default(), ArrowAnchor::Center);

    let err = "left".parse::<ArrowAnchor>().expect_err("unsupported");
    assert!(matches!(err, FieldError::UnsupportedAnchor(_)));
    assert!(err.to_string().contains("left"));
}

#[test]
fn style_json_rejects_unknown_anchor() {
    let ok = GlyphStyle::from_json(r#"{ "anchor": "base" }"#).expect("valid style");
    assert_eq!(ok.anchor, ArrowAnchor::Base);

    let err = GlyphStyle::from_json(r#"{ "anchor": "diagonal" }"#).expect_err("bad anchor");
    assert!(matches!(err, FieldError::InvalidStyle(_)));
}
