// File: crates/barb-core/src/field.rs
// Summary: Wind-barb field plottable: owns the grid and its precomputed colors, exposes
//          bounds/legend/point count to the host and renders one glyph per cell per frame.

use skia_safe as skia;
use tracing::{debug, trace};

use crate::anchor::{GlyphSegment, GlyphTransform};
use crate::arrow::draw_arrow;
use crate::barb::{build_barb, draw_barb};
use crate::colormap::Colormap;
use crate::error::FieldError;
use crate::extent::{extent, AxisLimits};
use crate::intensity::{ColorAssignment, MagnitudeColorMapper};
use crate::legend::LegendItem;
use crate::sample::{Sample, SampleGrid};
use crate::scale::ScaleTransform;
use crate::style::{GlyphKind, GlyphStyle};
use crate::surface::DrawSurface;

/// Where one cell's glyph lands in the current view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphPlacement {
    pub i: usize,
    pub j: usize,
    /// Pixel position of the sample coordinate.
    pub anchor: skia::Point,
    /// Tail/head for the configured anchor mode.
    pub segment: GlyphSegment,
    pub sample: Sample,
    pub color: skia::Color,
}

pub struct WindBarbField {
    grid: SampleGrid,
    colors: ColorAssignment,
    style: GlyphStyle,
    label: Option<String>,
}

impl WindBarbField {
    /// Build a field; colors are resolved here, once. Without a colormap every
    /// glyph uses `default_color`.
    pub fn new(grid: SampleGrid, colormap: Option<&dyn Colormap>, default_color: skia::Color) -> Self {
        let mapper = MagnitudeColorMapper::new(colormap, default_color);
        Self::with_mapper(grid, &mapper)
    }

    pub fn with_mapper(grid: SampleGrid, mapper: &MagnitudeColorMapper<'_>) -> Self {
        let colors = mapper.assign(&grid);
        debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            speed_range = ?MagnitudeColorMapper::speed_range(&grid),
            "wind barb field constructed"
        );
        Self { grid, colors, style: GlyphStyle::default(), label: None }
    }

    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn grid(&self) -> &SampleGrid { &self.grid }
    pub fn colors(&self) -> &ColorAssignment { &self.colors }
    pub fn style(&self) -> &GlyphStyle { &self.style }
    pub fn style_mut(&mut self) -> &mut GlyphStyle { &mut self.style }
    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
    pub fn set_label(&mut self, label: Option<String>) { self.label = label; }

    /// Total number of samples (`xs.len() * ys.len()`).
    pub fn point_count(&self) -> usize { self.grid.len() }

    /// Padded data extent of the coordinate axes.
    pub fn bounds(&self) -> Result<AxisLimits, FieldError> {
        extent(self.grid.xs(), self.grid.ys())
    }

    /// Legend entry colored like the first cell. `None` for an empty field.
    pub fn legend_sample(&self) -> Option<LegendItem> {
        self.colors.first().map(|c| LegendItem::new(self.label.clone(), c))
    }

    /// Check that every coordinate is finite and the current style is usable.
    pub fn validate(&self) -> Result<(), FieldError> {
        for (axis, values) in [("x", self.grid.xs()), ("y", self.grid.ys())] {
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(FieldError::NonFiniteCoordinate { axis, index, value });
            }
        }
        self.style.validate()
    }

    /// Per-cell placements for a view, row-major.
    pub fn placements<'a, C: ScaleTransform + ?Sized>(&'a self, ctx: &'a C) -> impl Iterator<Item = GlyphPlacement> + 'a {
        let transform = GlyphTransform::new(self.style.anchor);
        self.grid
            .iter_cells()
            .zip(self.colors.as_slice().iter())
            .map(move |((i, j, x, y, s), &color)| GlyphPlacement {
                i,
                j,
                anchor: ctx.pixel(x, y),
                segment: transform.segment(ctx, (x, y), (s.speed, s.direction)),
                sample: *s,
                color,
            })
    }

    /// Draw every glyph (and optional marker) for this frame. Returns the
    /// number of glyphs drawn; zero when the field is hidden.
    pub fn render<C, S>(&self, ctx: &C, surface: &mut S) -> usize
    where
        C: ScaleTransform + ?Sized,
        S: DrawSurface + ?Sized,
    {
        if !self.style.is_visible {
            return 0;
        }
        let style = &self.style;
        let barb = build_barb(ctx.px_per_unit_y(), style);

        let mut drawn = 0usize;
        for p in self.placements(ctx) {
            match style.kind {
                GlyphKind::Barb => {
                    draw_barb(surface, p.anchor, p.sample.direction, &barb, p.color, style.line_width);
                }
                GlyphKind::Arrow => {
                    draw_arrow(surface, &p.segment, style.arrowhead_width, style.arrowhead_length, p.color, style.line_width);
                }
            }
            if style.draws_markers() {
                surface.draw_marker(p.anchor, style.marker_shape, style.marker_size, p.color);
            }
            drawn += 1;
        }
        trace!(glyphs = drawn, kind = ?style.kind, px_per_unit_y = ctx.px_per_unit_y(), "rendered wind barb field");
        drawn
    }
}
