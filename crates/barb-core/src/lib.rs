// File: crates/barb-core/src/lib.rs
// Summary: Core library entry point; exports the wind-barb field model, glyph geometry and rendering.

pub mod anchor;
pub mod arrow;
pub mod barb;
pub mod chart;
pub mod colormap;
pub mod error;
pub mod extent;
pub mod field;
pub mod geometry;
pub mod intensity;
pub mod legend;
pub mod marker;
pub mod sample;
pub mod scale;
pub mod style;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;

pub use anchor::{ArrowAnchor, GlyphSegment, GlyphTransform};
pub use barb::{build_barb, draw_barb, BarbGlyph, BarbMetrics};
pub use chart::{BarbChart, RenderOptions};
pub use colormap::{Colormap, Gradient};
pub use error::FieldError;
pub use extent::{extent, AxisLimits};
pub use field::{GlyphPlacement, WindBarbField};
pub use intensity::{ColorAssignment, IntensityRange, MagnitudeColorMapper};
pub use legend::LegendItem;
pub use marker::MarkerShape;
pub use sample::{Sample, SampleGrid};
pub use scale::ScaleTransform;
pub use style::{GlyphKind, GlyphStyle};
pub use surface::{DrawCommand, DrawSurface, Recorder, SkiaSurface};
pub use theme::Theme;
pub use view::RenderContext;
