// File: crates/barb-core/src/chart.rs
// Summary: Headless raster pipeline: draws a wind-barb field onto a Skia CPU surface and
//          returns RGBA pixels or in-memory PNG bytes.

use anyhow::Result;
use skia_safe as skia;

use crate::extent::AxisLimits;
use crate::field::WindBarbField;
use crate::geometry::RectI32;
use crate::surface::SkiaSurface;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::RenderContext;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw the background grid and plot frame.
    pub draw_frame: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_frame: true,
        }
    }
}

/// A field plus the view it is drawn in. `limits == None` uses the field's
/// own padded bounds.
pub struct BarbChart {
    pub field: WindBarbField,
    pub limits: Option<AxisLimits>,
}

impl BarbChart {
    pub fn new(field: WindBarbField) -> Self {
        Self { field, limits: None }
    }

    pub fn with_limits(mut self, limits: AxisLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Build the per-frame context for a canvas of the given options.
    pub fn context(&self, opts: &RenderOptions) -> Result<RenderContext> {
        let limits = match self.limits {
            Some(l) => l,
            None => self.field.bounds()?,
        };
        Ok(RenderContext::new(opts.width, opts.height, opts.insets, limits))
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<usize> {
        // Styles edited through `style_mut` skip the JSON checks.
        self.field.style().validate()?;
        canvas.clear(opts.theme.background);
        let ctx = self.context(opts)?;
        let plot = ctx.plot_rect();

        if opts.draw_frame {
            draw_grid(canvas, plot, &opts.theme);
        }

        // Glyphs are clipped to the plot rect; the clip is scoped by save/restore.
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        let mut surface = SkiaSurface::new(canvas);
        let drawn = self.field.render(&ctx, &mut surface);
        canvas.restore();

        if opts.draw_frame {
            draw_frame(canvas, plot, &opts.theme);
        }
        Ok(drawn)
    }

    /// Render into a new raster surface and return `(pixels, width, height, stride)`
    /// with pixels in RGBA8 unpremultiplied order.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    /// Render and encode as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    for k in 1..10 {
        let x = l + (r - l) * k as f32 / 10.0;
        canvas.draw_line((x, t), (x, b), &paint);
    }
    for k in 1..6 {
        let y = t + (b - t) * k as f32 / 6.0;
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, plot: RectI32, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.frame);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.5);
    canvas.draw_rect(plot.to_skia(), &paint);
}
