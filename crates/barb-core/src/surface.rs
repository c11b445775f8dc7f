// File: crates/barb-core/src/surface.rs
// Summary: Drawing surface abstraction (Skia canvas or a recording display list) and a
//          save/restore guard that scopes transform state to one glyph.

use std::ops::{Deref, DerefMut};

use skia_safe as skia;

use crate::marker::{self, MarkerShape};

/// The drawing primitives the glyph renderer needs from a host.
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    /// Clockwise rotation in degrees (y-down frame).
    fn rotate(&mut self, degrees: f32);
    fn draw_polyline(&mut self, points: &[skia::Point], color: skia::Color, width: f32);
    fn fill_polygon(&mut self, points: &[skia::Point], color: skia::Color);
    fn draw_marker(&mut self, center: skia::Point, shape: MarkerShape, size: f32, color: skia::Color);
}

/// Saves the surface transform on creation and restores it on drop, so state
/// never leaks into the next glyph even on early return.
pub struct SavedTransform<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: DrawSurface + ?Sized> SavedTransform<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: DrawSurface + ?Sized> Deref for SavedTransform<'_, S> {
    type Target = S;
    fn deref(&self) -> &S { self.surface }
}

impl<S: DrawSurface + ?Sized> DerefMut for SavedTransform<'_, S> {
    fn deref_mut(&mut self) -> &mut S { self.surface }
}

impl<S: DrawSurface + ?Sized> Drop for SavedTransform<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}

// ---- skia ---------------------------------------------------------------------

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        Self { canvas }
    }
}

fn polyline_path(points: &[skia::Point], close: bool) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        if close {
            path.close();
        }
    }
    path
}

impl DrawSurface for SkiaSurface<'_> {
    fn save(&mut self) {
        self.canvas.save();
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.canvas.translate((dx, dy));
    }

    fn rotate(&mut self, degrees: f32) {
        self.canvas.rotate(degrees, None);
    }

    fn draw_polyline(&mut self, points: &[skia::Point], color: skia::Color, width: f32) {
        if points.len() < 2 { return; }
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_color(color);
        self.canvas.draw_path(&polyline_path(points, false), &stroke);
    }

    fn fill_polygon(&mut self, points: &[skia::Point], color: skia::Color) {
        if points.len() < 3 { return; }
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);
        self.canvas.draw_path(&polyline_path(points, true), &fill);
    }

    fn draw_marker(&mut self, center: skia::Point, shape: MarkerShape, size: f32, color: skia::Color) {
        marker::draw_skia(self.canvas, center, shape, size, color);
    }
}

// ---- recording ----------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { dx: f32, dy: f32 },
    Rotate { degrees: f32 },
    /// `local` as passed in; `device` after the current transform.
    Polyline { local: Vec<skia::Point>, device: Vec<skia::Point>, color: skia::Color, width: f32 },
    Polygon { local: Vec<skia::Point>, device: Vec<skia::Point>, color: skia::Color },
    Marker { center: skia::Point, device: skia::Point, shape: MarkerShape, size: f32, color: skia::Color },
}

/// Display-list surface. Records every call together with device-space
/// coordinates so glyph output can be inspected without rasterizing.
#[derive(Debug)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
    matrix: skia::Matrix,
    stack: Vec<skia::Matrix>,
    unbalanced_restores: usize,
}

impl Default for Recorder {
    fn default() -> Self {
        Self { commands: Vec::new(), matrix: skia::Matrix::new_identity(), stack: Vec::new(), unbalanced_restores: 0 }
    }
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Number of saves not yet matched by a restore.
    pub fn depth(&self) -> usize { self.stack.len() }

    /// Current local-to-device transform.
    pub fn matrix(&self) -> &skia::Matrix { &self.matrix }

    /// Restores issued with nothing saved.
    pub fn unbalanced_restores(&self) -> usize { self.unbalanced_restores }

    pub fn polylines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Polyline { .. }))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Polygon { .. }))
    }

    pub fn markers(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Marker { .. }))
    }

    fn device(&self, points: &[skia::Point]) -> Vec<skia::Point> {
        points.iter().map(|p| self.matrix.map_point(*p)).collect()
    }
}

impl DrawSurface for Recorder {
    fn save(&mut self) {
        self.stack.push(self.matrix);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(m) => self.matrix = m,
            None => self.unbalanced_restores += 1,
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.matrix.pre_translate((dx, dy));
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn rotate(&mut self, degrees: f32) {
        self.matrix.pre_rotate(degrees, None::<skia::Point>);
        self.commands.push(DrawCommand::Rotate { degrees });
    }

    fn draw_polyline(&mut self, points: &[skia::Point], color: skia::Color, width: f32) {
        let device = self.device(points);
        self.commands.push(DrawCommand::Polyline { local: points.to_vec(), device, color, width });
    }

    fn fill_polygon(&mut self, points: &[skia::Point], color: skia::Color) {
        let device = self.device(points);
        self.commands.push(DrawCommand::Polygon { local: points.to_vec(), device, color });
    }

    fn draw_marker(&mut self, center: skia::Point, shape: MarkerShape, size: f32, color: skia::Color) {
        let device = self.matrix.map_point(center);
        self.commands.push(DrawCommand::Marker { center, device, shape, size, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_on_drop() {
        let mut rec = Recorder::new();
        {
            let mut g = SavedTransform::new(&mut rec);
            g.translate(5.0, 5.0);
            assert_eq!(g.depth(), 1);
        }
        assert_eq!(rec.depth(), 0);
        assert_eq!(rec.commands().first(), Some(&DrawCommand::Save));
        assert_eq!(rec.commands().last(), Some(&DrawCommand::Restore));
    }

    #[test]
    fn translate_then_rotate_maps_points() {
        let mut rec = Recorder::new();
        rec.translate(100.0, 50.0);
        rec.rotate(90.0);
        rec.draw_polyline(&[skia::Point::new(0.0, -10.0)], skia::Color::BLACK, 1.0);
        match &rec.commands()[2] {
            DrawCommand::Polyline { device, .. } => {
                assert!((device[0].x - 110.0).abs() < 1e-4);
                assert!((device[0].y - 50.0).abs() < 1e-4);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn tracks_the_same_matrix_as_a_skia_canvas() {
        let mut raster = skia::surfaces::raster_n32_premul((64, 64)).expect("raster surface");
        let canvas = raster.canvas();
        let mut rec = Recorder::new();
        for (dx, dy, deg) in [(20.0, 30.0, 35.0), (-4.0, 7.5, 200.0)] {
            canvas.translate((dx, dy));
            canvas.rotate(deg, None);
            rec.translate(dx, dy);
            rec.rotate(deg);
        }
        let want = canvas.local_to_device_as_3x3();
        let p = skia::Point::new(3.0, -9.0);
        let (a, b) = (want.map_point(p), rec.matrix().map_point(p));
        assert!((a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3, "{a:?} vs {b:?}");
    }

    #[test]
    fn restore_without_save_is_counted() {
        let mut rec = Recorder::new();
        rec.restore();
        assert_eq!(rec.unbalanced_restores(), 1);
    }
}
