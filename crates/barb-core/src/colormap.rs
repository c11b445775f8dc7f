// File: crates/barb-core/src/colormap.rs
// Summary: Colormap capability (intensity in [0,1] -> color) and gradient presets.

use skia_safe as skia;

/// Resolves a normalized intensity to a color. Hosts can plug in their own
/// lookup tables; `Gradient` covers the common cases.
pub trait Colormap {
    fn name(&self) -> &str;
    fn resolve(&self, intensity: f64) -> skia::Color;
}

/// Piecewise-linear gradient over sorted color stops.
#[derive(Clone, Debug)]
pub struct Gradient {
    name: String,
    stops: Vec<(f64, skia::Color)>,
}

impl Gradient {
    /// Create a gradient from `(position, color)` stops. Positions are sorted;
    /// an empty stop list resolves everything to opaque black.
    pub fn new(name: impl Into<String>, mut stops: Vec<(f64, skia::Color)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { name: name.into(), stops }
    }

    pub fn viridis() -> Self {
        Self::new(
            "viridis",
            vec![
                (0.00, skia::Color::from_rgb(68, 1, 84)),
                (0.25, skia::Color::from_rgb(59, 82, 139)),
                (0.50, skia::Color::from_rgb(33, 145, 140)),
                (0.75, skia::Color::from_rgb(94, 201, 98)),
                (1.00, skia::Color::from_rgb(253, 231, 37)),
            ],
        )
    }

    pub fn turbo() -> Self {
        Self::new(
            "turbo",
            vec![
                (0.00, skia::Color::from_rgb(48, 18, 59)),
                (0.20, skia::Color::from_rgb(70, 134, 251)),
                (0.40, skia::Color::from_rgb(27, 229, 181)),
                (0.60, skia::Color::from_rgb(164, 252, 60)),
                (0.80, skia::Color::from_rgb(251, 128, 34)),
                (1.00, skia::Color::from_rgb(122, 4, 3)),
            ],
        )
    }

    pub fn grayscale() -> Self {
        Self::new(
            "grayscale",
            vec![(0.0, skia::Color::from_rgb(0, 0, 0)), (1.0, skia::Color::from_rgb(255, 255, 255))],
        )
    }

    /// Calm-to-storm ramp used for wind speed maps.
    pub fn wind() -> Self {
        Self::new(
            "wind",
            vec![
                (0.00, skia::Color::from_rgb(200, 200, 255)),
                (0.25, skia::Color::from_rgb(100, 150, 255)),
                (0.50, skia::Color::from_rgb(0, 255, 0)),
                (0.75, skia::Color::from_rgb(255, 255, 0)),
                (1.00, skia::Color::from_rgb(255, 0, 0)),
            ],
        )
    }

}

impl Colormap for Gradient {
    fn name(&self) -> &str { &self.name }

    fn resolve(&self, intensity: f64) -> skia::Color {
        let t = if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) };
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return skia::Color::BLACK,
        };
        if t <= first.0 { return first.1; }
        if t >= last.0 { return last.1; }
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = (p1 - p0).max(1e-12);
                return lerp_color(c0, c1, ((t - p0) / span) as f32);
            }
        }
        last.1
    }
}

fn lerp_color(a: skia::Color, b: skia::Color, t: f32) -> skia::Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round() as u8 };
    skia::Color::from_argb(mix(a.a(), b.a()), mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Return the built-in gradient presets.
pub fn presets() -> Vec<Gradient> {
    vec![Gradient::viridis(), Gradient::turbo(), Gradient::grayscale(), Gradient::wind()]
}

/// Find a preset by name (case-insensitive).
pub fn find(name: &str) -> Option<Gradient> {
    presets().into_iter().find(|g| g.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_resolve_to_end_stops() {
        let g = Gradient::grayscale();
        assert_eq!(g.resolve(0.0), skia::Color::from_rgb(0, 0, 0));
        assert_eq!(g.resolve(1.0), skia::Color::from_rgb(255, 255, 255));
    }

    #[test]
    fn out_of_range_and_nan_are_clamped() {
        let g = Gradient::grayscale();
        assert_eq!(g.resolve(-3.0), g.resolve(0.0));
        assert_eq!(g.resolve(7.5), g.resolve(1.0));
        assert_eq!(g.resolve(f64::NAN), g.resolve(0.0));
    }

    #[test]
    fn midpoint_interpolates() {
        let c = Gradient::grayscale().resolve(0.5);
        assert!((127..=128).contains(&c.r()));
        assert_eq!(c.r(), c.g());
        assert_eq!(c.a(), 255);
    }

    #[test]
    fn preset_lookup_is_case_insensitive() {
        assert_eq!(find("VIRIDIS").map(|g| g.name().to_string()), Some("viridis".to_string()));
        assert!(find("nope").is_none());
    }
}
