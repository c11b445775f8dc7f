// File: crates/barb-core/src/types.rs
// Summary: Shared constants (surface size) and plot insets.

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Screen margins around the plot rect, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(px: u32) -> Self {
        Self::new(px, px, px, px)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(48, 24, 24, 40)
    }
}
