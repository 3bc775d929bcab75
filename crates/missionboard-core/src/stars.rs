//! Procedural star field, generated once per container at startup.

use rand::Rng;

/// Viewports narrower than this get the smaller star count
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
pub const NARROW_STAR_COUNT: usize = 50;
pub const WIDE_STAR_COUNT: usize = 100;

/// One twinkling point
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Horizontal position, percent of the container
    pub left_pct: f64,
    /// Vertical position, percent of the container
    pub top_pct: f64,
    pub size_px: f64,
    /// Twinkle animation start offset
    pub delay_s: f64,
    /// Twinkle animation period
    pub duration_s: f64,
}

impl Star {
    /// Inline style for the star element
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.left_pct, self.top_pct, self.size_px, self.size_px, self.delay_s, self.duration_s
        )
    }
}

pub fn star_count(viewport_width: f64) -> usize {
    if viewport_width < NARROW_VIEWPORT_PX {
        NARROW_STAR_COUNT
    } else {
        WIDE_STAR_COUNT
    }
}

pub fn generate_stars<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            size_px: rng.random_range(1.0..3.0),
            delay_s: rng.random_range(0.0..3.0),
            duration_s: rng.random_range(2.0..5.0),
        })
        .collect()
}
