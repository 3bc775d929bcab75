//! Parallax math for the decorative planets and the scroll progress bar.
//!
//! Each frame:
//! 1. The smoothed pointer offset moves 10% of the way toward its target
//!    (first-order low-pass, frame-rate dependent).
//! 2. Planet `i` is translated by `smoothed * (10 + 5i)` px per axis, plus
//!    `distance * 30` px vertically, and rotated by `scroll * (0.05 + 0.02i)`
//!    degrees, where `distance` is the planet's offset from the viewport
//!    center in viewport heights.
//! 3. The progress bar width is the scrolled share of the document, capped
//!    at 100%.

use std::time::Duration;

/// Fraction of the remaining gap covered per frame
pub const SMOOTHING: f64 = 0.1;
/// Pointer travel of the first planet, in px
pub const POINTER_BASE_PX: f64 = 10.0;
/// Extra pointer travel per planet index, in px
pub const POINTER_STEP_PX: f64 = 5.0;
/// Vertical parallax per viewport height of distance, in px
pub const DISTANCE_PX: f64 = 30.0;
/// Rotation of the first planet per scrolled px, in degrees
pub const ROTATION_BASE: f64 = 0.05;
/// Extra rotation per planet index, in degrees per px
pub const ROTATION_STEP: f64 = 0.02;
/// Cadence of the frame loop on the desktop host
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Exponential moving average of the pointer offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoother {
    current: Vec2,
    target: Vec2,
    factor: f64,
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(SMOOTHING)
    }
}

impl Smoother {
    pub fn new(factor: f64) -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            factor,
        }
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Advance one frame toward the target
    pub fn step(&mut self) -> Vec2 {
        self.current.x += (self.target.x - self.current.x) * self.factor;
        self.current.y += (self.target.y - self.current.y) * self.factor;
        self.current
    }

    /// Jump straight to the target
    pub fn snap(&mut self) -> Vec2 {
        self.current = self.target;
        self.current
    }
}

/// Cached window geometry, refreshed on (debounced) resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, document_height: f64) -> Self {
        Self {
            width,
            height,
            document_height,
        }
    }
}

/// Pointer position as an offset from the viewport center, in [-1, 1]
pub fn pointer_target(client_x: f64, client_y: f64, viewport: &Viewport) -> Vec2 {
    let normalize = |pos: f64, extent: f64| {
        if extent <= 0.0 {
            0.0
        } else {
            ((pos / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
        }
    };
    Vec2::new(
        normalize(client_x, viewport.width),
        normalize(client_y, viewport.height),
    )
}

/// Combined translate + rotate applied to one planet
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanetTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl PlanetTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
            self.translate_x, self.translate_y, self.rotate_deg
        )
    }
}

/// Transform for planet `index` whose center sits at `center_y` (viewport px)
pub fn planet_transform(
    index: usize,
    smoothed: Vec2,
    scroll: f64,
    center_y: f64,
    viewport_height: f64,
) -> PlanetTransform {
    let i = index as f64;
    let distance = if viewport_height > 0.0 {
        (center_y - viewport_height / 2.0) / viewport_height
    } else {
        0.0
    };
    let travel = POINTER_BASE_PX + POINTER_STEP_PX * i;

    PlanetTransform {
        translate_x: smoothed.x * travel,
        translate_y: smoothed.y * travel + distance * DISTANCE_PX,
        rotate_deg: scroll * (ROTATION_BASE + ROTATION_STEP * i),
    }
}

/// Scrolled share of the document as a width percentage in [0, 100].
///
/// A document that does not scroll reports 0.
pub fn progress_percent(scroll: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll / scrollable * 100.0).clamp(0.0, 100.0)
}

/// How transforms get recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationMode {
    /// Every display frame, with pointer smoothing
    #[default]
    FrameLoop,
    /// Only on scroll events, pointer applied unsmoothed
    ScrollOnly,
}

/// Everything the view writes after one cycle
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub transforms: Vec<PlanetTransform>,
    pub progress: f64,
}

/// Owns the parallax state between frames
#[derive(Debug, Clone)]
pub struct ParallaxAnimator {
    mode: AnimationMode,
    smoother: Smoother,
    viewport: Viewport,
    scroll: f64,
}

impl ParallaxAnimator {
    pub fn new(mode: AnimationMode, viewport: Viewport) -> Self {
        Self {
            mode,
            smoother: Smoother::default(),
            viewport,
            scroll: 0.0,
        }
    }

    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll(&self) -> f64 {
        self.scroll
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoother.current()
    }

    pub fn on_scroll(&mut self, scroll: f64) {
        self.scroll = scroll.max(0.0);
    }

    /// Record a (debounced) pointer position in client coordinates
    pub fn on_pointer(&mut self, client_x: f64, client_y: f64) {
        let target = pointer_target(client_x, client_y, &self.viewport);
        self.smoother.set_target(target);
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Run one cycle given each planet's current vertical center
    pub fn frame(&mut self, planet_centers: &[f64]) -> FrameOutput {
        let smoothed = match self.mode {
            AnimationMode::FrameLoop => self.smoother.step(),
            AnimationMode::ScrollOnly => self.smoother.snap(),
        };

        let transforms = planet_centers
            .iter()
            .enumerate()
            .map(|(i, &center)| {
                planet_transform(i, smoothed, self.scroll, center, self.viewport.height)
            })
            .collect();

        FrameOutput {
            transforms,
            progress: progress_percent(
                self.scroll,
                self.viewport.document_height,
                self.viewport.height,
            ),
        }
    }
}
