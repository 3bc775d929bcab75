//! Decorative planets and the scroll progress bar.

use std::rc::Rc;

use dioxus::prelude::*;
use missionboard_core::PlanetTransform;

/// Number of decorative planets on the page
pub const PLANET_COUNT: usize = 3;

const PLANET_CLASSES: [&str; PLANET_COUNT] = ["planet planet-1", "planet planet-2", "planet planet-3"];

/// Planets positioned by the parallax animator.
///
/// Each planet reports its mounted handle so the animator can measure where
/// it sits relative to the viewport.
#[component]
pub fn PlanetLayer(
    transforms: Vec<PlanetTransform>,
    on_mounted: EventHandler<(usize, Rc<MountedData>)>,
) -> Element {
    rsx! {
        div { class: "planet-layer", "aria-hidden": "true",
            for (index, class) in PLANET_CLASSES.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "{class}",
                    style: format!("transform: {};", transform_css(&transforms, index)),
                    onmounted: move |e| on_mounted.call((index, e.data())),
                }
            }
        }
    }
}

fn transform_css(transforms: &[PlanetTransform], index: usize) -> String {
    transforms
        .get(index)
        .copied()
        .unwrap_or_default()
        .to_css()
}

/// Thin bar across the top whose width tracks scroll depth
#[component]
pub fn ProgressBar(percent: f64) -> Element {
    rsx! {
        div { class: "scroll-progress",
            div { class: "scroll-progress-fill", style: "width: {percent:.2}%;" }
        }
    }
}
