//! Twinkling star backdrop.

use dioxus::prelude::*;
use missionboard_core::{generate_stars, star_count};

/// Randomly placed stars, generated once when the container mounts and
/// never regenerated.
#[component]
pub fn StarField(viewport_width: f64) -> Element {
    let stars = use_hook(|| {
        let count = star_count(viewport_width);
        tracing::debug!(count, "Generating star field");
        generate_stars(count, &mut rand::rng())
    });

    rsx! {
        div { class: "stars", "aria-hidden": "true",
            for (index, star) in stars.iter().enumerate() {
                div { key: "{index}", class: "star", style: star.style() }
            }
        }
    }
}
