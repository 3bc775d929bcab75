//! Page section that fades in the first time it scrolls into view.

use std::rc::Rc;

use dioxus::prelude::*;

#[component]
pub fn RevealSection(
    title: String,
    /// Latched once the section has crossed the reveal threshold
    visible: bool,
    on_mounted: EventHandler<Rc<MountedData>>,
    children: Element,
) -> Element {
    let class = if visible {
        "section reveal visible"
    } else {
        "section reveal"
    };

    rsx! {
        section {
            class: "{class}",
            onmounted: move |e| on_mounted.call(e.data()),
            h2 { class: "section-title", "{title}" }
            {children}
        }
    }
}
