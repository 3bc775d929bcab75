use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use missionboard_core::{
    AnimationMode, Debouncer, EditSession, FrameOutput, ParallaxAnimator, PlanetTransform,
    RevealTracker, Viewport, FRAME_INTERVAL, POINTER_DEBOUNCE, RESIZE_DEBOUNCE,
};

use crate::components::{
    EditModal, MissionForm, MissionList, PlanetLayer, ProgressBar, RevealSection, StarField,
    PLANET_COUNT,
};
use crate::context::{open_store, use_app_config};
use crate::theme::GLOBAL_STYLES;

const SECTION_TITLES: [&str; 2] = ["Log a Mission", "Mission Archive"];

type Handles = Vec<Option<Rc<MountedData>>>;

/// Root application component.
///
/// Opens the mission store once and provides it, together with the edit
/// session, to every component below.
#[component]
pub fn App() -> Element {
    let config = use_app_config();
    let store = use_signal(|| open_store(&config.data_dir));
    let editing = use_signal(EditSession::default);

    use_context_provider(|| store);
    use_context_provider(|| editing);

    let window = dioxus::desktop::window();
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());

    rsx! {
        style { {GLOBAL_STYLES} }
        SpacePage {
            mode: config.mode,
            initial_width: size.width,
            initial_height: size.height,
        }
    }
}

/// Center of each mounted element in client coordinates, or `None` until
/// every element is mounted and measurable.
async fn measure_centers(handles: &[Option<Rc<MountedData>>]) -> Option<Vec<f64>> {
    let mut centers = Vec::with_capacity(handles.len());
    for handle in handles {
        let rect = handle.as_ref()?.get_client_rect().await.ok()?;
        centers.push(rect.origin.y + rect.size.height / 2.0);
    }
    Some(centers)
}

/// The scrolling page: parallax decorations, progress bar and the mission
/// sections.
#[component]
fn SpacePage(mode: AnimationMode, initial_width: f64, initial_height: f64) -> Element {
    let mut animator = use_signal(|| {
        ParallaxAnimator::new(
            mode,
            Viewport::new(initial_width, initial_height, initial_height),
        )
    });
    let mut frame = use_signal(|| FrameOutput {
        transforms: vec![PlanetTransform::default(); PLANET_COUNT],
        progress: 0.0,
    });
    let mut page = use_signal(|| Option::<Rc<MountedData>>::None);
    let mut planets = use_signal(|| -> Handles { vec![None; PLANET_COUNT] });
    let mut sections = use_signal(|| -> Handles { vec![None; SECTION_TITLES.len()] });
    let mut reveal = use_signal(RevealTracker::default);

    let pointer_debounce = use_hook(|| Debouncer::new(POINTER_DEBOUNCE));
    let resize_debounce = use_hook(|| Debouncer::new(RESIZE_DEBOUNCE));

    // One animation cycle: measure planets, advance the animator, publish.
    let run_cycle = move || async move {
        let handles = planets.peek().clone();
        if let Some(centers) = measure_centers(&handles).await {
            let out = animator.write().frame(&centers);
            if *frame.peek() != out {
                frame.set(out);
            }
        }
    };

    let check_reveal = move || async move {
        let viewport_height = animator.peek().viewport().height;
        let handles = sections.peek().clone();
        for (index, handle) in handles.iter().enumerate() {
            if reveal.peek().is_visible(index) {
                continue;
            }
            let Some(handle) = handle else { continue };
            if let Ok(rect) = handle.get_client_rect().await {
                reveal
                    .write()
                    .observe(index, rect.origin.y, rect.size.height, viewport_height);
            }
        }
    };

    let refresh_viewport = move || async move {
        let Some(page) = page.peek().clone() else {
            return;
        };
        let (Ok(rect), Ok(scroll_size)) = (page.get_client_rect().await, page.get_scroll_size().await)
        else {
            tracing::warn!("Page geometry unavailable, keeping cached viewport");
            return;
        };
        let viewport = Viewport::new(rect.size.width, rect.size.height, scroll_size.height);
        tracing::debug!(?viewport, "Viewport refreshed");
        animator.write().on_resize(viewport);
    };

    // Steady-state frame loop; absent in scroll-only mode.
    use_future(move || async move {
        if mode != AnimationMode::FrameLoop {
            return;
        }
        let mut ticker = tokio::time::interval(FRAME_INTERVAL);
        loop {
            ticker.tick().await;
            run_cycle().await;
        }
    });

    let on_scroll = move |_| {
        spawn(async move {
            let Some(page) = page.peek().clone() else {
                return;
            };
            if let Ok(offset) = page.get_scroll_offset().await {
                animator.write().on_scroll(offset.y);
            }
            if mode == AnimationMode::ScrollOnly {
                run_cycle().await;
            }
            check_reveal().await;
        });
    };

    let on_pointer = move |e: MouseEvent| {
        let point = e.client_coordinates();
        let ticket = pointer_debounce.arm();
        let debounce = pointer_debounce.clone();
        spawn(async move {
            if debounce.settle(ticket).await {
                animator.write().on_pointer(point.x, point.y);
            }
        });
    };

    let on_resize = move |_| {
        let ticket = resize_debounce.arm();
        let debounce = resize_debounce.clone();
        spawn(async move {
            if debounce.settle(ticket).await {
                refresh_viewport().await;
                run_cycle().await;
                check_reveal().await;
            }
        });
    };

    let scroll_to = move |index: usize| {
        let handle = sections.peek().get(index).cloned().flatten();
        if let Some(handle) = handle {
            spawn(async move {
                if let Err(e) = handle.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!(section = index, "Scroll to section failed: {:?}", e);
                }
            });
        }
    };

    let current = frame.read();

    rsx! {
        div {
            class: "page",
            onmounted: move |e| {
                page.set(Some(e.data()));
                spawn(async move {
                    refresh_viewport().await;
                    run_cycle().await;
                    check_reveal().await;
                });
            },
            onscroll: on_scroll,
            onmousemove: on_pointer,
            onresize: on_resize,

            ProgressBar { percent: current.progress }

            header { class: "site-header",
                span { class: "site-logo", "Mission Board" }
                nav { class: "site-nav",
                    for (index, title) in SECTION_TITLES.iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "nav-link",
                            onclick: move |_| scroll_to(index),
                            "{title}"
                        }
                    }
                }
            }

            div { class: "hero",
                StarField { viewport_width: initial_width }
                PlanetLayer {
                    transforms: current.transforms.clone(),
                    on_mounted: move |(index, data): (usize, Rc<MountedData>)| {
                        if let Some(slot) = planets.write().get_mut(index) {
                            *slot = Some(data);
                        }
                    },
                }
                h1 { class: "hero-title", "Exploring the Final Frontier" }
                p { class: "hero-subtitle", "A personal log of humanity's journeys beyond Earth" }
            }

            for (index, title) in SECTION_TITLES.iter().enumerate() {
                RevealSection {
                    key: "{index}",
                    title: title.to_string(),
                    visible: reveal.read().is_visible(index),
                    on_mounted: move |data: Rc<MountedData>| {
                        if let Some(slot) = sections.write().get_mut(index) {
                            *slot = Some(data);
                        }
                    },
                    if index == 0 {
                        MissionForm {}
                    } else {
                        MissionList {}
                    }
                }
            }

            footer { class: "site-footer",
                StarField { viewport_width: initial_width }
                p { "Ad astra per aspera" }
            }

            EditModal {}
        }
    }
}
