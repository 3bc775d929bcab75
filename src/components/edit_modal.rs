//! Edit dialog for an existing mission.

use dioxus::prelude::*;
use missionboard_core::{EditSession, MissionField, SubmitOutcome};

use crate::components::MissionFields;
use crate::context::use_mission_store;

/// Modal bound to the [`EditSession`] in context.
///
/// Renders nothing while the session is closed. Esc, the close button and
/// clicking the backdrop all cancel.
#[component]
pub fn EditModal() -> Element {
    let mut store = use_mission_store();
    let mut editing = use_context::<Signal<EditSession>>();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let mut missions = store.write();
        let result = editing.write().submit(&mut *missions);
        match result {
            Ok(SubmitOutcome::Applied) => tracing::info!("Mission updated"),
            Ok(SubmitOutcome::Missing) => tracing::warn!("Edited mission no longer exists"),
            Ok(SubmitOutcome::Invalid) | Ok(SubmitOutcome::Idle) => {}
            Err(e) => tracing::error!("Failed to save mission: {}", e),
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Escape {
            editing.write().cancel();
        }
    };

    let session = editing.read().clone();
    let EditSession::Open { draft, errors, .. } = session else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| editing.write().cancel(),

            div {
                id: "edit-modal",
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                onkeydown: on_keydown,

                div { class: "modal-header",
                    h2 { class: "modal-title", "Edit Mission" }
                    button {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| editing.write().cancel(),
                        "\u{00D7}"
                    }
                }

                form {
                    class: "mission-form",
                    novalidate: true,
                    onsubmit: on_submit,

                    MissionFields {
                        prefix: "edit".to_string(),
                        draft: draft,
                        errors: errors,
                        on_change: move |(field, value): (MissionField, String)| {
                            editing.write().set_field(field, value);
                        },
                    }

                    div { class: "modal-actions",
                        button {
                            class: "btn-ghost",
                            r#type: "button",
                            onclick: move |_| editing.write().cancel(),
                            "Cancel"
                        }
                        button { class: "btn-primary", r#type: "submit", "Save Changes" }
                    }
                }
            }
        }
    }
}
