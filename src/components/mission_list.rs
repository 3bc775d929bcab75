//! Missions list: one card per record, rebuilt from the store on change.

use dioxus::prelude::*;
use missionboard_core::{DeleteOutcome, EditSession, MissionCard, MissionId, MissionView};

use crate::context::{use_mission_store, DialogConfirm};

/// A single mission card with edit and delete actions.
///
/// Text is inserted as text nodes, so markup in names is shown literally.
#[component]
pub fn MissionCardItem(
    card: MissionCard,
    on_edit: EventHandler<MissionId>,
    on_delete: EventHandler<MissionId>,
) -> Element {
    let id = card.id;

    rsx! {
        article { class: "mission-card", "data-id": "{id}",
            h3 { "{card.name}" }
            p {
                strong { "Destination: " }
                "{card.destination}"
            }
            p {
                strong { "Launch Year: " }
                "{card.year}"
            }
            span { class: "mission-status {card.status_class}", "{card.status_label}" }
            div { class: "mission-actions",
                button {
                    class: "btn-edit",
                    "data-id": "{id}",
                    onclick: move |_| on_edit.call(id),
                    "Edit"
                }
                button {
                    class: "btn-delete",
                    "data-id": "{id}",
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}

/// Full list of missions in collection order
#[component]
pub fn MissionList() -> Element {
    let mut store = use_mission_store();
    let mut editing = use_context::<Signal<EditSession>>();

    let on_edit = move |id: MissionId| {
        let session = store.read().get(id).map(EditSession::open);
        match session {
            Some(session) => editing.set(session),
            None => tracing::warn!(%id, "Edit requested for unknown mission"),
        }
    };

    let on_delete = move |id: MissionId| {
        let outcome = store.write().delete(id, &DialogConfirm);
        match outcome {
            Ok(DeleteOutcome::Deleted) => {
                if editing.peek().editing_id() == Some(id) {
                    editing.write().cancel();
                }
            }
            Ok(DeleteOutcome::Declined) => {}
            Ok(DeleteOutcome::NotFound) => tracing::warn!(%id, "Delete requested for unknown mission"),
            Err(e) => tracing::error!("Failed to delete mission: {}", e),
        }
    };

    let view = store.read().view();

    rsx! {
        div { id: "missions-list", class: "missions-list",
            {match view {
                MissionView::Empty { message } => rsx! {
                    p { class: "no-missions", "{message}" }
                },
                MissionView::Cards(cards) => rsx! {
                    for card in cards {
                        MissionCardItem {
                            key: "{card.id}",
                            card: card.clone(),
                            on_edit: on_edit,
                            on_delete: on_delete,
                        }
                    }
                },
            }}
        }
    }
}
