//! Mission input fields shared by the create form and the edit dialog.

use dioxus::prelude::*;
use missionboard_core::{MissionDraft, MissionField, MissionStatus, ValidationErrors};

/// Name, destination, year and status inputs with inline errors.
///
/// # Props
///
/// * `prefix` - id prefix so the form and the dialog never share element ids
/// * `draft` - current raw values
/// * `errors` - field-scoped messages from the last submit
/// * `on_change` - called with the field and its new raw value
#[component]
pub fn MissionFields(
    prefix: String,
    draft: MissionDraft,
    errors: ValidationErrors,
    on_change: EventHandler<(MissionField, String)>,
) -> Element {
    let field_id = |field: MissionField| format!("{}-{}", prefix, field.as_str());

    rsx! {
        div { class: "form-group",
            label { r#for: field_id(MissionField::Name), "Mission Name" }
            input {
                id: field_id(MissionField::Name),
                class: "form-input",
                r#type: "text",
                value: "{draft.name}",
                placeholder: "e.g. Voyager 1",
                oninput: move |e| on_change.call((MissionField::Name, e.value())),
            }
            FieldError { message: errors.get(MissionField::Name).map(str::to_string) }
        }

        div { class: "form-group",
            label { r#for: field_id(MissionField::Destination), "Destination" }
            input {
                id: field_id(MissionField::Destination),
                class: "form-input",
                r#type: "text",
                value: "{draft.destination}",
                placeholder: "e.g. Mars",
                oninput: move |e| on_change.call((MissionField::Destination, e.value())),
            }
            FieldError { message: errors.get(MissionField::Destination).map(str::to_string) }
        }

        div { class: "form-group",
            label { r#for: field_id(MissionField::Year), "Launch Year" }
            input {
                id: field_id(MissionField::Year),
                class: "form-input",
                r#type: "number",
                min: "1957",
                max: "2100",
                value: "{draft.year}",
                oninput: move |e| on_change.call((MissionField::Year, e.value())),
            }
            FieldError { message: errors.get(MissionField::Year).map(str::to_string) }
        }

        div { class: "form-group",
            label { r#for: field_id(MissionField::Status), "Status" }
            select {
                id: field_id(MissionField::Status),
                class: "form-input",
                value: "{draft.status}",
                onchange: move |e| on_change.call((MissionField::Status, e.value())),
                option { value: "", selected: draft.status.is_empty(), "Select status" }
                for status in MissionStatus::all() {
                    option {
                        key: "{status}",
                        value: status.as_str(),
                        selected: draft.status == status.as_str(),
                        {status.label()}
                    }
                }
            }
            FieldError { message: errors.get(MissionField::Status).map(str::to_string) }
        }
    }
}

#[component]
fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! { span { class: "error-message", "{message}" } },
        None => rsx! {},
    }
}
