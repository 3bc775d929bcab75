//! Create form for new missions.

use dioxus::prelude::*;
use missionboard_core::{
    MissionDraft, MissionError, MissionField, MissionId, MissionResult, ValidationErrors,
};

use crate::components::MissionFields;
use crate::context::use_mission_store;

const SAVE_FAILED: &str = "Could not save the mission. Please try again.";

/// What the form shows after a create attempt
#[derive(Debug, Clone, PartialEq)]
struct FormFeedback {
    /// Clear the typed values
    reset: bool,
    errors: ValidationErrors,
    failure: Option<String>,
}

impl FormFeedback {
    fn from_create(result: &MissionResult<MissionId>) -> Self {
        match result {
            Ok(id) => {
                tracing::info!(%id, "Mission logged");
                Self {
                    reset: true,
                    errors: ValidationErrors::default(),
                    failure: None,
                }
            }
            Err(MissionError::Invalid(found)) => Self {
                reset: false,
                errors: found.clone(),
                failure: None,
            },
            Err(e) => {
                tracing::error!("Failed to save mission: {}", e);
                Self {
                    reset: false,
                    errors: ValidationErrors::default(),
                    failure: Some(SAVE_FAILED.to_string()),
                }
            }
        }
    }
}

/// Form that appends a mission to the store.
///
/// Invalid input keeps the typed values and shows every field error at
/// once. A successful create clears the form.
#[component]
pub fn MissionForm() -> Element {
    let mut store = use_mission_store();
    let mut draft = use_signal(MissionDraft::default);
    let mut errors = use_signal(ValidationErrors::default);
    let mut failure = use_signal(|| Option::<String>::None);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let result = store.write().create(&draft.read());
        let feedback = FormFeedback::from_create(&result);
        if feedback.reset {
            draft.set(MissionDraft::default());
        }
        errors.set(feedback.errors);
        failure.set(feedback.failure);
    };

    rsx! {
        form {
            id: "mission-form",
            class: "mission-form",
            novalidate: true,
            onsubmit: on_submit,

            MissionFields {
                prefix: "create".to_string(),
                draft: draft(),
                errors: errors(),
                on_change: move |(field, value): (MissionField, String)| {
                    draft.write().set_field(field, value);
                },
            }

            if let Some(message) = failure() {
                p { class: "form-failure", "{message}" }
            }

            button { class: "btn-primary", r#type: "submit", "Add Mission" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_resets_form() {
        let feedback = FormFeedback::from_create(&Ok(MissionId::new()));
        assert!(feedback.reset);
        assert!(feedback.errors.is_empty());
        assert_eq!(feedback.failure, None);
    }

    #[test]
    fn invalid_input_clears_earlier_save_failure() {
        let errors = MissionDraft::new("", "Europa", "2024", "planned")
            .validate()
            .unwrap_err();
        let feedback = FormFeedback::from_create(&Err(MissionError::Invalid(errors.clone())));
        assert!(!feedback.reset);
        assert_eq!(feedback.errors, errors);
        assert_eq!(feedback.failure, None);
    }

    #[test]
    fn storage_error_keeps_input_and_reports() {
        let result = Err(MissionError::Storage("disk full".to_string()));
        let feedback = FormFeedback::from_create(&result);
        assert!(!feedback.reset);
        assert_eq!(feedback.failure.as_deref(), Some(SAVE_FAILED));
    }
}
