//! UI Components for Mission Board.

mod edit_modal;
mod mission_fields;
mod mission_form;
mod mission_list;
mod parallax_layer;
mod reveal_section;
mod star_field;

pub use edit_modal::EditModal;
pub use mission_fields::MissionFields;
pub use mission_form::MissionForm;
pub use mission_list::{MissionCardItem, MissionList};
pub use parallax_layer::{PlanetLayer, ProgressBar, PLANET_COUNT};
pub use reveal_section::RevealSection;
pub use star_field::StarField;
