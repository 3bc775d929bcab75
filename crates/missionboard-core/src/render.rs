//! List view of the mission collection.
//!
//! The whole list is rebuilt from the collection after every change. The
//! Dioxus list renders [`MissionView`] directly; [`render_html`] produces the
//! same view as standalone markup for `--export-html`.

use crate::types::{Mission, MissionId};

/// Placeholder shown when the collection is empty
pub const EMPTY_MESSAGE: &str = "No missions yet. Add your first mission above!";

/// Display data for one mission card
#[derive(Debug, Clone, PartialEq)]
pub struct MissionCard {
    pub id: MissionId,
    pub name: String,
    pub destination: String,
    pub year: i32,
    pub status_label: &'static str,
    pub status_class: &'static str,
}

impl From<&Mission> for MissionCard {
    fn from(mission: &Mission) -> Self {
        Self {
            id: mission.id,
            name: mission.name.clone(),
            destination: mission.destination.clone(),
            year: mission.year,
            status_label: mission.status.label(),
            status_class: mission.status.class(),
        }
    }
}

/// What the missions list shows
#[derive(Debug, Clone, PartialEq)]
pub enum MissionView {
    Empty { message: &'static str },
    Cards(Vec<MissionCard>),
}

impl MissionView {
    pub fn from_missions(missions: &[Mission]) -> Self {
        if missions.is_empty() {
            MissionView::Empty {
                message: EMPTY_MESSAGE,
            }
        } else {
            MissionView::Cards(missions.iter().map(MissionCard::from).collect())
        }
    }
}

/// Escape text for safe insertion into HTML markup
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the view as markup. All user-supplied text is escaped.
pub fn render_html(view: &MissionView) -> String {
    match view {
        MissionView::Empty { message } => {
            format!("<p class=\"no-missions\">{}</p>\n", escape_html(message))
        }
        MissionView::Cards(cards) => {
            let mut html = String::new();
            for card in cards {
                html.push_str(&format!(
                    concat!(
                        "<article class=\"mission-card\" data-id=\"{id}\">\n",
                        "  <h3>{name}</h3>\n",
                        "  <p><strong>Destination:</strong> {destination}</p>\n",
                        "  <p><strong>Launch Year:</strong> {year}</p>\n",
                        "  <span class=\"mission-status {class}\">{label}</span>\n",
                        "  <div class=\"mission-actions\">\n",
                        "    <button class=\"btn-edit\" data-id=\"{id}\">Edit</button>\n",
                        "    <button class=\"btn-delete\" data-id=\"{id}\">Delete</button>\n",
                        "  </div>\n",
                        "</article>\n",
                    ),
                    id = card.id,
                    name = escape_html(&card.name),
                    destination = escape_html(&card.destination),
                    year = card.year,
                    class = card.status_class,
                    label = card.status_label,
                ));
            }
            html
        }
    }
}
