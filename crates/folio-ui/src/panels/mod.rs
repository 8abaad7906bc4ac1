//! UI Panels
//!
//! Each panel is a function that takes `&mut Ui` plus the data it shows.
//! Panels render and report what the user asked for through a small action
//! value; the app applies the actions after rendering.

mod about;
mod challenge;
mod contact;
mod home;
mod nav_bar;
mod production;
mod projects;
mod resume;

pub use about::{about_section, AboutState};
pub use challenge::{challenge_page, ChallengeAction, ChallengeState};
pub use contact::{contact_section, ContactState};
pub use home::home_section;
pub use nav_bar::{nav_bar, NavBarData};
pub use production::{production_page, ProductionAction};
pub use projects::projects_section;
pub use resume::resume_section;

use egui::{RichText, Ui};

/// Heading shared by every section
pub(crate) fn section_heading(ui: &mut Ui, title: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(title).heading().strong());
    ui.add_space(6.0);
}
