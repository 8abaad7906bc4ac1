//! Landing section

use super::section_heading;
use crate::content::Profile;
use crate::routes::RouteTable;
use egui::{RichText, Ui};

/// Returns a path when a call-to-action is clicked
pub fn home_section(ui: &mut Ui, profile: &Profile, routes: &RouteTable) -> Option<String> {
    let mut navigate = None;

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("Hi, I'm").weak());
        section_heading(ui, &profile.name);
        ui.label(RichText::new(&profile.tagline).size(16.0));
        if !profile.location.is_empty() {
            ui.label(RichText::new(&profile.location).weak().small());
        }
        ui.add_space(16.0);

        ui.horizontal_wrapped(|ui| {
            for (id, label) in [("projects", "View my work"), ("contact", "Get in touch")] {
                if let Some(route) = routes.index_of_id(id).and_then(|i| routes.get(i)) {
                    if ui.button(label).clicked() {
                        navigate = Some(route.path.clone());
                    }
                }
            }
        });

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for link in &profile.links {
                ui.hyperlink_to(&link.label, &link.url);
            }
        });
        ui.add_space(24.0);
    });

    navigate
}
