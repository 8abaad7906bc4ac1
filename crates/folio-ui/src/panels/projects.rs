//! Project cards

use super::section_heading;
use crate::content::Project;
use egui::{RichText, Ui};

/// Cards wrap to one per row on narrow screens.
///
/// Returns a site path when a card linking inside the site is opened.
pub fn projects_section(ui: &mut Ui, projects: &[Project], compact: bool) -> Option<String> {
    let mut navigate = None;
    section_heading(ui, "Projects");

    let card_width = if compact {
        ui.available_width()
    } else {
        (ui.available_width() / 2.0 - 12.0).max(220.0)
    };

    ui.horizontal_wrapped(|ui| {
        for project in projects {
            ui.group(|ui| {
                ui.set_width(card_width - 12.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&project.title).strong().size(16.0));
                    ui.label(&project.description);
                    ui.horizontal_wrapped(|ui| {
                        for tag in &project.tags {
                            ui.label(RichText::new(tag).small().monospace().weak());
                        }
                    });
                    match (project.internal_path(), project.url.as_deref()) {
                        (Some(path), _) => {
                            if ui.link("Open").clicked() {
                                navigate = Some(path.to_string());
                            }
                        }
                        (None, Some(url)) => {
                            ui.hyperlink_to("Visit", url);
                        }
                        (None, None) => {}
                    }
                });
            });
        }
    });

    navigate
}
