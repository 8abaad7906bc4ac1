//! Resume section: experience, education, skills

use super::section_heading;
use crate::content::{Resume, TimelineEntry};
use egui::{RichText, Ui};

pub fn resume_section(ui: &mut Ui, resume: &Resume) {
    section_heading(ui, "Resume");

    if !resume.experience.is_empty() {
        ui.label(RichText::new("Experience").strong());
        timeline(ui, &resume.experience);
    }

    if !resume.education.is_empty() {
        ui.add_space(10.0);
        ui.label(RichText::new("Education").strong());
        timeline(ui, &resume.education);
    }

    if !resume.skills.is_empty() {
        ui.add_space(10.0);
        ui.label(RichText::new("Skills").strong());
        ui.horizontal_wrapped(|ui| {
            for skill in &resume.skills {
                ui.label(RichText::new(skill).monospace().small());
                ui.label(RichText::new("·").weak());
            }
        });
    }
}

fn timeline(ui: &mut Ui, entries: &[TimelineEntry]) {
    for entry in entries {
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(&entry.role).strong());
            ui.label(RichText::new(format!("@ {}", entry.organization)).weak());
            if !entry.period.is_empty() {
                ui.label(RichText::new(&entry.period).small().weak());
            }
        });
        for highlight in &entry.highlights {
            ui.label(format!("  • {highlight}"));
        }
    }
}
