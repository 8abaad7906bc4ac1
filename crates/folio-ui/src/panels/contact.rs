//! Contact form
//!
//! There is no backend for messages: submitting composes a `mailto:` link and
//! hands it to the browser.

use super::section_heading;
use crate::state::ContactForm;
use egui::{Color32, RichText, Ui};
use tracing::info;

#[derive(Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub error: Option<String>,
    pub sent: bool,
}

impl ContactState {
    /// Validate and build the mail link; on failure the error is kept for display
    pub fn submit(&mut self, recipient: &str) -> Option<String> {
        match self.form.mailto_url(recipient) {
            Ok(url) => {
                info!("Contact form submitted");
                self.error = None;
                self.sent = true;
                self.form.clear();
                Some(url)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.sent = false;
                None
            }
        }
    }
}

/// Returns the `mailto:` URL to open once the form is submitted
pub fn contact_section(ui: &mut Ui, state: &mut ContactState, recipient: &str) -> Option<String> {
    let mut submitted = false;
    section_heading(ui, "Contact");
    ui.label("Have a project in mind, or just want to say hello?");
    ui.add_space(8.0);

    egui::Grid::new("contact_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut state.form.name);
            ui.end_row();

            ui.label("Email");
            ui.text_edit_singleline(&mut state.form.email);
            ui.end_row();

            ui.label("Message");
            ui.add(
                egui::TextEdit::multiline(&mut state.form.message)
                    .desired_rows(5)
                    .hint_text("Your message"),
            );
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Send").clicked() {
            submitted = true;
        }
        if let Some(ref error) = state.error {
            ui.label(RichText::new(error).color(Color32::RED).small());
        } else if state.sent {
            ui.label(
                RichText::new("Your mail client should open with the message.")
                    .color(Color32::GREEN)
                    .small(),
            );
        }
    });

    if submitted {
        state.submit(recipient)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_invalid_keeps_form() {
        let mut state = ContactState::default();
        state.form.name = "Ada".to_string();
        assert!(state.submit("me@example.com").is_none());
        assert_eq!(state.form.name, "Ada");
        assert_eq!(state.error.as_deref(), Some("Email is required"));
    }

    #[test]
    fn test_submit_valid_clears_form() {
        let mut state = ContactState::default();
        state.form.name = "Ada".to_string();
        state.form.email = "ada@example.com".to_string();
        state.form.message = "Hello".to_string();

        let url = state.submit("me@example.com").unwrap();
        assert!(url.starts_with("mailto:me@example.com?"));
        assert!(state.sent);
        assert!(state.form.name.is_empty());
        assert!(state.error.is_none());
    }
}
