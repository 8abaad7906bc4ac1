//! Production tracker page
//!
//! Login (or register) first; once a token is held, the record form and the
//! list of submitted records. Narrow screens get a stacked list instead of a
//! table.

use crate::state::{AuthMode, ProductionState};
use crate::viewport::ViewportMode;
use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use folio_types::{ProductionRecord, Shift, User};

/// Actions that can be triggered from the page
#[derive(Default)]
pub struct ProductionAction {
    pub submit_auth: bool,
    pub submit_record: bool,
    pub refresh: bool,
    pub edit: Option<ProductionRecord>,
    pub cancel_edit: bool,
    /// Record id to delete
    pub delete: Option<String>,
    pub logout: bool,
    pub back_home: bool,
}

pub fn production_page(
    ui: &mut Ui,
    state: &mut ProductionState,
    user: Option<&User>,
    logged_in: bool,
    mode: ViewportMode,
) -> ProductionAction {
    let mut action = ProductionAction::default();

    ui.horizontal(|ui| {
        if ui.link("← Back to portfolio").clicked() {
            action.back_home = true;
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if logged_in {
                if ui.button("Log out").clicked() {
                    action.logout = true;
                }
                if let Some(user) = user {
                    ui.label(RichText::new(user.display_name()).weak());
                }
            }
            if state.is_busy() {
                ui.spinner();
            }
        });
    });
    ui.separator();

    if let Some(ref error) = state.error {
        ui.label(RichText::new(error).color(Color32::RED));
    }
    if let Some(ref notice) = state.notice {
        ui.label(RichText::new(notice).color(Color32::GREEN));
    }

    if logged_in {
        record_form(ui, state, mode, &mut action);
        ui.add_space(12.0);
        record_list(ui, &state.records, mode, &mut action);
    } else {
        auth_form(ui, state, &mut action);
    }

    action
}

fn auth_form(ui: &mut Ui, state: &mut ProductionState, action: &mut ProductionAction) {
    let form = &mut state.auth_form;
    let registering = form.mode == AuthMode::Register;

    ui.label(
        RichText::new(if registering {
            "Create an account"
        } else {
            "Log in to track production"
        })
        .heading(),
    );
    ui.add_space(6.0);

    egui::Grid::new("auth_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            if registering {
                ui.label("Name");
                ui.text_edit_singleline(&mut form.name);
                ui.end_row();
            }
            ui.label("Email");
            ui.text_edit_singleline(&mut form.email);
            ui.end_row();

            ui.label("Password");
            let password = ui.add(egui::TextEdit::singleline(&mut form.password).password(true));
            if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action.submit_auth = true;
            }
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let label = if registering { "Register" } else { "Log in" };
        if ui
            .add_enabled(!state.is_authenticating(), egui::Button::new(label))
            .clicked()
        {
            action.submit_auth = true;
        }
        let toggle = if registering {
            "Have an account? Log in"
        } else {
            "New here? Register"
        };
        if ui.link(toggle).clicked() {
            state.auth_form.mode = state.auth_form.mode.toggled();
            state.error = None;
        }
    });
}

fn record_form(
    ui: &mut Ui,
    state: &mut ProductionState,
    mode: ViewportMode,
    action: &mut ProductionAction,
) {
    let editing = state.record_form.editing.is_some();
    ui.label(
        RichText::new(if editing { "Edit record" } else { "New record" }).heading(),
    );
    ui.add_space(6.0);

    let form = &mut state.record_form;
    let fields = |ui: &mut Ui| {
        ui.label("Date");
        ui.add(egui::TextEdit::singleline(&mut form.date).hint_text("YYYY-MM-DD"));
        ui.end_row();

        ui.label("Product");
        ui.text_edit_singleline(&mut form.product);
        ui.end_row();

        ui.label("Quantity");
        ui.text_edit_singleline(&mut form.quantity);
        ui.end_row();

        ui.label("Shift");
        egui::ComboBox::from_id_salt("shift")
            .selected_text(form.shift.display_name())
            .show_ui(ui, |ui| {
                for shift in Shift::all() {
                    ui.selectable_value(&mut form.shift, *shift, shift.display_name());
                }
            });
        ui.end_row();

        ui.label("Notes");
        ui.add(egui::TextEdit::multiline(&mut form.notes).desired_rows(2));
        ui.end_row();
    };

    let columns = if mode.is_mobile() { 1 } else { 2 };
    egui::Grid::new("record_form")
        .num_columns(columns)
        .spacing([8.0, 6.0])
        .show(ui, fields);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let label = if editing { "Update" } else { "Submit" };
        if ui
            .add_enabled(!state.is_saving(), egui::Button::new(label))
            .clicked()
        {
            action.submit_record = true;
        }
        if editing && ui.button("Cancel").clicked() {
            action.cancel_edit = true;
        }
        if ui.button("Refresh").clicked() {
            action.refresh = true;
        }
    });
}

fn record_list(
    ui: &mut Ui,
    records: &[ProductionRecord],
    mode: ViewportMode,
    action: &mut ProductionAction,
) {
    ui.label(RichText::new(format!("Records ({})", records.len())).strong());
    if records.is_empty() {
        ui.label(RichText::new("No records yet").italics().weak());
        return;
    }

    if mode.is_mobile() {
        for record in records {
            ui.group(|ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(record.date.to_string()).monospace());
                    ui.label(RichText::new(&record.product).strong());
                    ui.label(format!("x{}", record.quantity));
                    ui.label(RichText::new(record.shift.display_name()).weak());
                });
                if let Some(ref notes) = record.notes {
                    ui.label(RichText::new(notes).small());
                }
                ui.horizontal(|ui| {
                    if ui.small_button("Edit").clicked() {
                        action.edit = Some(record.clone());
                    }
                    if ui.small_button("Delete").clicked() {
                        action.delete = Some(record.id.clone());
                    }
                });
            });
        }
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(90.0))
        .column(Column::initial(160.0).at_least(80.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .column(Column::auto())
        .header(22.0, |mut header| {
            for title in ["Date", "Product", "Qty", "Shift", "Notes", ""] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(22.0, |mut row| {
                    row.col(|ui| {
                        ui.monospace(record.date.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&record.product);
                    });
                    row.col(|ui| {
                        ui.label(record.quantity.to_string());
                    });
                    row.col(|ui| {
                        ui.label(record.shift.display_name());
                    });
                    row.col(|ui| {
                        ui.label(record.notes.as_deref().unwrap_or(""));
                    });
                    row.col(|ui| {
                        if ui.small_button("Edit").clicked() {
                            action.edit = Some(record.clone());
                        }
                        if ui.small_button("Delete").clicked() {
                            action.delete = Some(record.id.clone());
                        }
                    });
                });
            }
        });
}
