//! Top navigation bar (desktop)

use crate::routes::{RouteTable, PRODUCTION_PATH};
use egui::{Color32, RichText, Ui};

/// Data needed to render the bar (extracted before render)
pub struct NavBarData<'a> {
    pub brand: &'a str,
    pub routes: &'a RouteTable,
    /// Highlighted route, if the location is one of them
    pub active: Option<usize>,
    pub on_production: bool,
}

/// Returns the path the user clicked, if any
pub fn nav_bar(ui: &mut Ui, data: &NavBarData<'_>) -> Option<String> {
    let mut navigate = None;

    ui.horizontal(|ui| {
        ui.set_height(32.0);

        let brand = egui::Label::new(RichText::new(data.brand).strong().size(18.0))
            .sense(egui::Sense::click());
        if ui.add(brand).clicked() {
            navigate = Some(data.routes.first().path.clone());
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .selectable_label(data.on_production, "Tracker")
                .clicked()
            {
                navigate = Some(PRODUCTION_PATH.to_string());
            }
            ui.label(RichText::new("|").weak());

            // right_to_left lays out in reverse, so walk the table backwards
            for (index, route) in data.routes.iter().enumerate().rev() {
                let active = data.active == Some(index);
                let text = if active {
                    RichText::new(&route.title).color(Color32::from_rgb(59, 130, 246))
                } else {
                    RichText::new(&route.title)
                };
                if ui.selectable_label(active, text).clicked() && !active {
                    navigate = Some(route.path.clone());
                }
            }
        });
    });

    navigate
}
