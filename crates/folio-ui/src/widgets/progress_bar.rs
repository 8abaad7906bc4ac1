//! Reading progress bar pinned to the top of the page

use egui::{Color32, Rect, Sense, Ui, Vec2};

pub const BAR_HEIGHT: f32 = 4.0;

/// Draw the bar at `progress` percent (0..=100).
///
/// Returns the clicked horizontal fraction, if the bar was clicked.
pub fn progress_bar(ui: &mut Ui, progress: f32) -> Option<f32> {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, BAR_HEIGHT), Sense::click());

    let painter = ui.painter();
    painter.rect_filled(rect, 0.0, Color32::from_rgb(40, 44, 52));

    let fill_width = width * (progress / 100.0).clamp(0.0, 1.0);
    if fill_width > 0.0 {
        let fill = Rect::from_min_size(rect.min, Vec2::new(fill_width, BAR_HEIGHT));
        painter.rect_filled(fill, 0.0, Color32::from_rgb(59, 130, 246));
    }

    if response.clicked() {
        response
            .interact_pointer_pos()
            .map(|pos| click_fraction(rect, pos.x))
    } else {
        None
    }
}

fn click_fraction(rect: Rect, x: f32) -> f32 {
    if rect.width() <= 0.0 {
        return 0.0;
    }
    ((x - rect.left()) / rect.width()).clamp(0.0, 1.0)
}
