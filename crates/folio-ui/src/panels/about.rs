//! About section with count-up statistics

use super::section_heading;
use crate::content::About;
use crate::view::CountUp;
use egui::{RichText, Ui};

const COUNT_UP_SECS: f64 = 1.6;

/// One counter per stat; they start together the first time the section shows
pub struct AboutState {
    counters: Vec<CountUp>,
}

impl AboutState {
    pub fn new(about: &About) -> Self {
        Self {
            counters: about
                .stats
                .iter()
                .map(|s| CountUp::new(s.value as f64, COUNT_UP_SECS))
                .collect(),
        }
    }

    pub fn start(&mut self, now: f64) {
        for counter in &mut self.counters {
            counter.start(now);
        }
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.counters.iter().any(|c| c.is_animating(now))
    }

    /// Displayed value of stat `index`
    pub fn value(&self, index: usize, now: f64) -> u32 {
        self.counters
            .get(index)
            .map(|c| c.value(now).round() as u32)
            .unwrap_or(0)
    }
}

/// `revealed` is true once the section has scrolled into view
pub fn about_section(ui: &mut Ui, about: &About, state: &mut AboutState, revealed: bool, now: f64) {
    if revealed {
        state.start(now);
    }

    section_heading(ui, "About");
    for paragraph in &about.paragraphs {
        ui.label(paragraph);
        ui.add_space(6.0);
    }

    if about.stats.is_empty() {
        return;
    }

    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        for (index, stat) in about.stats.iter().enumerate() {
            ui.group(|ui| {
                ui.set_min_width(140.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{}{}", state.value(index, now), stat.suffix))
                            .size(28.0)
                            .strong(),
                    );
                    ui.label(RichText::new(&stat.label).weak().small());
                });
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Stat;

    fn about() -> About {
        About {
            paragraphs: vec![],
            stats: vec![
                Stat {
                    label: "Years".to_string(),
                    value: 8,
                    suffix: "+".to_string(),
                },
                Stat {
                    label: "Projects".to_string(),
                    value: 40,
                    suffix: String::new(),
                },
            ],
        }
    }

    #[test]
    fn test_counters_wait_for_start() {
        let state = AboutState::new(&about());
        assert_eq!(state.value(1, 100.0), 0);
        assert!(!state.is_animating(100.0));
    }

    #[test]
    fn test_counters_reach_target() {
        let mut state = AboutState::new(&about());
        state.start(1.0);
        assert!(state.is_animating(1.5));
        assert!(state.value(1, 1.5) < 40);
        assert_eq!(state.value(0, 10.0), 8);
        assert_eq!(state.value(1, 10.0), 40);
        assert_eq!(state.value(7, 10.0), 0);
    }
}
