//! Hyperspace page: trivia prompt, then the scene

use crate::gate::VerificationGate;
use crate::scene::HyperspaceScene;
use egui::{Color32, RichText, Ui};

#[derive(Default)]
pub struct ChallengeState {
    pub answer: String,
    pub error: Option<String>,
    scene: Option<HyperspaceScene>,
}

impl ChallengeState {
    /// Check the typed answer against the gate
    pub fn submit(&mut self, gate: &mut VerificationGate) -> bool {
        let passed = gate.submit(&self.answer);
        self.answer.clear();
        if passed {
            self.error = None;
            self.scene = Some(HyperspaceScene::new());
        } else {
            self.error = Some("That's not it. Try again.".to_string());
            self.scene = None;
        }
        passed
    }

    pub fn reset(&mut self, gate: &mut VerificationGate) {
        gate.reset();
        self.scene = None;
        self.error = None;
    }

    fn scene(&mut self) -> &mut HyperspaceScene {
        self.scene.get_or_insert_with(HyperspaceScene::new)
    }
}

#[derive(Default)]
pub struct ChallengeAction {
    pub submit: bool,
    pub reset: bool,
    pub back_home: bool,
}

pub fn challenge_page(
    ui: &mut Ui,
    state: &mut ChallengeState,
    question: &str,
    verified: bool,
) -> ChallengeAction {
    let mut action = ChallengeAction::default();

    ui.horizontal(|ui| {
        if ui.link("← Back to portfolio").clicked() {
            action.back_home = true;
        }
        if verified {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Reset").clicked() {
                    action.reset = true;
                }
                if ui.button("Replay").clicked() {
                    state.scene().restart();
                }
                ui.label(RichText::new("Drag to look around").weak().small());
            });
        }
    });
    ui.separator();

    if verified {
        state.scene().show(ui);
        return action;
    }

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Only a true pilot may pass").heading());
        ui.add_space(8.0);
        ui.label(question);
        ui.add_space(8.0);
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.answer)
                .hint_text("Your answer")
                .desired_width(240.0),
        );
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            action.submit = true;
        }
        if ui.button("Engage").clicked() {
            action.submit = true;
        }
        if let Some(ref error) = state.error {
            ui.label(RichText::new(error).color(Color32::RED).small());
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GateConfig;
    use crate::platform::MemoryStore;

    fn gate() -> VerificationGate {
        VerificationGate::new(GateConfig::default(), Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_wrong_answer_shows_error() {
        let mut gate = gate();
        let mut state = ChallengeState {
            answer: "a long time ago".to_string(),
            ..ChallengeState::default()
        };
        assert!(!state.submit(&mut gate));
        assert!(state.error.is_some());
        assert!(state.answer.is_empty());
        assert!(!gate.is_verified());
    }

    #[test]
    fn test_right_answer_then_reset() {
        let mut gate = gate();
        let mut state = ChallengeState {
            answer: GateConfig::default().answer,
            ..ChallengeState::default()
        };
        assert!(state.submit(&mut gate));
        assert!(gate.is_verified());
        assert!(state.scene.is_some());

        state.reset(&mut gate);
        assert!(!gate.is_verified());
        assert!(state.scene.is_none());
    }
}
