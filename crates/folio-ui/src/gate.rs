//! Trivia gate in front of the easter egg
//!
//! A client-side challenge, nothing more: the flag sits in session storage and
//! only decides whether the prompt or the scene is shown.

use crate::config::GateConfig;
use crate::platform::KeyValueStore;
use tracing::{debug, info};

const VERIFIED: &str = "true";

pub struct VerificationGate {
    config: GateConfig,
    store: Box<dyn KeyValueStore>,
}

impl VerificationGate {
    pub fn new(config: GateConfig, store: Box<dyn KeyValueStore>) -> Self {
        Self { config, store }
    }

    pub fn question(&self) -> &str {
        &self.config.question
    }

    pub fn is_verified(&self) -> bool {
        self.store.get(&self.config.storage_key).as_deref() == Some(VERIFIED)
    }

    /// Check an answer; a wrong answer clears any earlier verification
    pub fn submit(&mut self, answer: &str) -> bool {
        if normalize_answer(answer) == normalize_answer(&self.config.answer) {
            info!("Gate passed");
            self.store.set(&self.config.storage_key, VERIFIED);
            true
        } else {
            debug!("Gate answer rejected");
            self.store.remove(&self.config.storage_key);
            false
        }
    }

    pub fn reset(&mut self) {
        self.store.remove(&self.config.storage_key);
    }
}

/// Case-insensitive, whitespace-insensitive comparison form
fn normalize_answer(answer: &str) -> String {
    answer
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
