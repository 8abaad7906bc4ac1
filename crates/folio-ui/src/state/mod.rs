//! Page state that outlives a frame
//!
//! - `forms`: raw text buffers and their validation
//! - `production`: the production tracker's records and requests
//! - `task`: background request slots

pub mod forms;
pub mod production;
pub mod task;

pub use forms::{AuthForm, AuthMode, AuthSubmission, ContactForm, FormError, RecordForm};
pub use production::ProductionState;
pub use task::{take_finished, Spawner, TaskSlot};
