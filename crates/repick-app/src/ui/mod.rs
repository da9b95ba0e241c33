//! # Presentational Binding Models
//!
//! Render-ready view models over the workflow controllers. Frontends map
//! these snapshots onto widgets; no pixels live here.

pub mod pick_button;

pub use pick_button::{ClickOutcome, PickButtonModel, PickButtonView, PickVariant, PICK_POP_MS};
