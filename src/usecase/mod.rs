//! Usecase layer: application workflows + events.

pub mod condense;
pub mod event;
pub mod stats;
pub mod validate;
