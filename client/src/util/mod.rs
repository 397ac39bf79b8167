//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure view-model
//! derivations from page and component logic to improve reuse and
//! testability.

pub mod admin_view;
pub mod debounce;
pub mod geolocation;
pub mod intake;
pub mod markers;
