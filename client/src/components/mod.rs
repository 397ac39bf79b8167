//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the map, the admin overview and the client forms while
//! reading shared records from Leptos context providers.

pub mod admin_map_panel;
pub mod client_intake_form;
pub mod map_widget;
pub mod self_location_panel;
