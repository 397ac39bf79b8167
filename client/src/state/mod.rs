//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`config`, `dispatch`, `map`) so components can
//! depend on small focused models provided through Leptos context.

pub mod config;
pub mod dispatch;
pub mod map;
