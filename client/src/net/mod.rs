//! Networking modules for the host server and the external services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the Lifeline host (same origin), `supabase` to the hosted
//! auth/database provider, `geocode` to the address search service.
//! `services` holds the traits workflows are written against, `types` the
//! shared record schema, `error` the common failure type.

pub mod api;
pub mod error;
pub mod geocode;
pub mod services;
pub mod supabase;
pub mod types;
