//! Networking modules for the NoteNest REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues one request per endpoint, `error` is its failure type, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
