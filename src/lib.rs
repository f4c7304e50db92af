//! Hotel Admin - browser front end for hotel booking administration
//!
//! This library provides:
//! - Session storage and bearer-token claims decoding
//! - Auth state derivation and per-route access guards
//! - Login/logout flows against the remote hotel API
//! - Room type and reservation list/edit pages (Dioxus fullstack)

pub mod app;
pub mod config;
