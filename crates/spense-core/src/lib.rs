//! Core spense library (API client, session store, config).

pub mod api;
pub mod config;
pub mod session;
