//! Things that only run on the server
//!
//! The books themselves live in an external REST backend; this server only renders and hydrates
//! the app, so all it needs is its config and a clean way to shut down.
pub mod config;
pub mod signal_handler;
