//! Site configuration for Keqi's Log.
//!
//! The whole configuration is the [`config::SITE`] static. Everything else in
//! the crate exists to type it or hand it to a site generator running in
//! another process.

pub mod config;
pub mod export;
pub mod types;
