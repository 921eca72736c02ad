//! Core types and trait definitions for the Folio admin console.
//!
//! This crate is deliberately free of HTTP and I/O dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod content;
pub mod error;
pub mod feedback;
pub mod gateway;
pub mod id;
pub mod record;
pub mod settings;
pub mod writing;

pub use error::{Error, Result};
