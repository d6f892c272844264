//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the movie catalog core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the other core crates
//! depend on. It establishes the logging conventions and the way bridge
//! implementations are injected into the catalog.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
