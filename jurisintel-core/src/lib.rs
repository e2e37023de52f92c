//! JurisIntel Core - Shared data structures, errors, logging and configuration
//!
//! This module defines the core abstractions used across the JurisIntel system.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
