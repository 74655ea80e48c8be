//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Architectural sizes, text-grammar sigils, and simulation limits.
//! 2. **Error Handling:** Parse, simulation, and load error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for decoding, simulation, and loading.
pub mod error;

pub use constants::REGISTER_COUNT;
pub use error::{LoadError, ParseError, SimError};
