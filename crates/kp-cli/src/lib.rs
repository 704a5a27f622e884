//! Keyplate CLI library
//!
//! Command implementations and logging setup for the `kp` binary.

pub mod commands;
pub mod logging;
