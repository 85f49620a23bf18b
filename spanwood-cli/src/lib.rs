//! Support library for the spanwood CLI binary.
//!
//! Exposes the command and logging modules so tests can drive the command
//! without spawning a subprocess.

pub mod cli;
pub mod logging;
