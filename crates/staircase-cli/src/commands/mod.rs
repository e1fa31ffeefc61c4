//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod check;
pub mod init;
pub mod render;
pub mod status;
