//! Challenge data model.
//!
//! This module contains the value types the arranger works on:
//! - `GameEntry` - one declared game with its play count and optional slot cap
//! - `Mode` - challenge difficulty mode
//! - `Slot`, `Arrangement` - the arranged staircase

mod arrangement;
mod entry;
mod mode;

pub use arrangement::*;
pub use entry::*;
pub use mode::*;
