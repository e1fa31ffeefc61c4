//! Output formats for an arranged staircase.

mod bbcode;
mod console;
mod palette;
mod report;

pub use bbcode::{game_name, render_post};
pub use console::{format_progress_console, format_progress_summary};
pub use palette::{ColorScheme, StarPainter, badges, random_star_sequence};
pub use report::{ProgressReport, SlotReport};
