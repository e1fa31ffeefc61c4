pub mod arrange;
pub mod challenge;
pub mod config;
pub mod error;
pub mod export;
pub mod progress;

pub use arrange::arrange;
pub use challenge::{Arrangement, GameEntry, Mode, Slot};
pub use config::{ChallengeConfig, ChallengeSettings, DisplaySettings, ProfileSettings};
pub use error::{Error, Result};
pub use export::{
    ColorScheme, ProgressReport, format_progress_console, format_progress_summary, render_post,
};
pub use progress::{
    Progress, ProgressMetrics, compute_progress, largest_complete_staircase, triangular,
};
