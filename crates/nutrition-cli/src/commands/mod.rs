//! Command handlers, one per subcommand.

mod check;
mod entries;
mod goal;
mod init;
mod misc;
mod stats;
mod today;

pub use check::handle_check;
pub use entries::{
    handle_add, handle_clear, handle_delete, handle_edit, handle_export, handle_list, handle_show,
};
pub use goal::{handle_goal_set, handle_goal_show};
pub use init::handle_init;
pub use misc::handle_completions;
pub use stats::handle_stats;
pub use today::handle_today;
