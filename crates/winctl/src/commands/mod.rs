use clap::ArgMatches;
use tracing::error;

use winctl_core::events;

pub mod helpers;

mod active;
mod completions;
mod focus;
mod focus_handle;
mod list;
mod move_window;
mod resize;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("focus", sub_matches)) => focus::handle_focus_command(sub_matches),
        Some(("focus-handle", sub_matches)) => {
            focus_handle::handle_focus_handle_command(sub_matches)
        }
        Some(("active", sub_matches)) => active::handle_active_command(sub_matches),
        Some(("move", sub_matches)) => move_window::handle_move_command(sub_matches),
        Some(("resize", sub_matches)) => resize::handle_resize_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
