use clap::ArgMatches;
use tracing::info;

use winctl_core::{WindowHandle, window_ops};

use super::helpers;

pub(crate) fn handle_focus_handle_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = *matches
        .get_one::<u64>("handle")
        .ok_or("Handle argument is required")?;
    let handle = WindowHandle::from_raw(raw);

    info!(event = "cli.focus_handle_started", handle = raw);

    let provider = helpers::platform()?;

    if window_ops::focus_window_by_handle(provider.as_ref(), handle) {
        println!("Focused window {}", handle);
        info!(event = "cli.focus_handle_completed", handle = raw);
        Ok(())
    } else {
        // Handles outlive their window; a stale one is routine, not an error.
        info!(event = "cli.focus_handle_stale", handle = raw);
        helpers::soft_failure(&format!("No live window with handle {}", handle));
    }
}
