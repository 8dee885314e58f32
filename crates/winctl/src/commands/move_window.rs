use clap::ArgMatches;
use tracing::info;

use winctl_core::{WindowHandle, window_ops};

use super::helpers;

pub(crate) fn handle_move_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = *matches
        .get_one::<u64>("handle")
        .ok_or("Handle argument is required")?;
    let x = *matches.get_one::<i32>("x").ok_or("x argument is required")?;
    let y = *matches.get_one::<i32>("y").ok_or("y argument is required")?;
    let handle = WindowHandle::from_raw(raw);

    info!(event = "cli.move_started", handle = raw, x = x, y = y);

    let provider = helpers::platform()?;

    if window_ops::move_window(provider.as_ref(), handle, x, y) {
        println!("Moved window {} to {},{}", handle, x, y);
        info!(event = "cli.move_completed", handle = raw);
        Ok(())
    } else {
        info!(event = "cli.move_rejected", handle = raw);
        helpers::soft_failure(&format!("No live window with handle {}", handle));
    }
}
