use clap::ArgMatches;
use tracing::info;

use winctl_core::{WindowHandle, window_ops};

use super::helpers;

pub(crate) fn handle_resize_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = *matches
        .get_one::<u64>("handle")
        .ok_or("Handle argument is required")?;
    let width = *matches
        .get_one::<i32>("width")
        .ok_or("Width argument is required")?;
    let height = *matches
        .get_one::<i32>("height")
        .ok_or("Height argument is required")?;
    let handle = WindowHandle::from_raw(raw);

    info!(
        event = "cli.resize_started",
        handle = raw,
        width = width,
        height = height
    );

    let provider = helpers::platform()?;

    if window_ops::resize_window(provider.as_ref(), handle, width, height) {
        println!("Resized window {} to {}x{}", handle, width, height);
        info!(event = "cli.resize_completed", handle = raw);
        Ok(())
    } else {
        info!(event = "cli.resize_rejected", handle = raw);
        helpers::soft_failure(&format!("No live window with handle {}", handle));
    }
}
