use clap::ArgMatches;
use tracing::{error, info};

use winctl_core::{events, window_ops};

use super::helpers;

pub(crate) fn handle_active_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.active_started", json_output = json_output);

    let provider = helpers::platform()?;

    match window_ops::active_window(provider.as_ref()) {
        Ok(Some(window)) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&window)?);
            } else {
                println!("handle:   {}", window.handle);
                println!("title:    {}", window.title);
                println!("position: {},{}", window.position.x, window.position.y);
                println!("size:     {}x{}", window.size.width, window.size.height);
            }
            info!(
                event = "cli.active_completed",
                handle = window.handle.as_raw()
            );
            Ok(())
        }
        Ok(None) => {
            info!(event = "cli.active_none");
            helpers::soft_failure("No foreground window");
        }
        Err(e) => {
            eprintln!("Failed to read foreground window: {}", e);
            error!(event = "cli.active_failed", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
