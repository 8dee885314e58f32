use clap::ArgMatches;
use tracing::{error, info};

use winctl_core::{events, window_ops};

use super::helpers;

pub(crate) fn handle_list_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.list_started", json_output = json_output);

    let provider = helpers::platform()?;

    let windows = match window_ops::list_windows(provider.as_ref()) {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Failed to list windows: {}", e);
            error!(event = "cli.list_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else {
        for window in &windows {
            println!(
                "{:>10}  {:>6},{:<6}  {:>5}x{:<5}  {}",
                window.handle,
                window.position.x,
                window.position.y,
                window.size.width,
                window.size.height,
                window.title
            );
        }
    }

    info!(event = "cli.list_completed", count = windows.len());
    Ok(())
}
