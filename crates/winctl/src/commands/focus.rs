use clap::ArgMatches;
use tracing::{error, info};

use winctl_core::{MatchPattern, events, window_ops};

use super::helpers;

pub(crate) fn handle_focus_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let pattern_arg = matches
        .get_one::<String>("pattern")
        .ok_or("Pattern argument is required")?;
    let use_regex = matches.get_flag("regex");

    info!(
        event = "cli.focus_started",
        pattern = pattern_arg.as_str(),
        use_regex = use_regex
    );

    // Pattern validation happens before any OS call: a malformed regex is a
    // hard error, never a silent fall-back to literal matching.
    let pattern = match MatchPattern::new(pattern_arg, use_regex) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            error!(event = "cli.focus_invalid_pattern", pattern = pattern_arg.as_str(), error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let provider = helpers::platform()?;

    match window_ops::focus_window(provider.as_ref(), &pattern) {
        Ok(true) => {
            println!("Focused window matching '{}'", pattern_arg);
            info!(event = "cli.focus_completed", pattern = pattern_arg.as_str());
            Ok(())
        }
        Ok(false) => {
            info!(event = "cli.focus_no_match", pattern = pattern_arg.as_str());
            helpers::soft_failure(&format!("No window matching '{}'", pattern_arg));
        }
        Err(e) => {
            eprintln!("Failed to focus window: {}", e);
            error!(event = "cli.focus_failed", pattern = pattern_arg.as_str(), error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
