use tracing::error;

use winctl_core::{WindowProvider, events, platform_provider};

/// Exit status used when an operation completes without error but the
/// requested window was not there (no match, stale handle, no foreground
/// window). The message goes to stdout, not stderr, since this is a normal
/// outcome rather than a failure of the call itself.
pub const SOFT_FAILURE_EXIT: i32 = 1;

/// Bind to the platform windowing API, or fail with a descriptive error on
/// unsupported platforms.
pub fn platform() -> Result<Box<dyn WindowProvider>, Box<dyn std::error::Error>> {
    match platform_provider() {
        Ok(provider) => Ok(provider),
        Err(e) => {
            eprintln!("Error: {}", e);
            error!(event = "cli.provider_unavailable", error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// Report a soft failure: message on stdout, then exit without treating the
/// outcome as an error.
pub fn soft_failure(message: &str) -> ! {
    println!("{}", message);
    std::process::exit(SOFT_FAILURE_EXIT);
}
