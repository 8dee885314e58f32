//! Window operations over a [`WindowProvider`].
//!
//! All decision logic lives here; the providers only translate calls to the
//! platform. Every function takes a fresh look at the live window set, so a
//! result is only as current as the moment of the call. Soft outcomes (no
//! match, stale handle, no foreground window) come back as `false` or
//! `None`; errors are reserved for malformed patterns and failing platform
//! calls.

use tracing::{debug, info};

use crate::provider::WindowProvider;
use crate::window::errors::WindowError;
use crate::window::types::{MatchPattern, WindowDescriptor, WindowHandle};

/// List every currently visible top-level window with a non-empty title,
/// in the provider's enumeration order.
pub fn list_windows(provider: &dyn WindowProvider) -> Result<Vec<WindowDescriptor>, WindowError> {
    info!(event = "core.window.list_started");

    let windows: Vec<WindowDescriptor> = provider
        .enumerate()?
        .into_iter()
        .filter(|w| !w.title.is_empty())
        .collect();

    info!(event = "core.window.list_completed", count = windows.len());
    Ok(windows)
}

/// Find the first window whose title satisfies `pattern`.
///
/// Scans the enumeration in order and returns the first hit; when several
/// windows match, enumeration order is the only tie-break. `None` means no
/// window matched, a routine outcome.
pub fn find_window(
    provider: &dyn WindowProvider,
    pattern: &MatchPattern,
) -> Result<Option<WindowHandle>, WindowError> {
    debug!(event = "core.window.find_started", pattern = %pattern);

    for window in list_windows(provider)? {
        if pattern.matches(&window.title) {
            debug!(
                event = "core.window.find_matched",
                handle = window.handle.as_raw(),
                title = window.title.as_str()
            );
            return Ok(Some(window.handle));
        }
    }

    debug!(event = "core.window.find_no_match", pattern = %pattern);
    Ok(None)
}

/// Focus the first window whose title satisfies `pattern`.
///
/// Returns whether a match was found and the focus sequence (restore if
/// minimized, raise, set input focus) was attempted. `false` is not an
/// error: either nothing matched, or the matched window vanished between
/// enumeration and the focus call.
pub fn focus_window(
    provider: &dyn WindowProvider,
    pattern: &MatchPattern,
) -> Result<bool, WindowError> {
    info!(event = "core.window.focus_started", pattern = %pattern);

    let Some(handle) = find_window(provider, pattern)? else {
        info!(event = "core.window.focus_no_match", pattern = %pattern);
        return Ok(false);
    };

    let focused = provider.focus(handle);
    info!(
        event = "core.window.focus_completed",
        handle = handle.as_raw(),
        focused = focused
    );
    Ok(focused)
}

/// Focus a window by handle.
///
/// Returns `false` when the handle no longer refers to a live window.
/// Handles are not owned by this library and routinely outlive their
/// window, so a stale handle is an expected outcome, not an error.
pub fn focus_window_by_handle(provider: &dyn WindowProvider, handle: WindowHandle) -> bool {
    info!(
        event = "core.window.focus_by_handle_started",
        handle = handle.as_raw()
    );

    let focused = provider.focus(handle);
    info!(
        event = "core.window.focus_by_handle_completed",
        handle = handle.as_raw(),
        focused = focused
    );
    focused
}

/// Snapshot the current foreground window, or `None` when the OS reports
/// no foreground window (all windows minimized, secure desktop, etc.).
pub fn active_window(
    provider: &dyn WindowProvider,
) -> Result<Option<WindowDescriptor>, WindowError> {
    debug!(event = "core.window.active_started");
    let window = provider.active_window()?;
    debug!(
        event = "core.window.active_completed",
        found = window.is_some()
    );
    Ok(window)
}

/// Move a window's top-left corner to `(x, y)` in screen coordinates,
/// preserving its size and z-order.
///
/// Coordinates are passed through without clamping to screen edges.
/// Returns `false` for a stale handle.
pub fn move_window(provider: &dyn WindowProvider, handle: WindowHandle, x: i32, y: i32) -> bool {
    info!(
        event = "core.window.move_started",
        handle = handle.as_raw(),
        x = x,
        y = y
    );

    let moved = provider.move_to(handle, x, y);
    info!(
        event = "core.window.move_completed",
        handle = handle.as_raw(),
        moved = moved
    );
    moved
}

/// Set a window's outer size to `width x height`, preserving its position
/// and z-order.
///
/// Dimensions are passed through uninterpreted; zero or negative values
/// mean whatever the OS decides. Returns `false` for a stale handle.
pub fn resize_window(
    provider: &dyn WindowProvider,
    handle: WindowHandle,
    width: i32,
    height: i32,
) -> bool {
    info!(
        event = "core.window.resize_started",
        handle = handle.as_raw(),
        width = width,
        height = height
    );

    let resized = provider.resize(handle, width, height);
    info!(
        event = "core.window.resize_completed",
        handle = handle.as_raw(),
        resized = resized
    );
    resized
}
