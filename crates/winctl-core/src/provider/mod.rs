//! WindowProvider: the seam between window operations and the OS.
//!
//! This module and its submodules are responsible ONLY for talking to the
//! platform windowing API (enumeration, liveness, focus, placement). All
//! matching and decision logic lives in [`crate::window::handler`]; keeping
//! it out of the providers is what makes the operations testable against
//! the in-memory fake.

pub mod fake;
#[cfg(target_os = "windows")]
pub mod win32;

pub use fake::FakeWindowProvider;

use crate::window::errors::WindowError;
use crate::window::types::{WindowDescriptor, WindowHandle};

/// Access to the live set of top-level desktop windows.
///
/// The backing window registry is shared, mutable, global state owned by the
/// OS: other processes or the user may close, move, retitle, or refocus
/// windows between any two calls. Implementations therefore answer
/// point-in-time questions and report stale handles as `false` rather than
/// failing.
pub trait WindowProvider: Send + Sync {
    /// Snapshot every currently visible top-level window, in the
    /// platform's enumeration order. Titles may be empty; filtering them
    /// out is the caller's concern.
    fn enumerate(&self) -> Result<Vec<WindowDescriptor>, WindowError>;

    /// Whether `handle` still refers to a live window.
    fn is_live(&self, handle: WindowHandle) -> bool;

    /// Restore the window if minimized, raise it to the foreground, and
    /// give it input focus. Returns `false` only for a stale handle.
    fn focus(&self, handle: WindowHandle) -> bool;

    /// Reposition the window's top-left corner, preserving size and
    /// z-order. Returns `false` for a stale handle or a refused call.
    fn move_to(&self, handle: WindowHandle, x: i32, y: i32) -> bool;

    /// Set the window's outer size, preserving position and z-order.
    /// Dimensions are passed through uninterpreted; the OS defines the
    /// behavior for zero or negative values.
    fn resize(&self, handle: WindowHandle, width: i32, height: i32) -> bool;

    /// Snapshot the current foreground window, or `None` if the platform
    /// reports no foreground window.
    fn active_window(&self) -> Result<Option<WindowDescriptor>, WindowError>;
}

/// Create the provider bound to the real platform windowing API.
#[cfg(target_os = "windows")]
pub fn platform_provider() -> Result<Box<dyn WindowProvider>, WindowError> {
    Ok(Box::new(win32::Win32Provider::new()))
}

#[cfg(not(target_os = "windows"))]
pub fn platform_provider() -> Result<Box<dyn WindowProvider>, WindowError> {
    Err(WindowError::UnsupportedPlatform)
}
