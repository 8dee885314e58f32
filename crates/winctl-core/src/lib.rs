//! winctl-core: Core library for desktop window matching and mutation
//!
//! This library locates top-level desktop windows by title pattern or by
//! opaque handle and applies point-in-time state changes (focus, move,
//! resize) or returns read-only snapshots. It is used by the `winctl` CLI.
//!
//! # Main Entry Points
//!
//! - [`window`] - Descriptor types, match patterns, and window operations
//! - [`provider`] - The OS seam: [`provider::WindowProvider`] plus the
//!   Win32 binding and a deterministic in-memory fake for tests
//! - [`logging`] - Structured JSON logging setup
//!
//! Every operation re-queries the OS on each call; nothing is cached. Soft
//! outcomes (no match, stale handle, no foreground window) are normal return
//! values, never errors.

pub mod errors;
pub mod events;
pub mod logging;
pub mod provider;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use errors::{WinctlError, WinctlResult};
pub use provider::{FakeWindowProvider, WindowProvider, platform_provider};
pub use window::errors::WindowError;
pub use window::types::{MatchPattern, Position, Size, WindowDescriptor, WindowHandle};

// Re-export the handler module as the primary API
pub use window::handler as window_ops;

// Re-export logging initialization
pub use logging::init_logging;
