pub mod errors;
pub mod handler;
pub mod types;

// Re-export commonly used types and functions
pub use errors::WindowError;
pub use handler::{
    active_window, find_window, focus_window, focus_window_by_handle, list_windows, move_window,
    resize_window,
};
pub use types::{MatchPattern, Position, Size, WindowDescriptor, WindowHandle};
