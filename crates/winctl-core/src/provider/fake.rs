//! Deterministic in-memory window provider.
//!
//! Backs the unit tests for the window operations and is exported so
//! downstream code can test against a controlled window set instead of the
//! live desktop. Enumeration order is insertion order.

use std::sync::Mutex;

use crate::window::errors::WindowError;
use crate::window::types::{Position, Size, WindowDescriptor, WindowHandle};

use super::WindowProvider;

#[derive(Debug, Clone)]
struct FakeWindow {
    descriptor: WindowDescriptor,
    visible: bool,
    minimized: bool,
}

#[derive(Debug, Default)]
struct State {
    windows: Vec<FakeWindow>,
    active: Option<WindowHandle>,
}

/// In-memory [`WindowProvider`] with a scriptable window set.
#[derive(Debug, Default)]
pub struct FakeWindowProvider {
    state: Mutex<State>,
}

impl FakeWindowProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible window and return its handle.
    pub fn add_window(
        &self,
        raw_handle: u64,
        title: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> WindowHandle {
        self.insert(raw_handle, title, x, y, width, height, true)
    }

    /// Add a non-visible window (never enumerated, but live).
    pub fn add_hidden_window(&self, raw_handle: u64, title: &str) -> WindowHandle {
        self.insert(raw_handle, title, 0, 0, 100, 100, false)
    }

    fn insert(
        &self,
        raw_handle: u64,
        title: &str,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        visible: bool,
    ) -> WindowHandle {
        let handle = WindowHandle::from_raw(raw_handle);
        let descriptor = WindowDescriptor::new(
            handle,
            title.to_string(),
            Position { x, y },
            Size { width, height },
        );
        self.state.lock().unwrap().windows.push(FakeWindow {
            descriptor,
            visible,
            minimized: false,
        });
        handle
    }

    /// Remove a window, simulating the user closing it.
    pub fn close_window(&self, handle: WindowHandle) {
        let mut state = self.state.lock().unwrap();
        state.windows.retain(|w| w.descriptor.handle != handle);
        if state.active == Some(handle) {
            state.active = None;
        }
    }

    pub fn set_minimized(&self, handle: WindowHandle, minimized: bool) {
        let mut state = self.state.lock().unwrap();
        if let Some(w) = state
            .windows
            .iter_mut()
            .find(|w| w.descriptor.handle == handle)
        {
            w.minimized = minimized;
        }
    }

    pub fn set_active(&self, handle: WindowHandle) {
        self.state.lock().unwrap().active = Some(handle);
    }

    /// Current snapshot of a window, for test assertions.
    pub fn descriptor(&self, handle: WindowHandle) -> Option<WindowDescriptor> {
        self.state
            .lock()
            .unwrap()
            .windows
            .iter()
            .find(|w| w.descriptor.handle == handle)
            .map(|w| w.descriptor.clone())
    }

    pub fn is_minimized(&self, handle: WindowHandle) -> Option<bool> {
        self.state
            .lock()
            .unwrap()
            .windows
            .iter()
            .find(|w| w.descriptor.handle == handle)
            .map(|w| w.minimized)
    }
}

impl WindowProvider for FakeWindowProvider {
    fn enumerate(&self) -> Result<Vec<WindowDescriptor>, WindowError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .windows
            .iter()
            .filter(|w| w.visible)
            .map(|w| w.descriptor.clone())
            .collect())
    }

    fn is_live(&self, handle: WindowHandle) -> bool {
        self.state
            .lock()
            .unwrap()
            .windows
            .iter()
            .any(|w| w.descriptor.handle == handle)
    }

    fn focus(&self, handle: WindowHandle) -> bool {
        let mut state = self.state.lock().unwrap();
        let Some(window) = state
            .windows
            .iter_mut()
            .find(|w| w.descriptor.handle == handle)
        else {
            return false;
        };
        window.minimized = false;
        state.active = Some(handle);
        true
    }

    fn move_to(&self, handle: WindowHandle, x: i32, y: i32) -> bool {
        let mut state = self.state.lock().unwrap();
        let Some(window) = state
            .windows
            .iter_mut()
            .find(|w| w.descriptor.handle == handle)
        else {
            return false;
        };
        window.descriptor.position = Position { x, y };
        true
    }

    fn resize(&self, handle: WindowHandle, width: i32, height: i32) -> bool {
        let mut state = self.state.lock().unwrap();
        let Some(window) = state
            .windows
            .iter_mut()
            .find(|w| w.descriptor.handle == handle)
        else {
            return false;
        };
        window.descriptor.size = Size { width, height };
        true
    }

    fn active_window(&self) -> Result<Option<WindowDescriptor>, WindowError> {
        let state = self.state.lock().unwrap();
        let Some(active) = state.active else {
            return Ok(None);
        };
        Ok(state
            .windows
            .iter()
            .find(|w| w.descriptor.handle == active)
            .map(|w| w.descriptor.clone()))
    }
}
