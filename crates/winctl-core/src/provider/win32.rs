//! Win32 binding for [`WindowProvider`].
//!
//! Every method is a direct, synchronous call into user32. The OS
//! serializes access to window state, so no locking happens here; a handle
//! going stale between calls shows up as `IsWindow` returning FALSE.

use std::ffi::{OsString, c_void};
use std::os::windows::ffi::OsStringExt;

use tracing::debug;
use windows_sys::Win32::Foundation::{HWND, LPARAM, RECT};
use windows_sys::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetForegroundWindow, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    IsIconic, IsWindow, IsWindowVisible, SW_RESTORE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER,
    SetForegroundWindow, SetWindowPos, ShowWindow,
};

use crate::window::errors::WindowError;
use crate::window::types::{Position, Size, WindowDescriptor, WindowHandle};

use super::WindowProvider;

pub struct Win32Provider;

impl Win32Provider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Win32Provider {
    fn default() -> Self {
        Self::new()
    }
}

fn to_hwnd(handle: WindowHandle) -> HWND {
    handle.as_raw() as usize as *mut c_void
}

fn from_hwnd(hwnd: HWND) -> WindowHandle {
    WindowHandle::from_raw(hwnd as usize as u64)
}

fn window_title(hwnd: HWND) -> String {
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return String::new();
    }

    let mut buffer = vec![0u16; (length + 1) as usize];
    let copied = unsafe { GetWindowTextW(hwnd, buffer.as_mut_ptr(), length + 1) };
    if copied <= 0 {
        return String::new();
    }

    OsString::from_wide(&buffer[..copied as usize])
        .to_string_lossy()
        .into_owned()
}

fn window_rect(hwnd: HWND) -> Result<(Position, Size), WindowError> {
    let mut rect: RECT = unsafe { std::mem::zeroed() };
    let ok = unsafe { GetWindowRect(hwnd, &mut rect) };
    if ok == 0 {
        return Err(WindowError::PlatformCallFailed {
            call: "GetWindowRect".to_string(),
            message: format!("no rectangle for window {}", from_hwnd(hwnd)),
        });
    }
    Ok((
        Position {
            x: rect.left,
            y: rect.top,
        },
        Size {
            width: rect.right - rect.left,
            height: rect.bottom - rect.top,
        },
    ))
}

/// Collects visible, titled top-level windows during `EnumWindows`.
unsafe extern "system" fn enum_windows_proc(hwnd: HWND, lparam: LPARAM) -> i32 {
    let handles = unsafe { &mut *(lparam as *mut Vec<HWND>) };

    if unsafe { IsWindowVisible(hwnd) } != 0 && unsafe { GetWindowTextLengthW(hwnd) } > 0 {
        handles.push(hwnd);
    }

    1
}

impl WindowProvider for Win32Provider {
    fn enumerate(&self) -> Result<Vec<WindowDescriptor>, WindowError> {
        let mut handles: Vec<HWND> = Vec::new();
        let ok = unsafe {
            EnumWindows(
                Some(enum_windows_proc),
                &mut handles as *mut Vec<HWND> as LPARAM,
            )
        };
        if ok == 0 {
            return Err(WindowError::EnumerationFailed {
                message: "EnumWindows returned FALSE".to_string(),
            });
        }

        let mut windows = Vec::with_capacity(handles.len());
        for hwnd in handles {
            let (position, size) = window_rect(hwnd)?;
            windows.push(WindowDescriptor::new(
                from_hwnd(hwnd),
                window_title(hwnd),
                position,
                size,
            ));
        }

        debug!(
            event = "core.provider.win32.enumerate_completed",
            count = windows.len()
        );
        Ok(windows)
    }

    fn is_live(&self, handle: WindowHandle) -> bool {
        unsafe { IsWindow(to_hwnd(handle)) != 0 }
    }

    fn focus(&self, handle: WindowHandle) -> bool {
        let hwnd = to_hwnd(handle);
        unsafe {
            if IsWindow(hwnd) == 0 {
                return false;
            }
            if IsIconic(hwnd) != 0 {
                ShowWindow(hwnd, SW_RESTORE);
            }
            // SetForegroundWindow can be refused by the focus-stealing rules;
            // the contract is "sequence attempted", matching the stale check above.
            SetForegroundWindow(hwnd);
            SetFocus(hwnd);
        }
        true
    }

    fn move_to(&self, handle: WindowHandle, x: i32, y: i32) -> bool {
        let hwnd = to_hwnd(handle);
        unsafe {
            if IsWindow(hwnd) == 0 {
                return false;
            }
            SetWindowPos(
                hwnd,
                std::ptr::null_mut(),
                x,
                y,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER,
            ) != 0
        }
    }

    fn resize(&self, handle: WindowHandle, width: i32, height: i32) -> bool {
        let hwnd = to_hwnd(handle);
        unsafe {
            if IsWindow(hwnd) == 0 {
                return false;
            }
            SetWindowPos(
                hwnd,
                std::ptr::null_mut(),
                0,
                0,
                width,
                height,
                SWP_NOMOVE | SWP_NOZORDER,
            ) != 0
        }
    }

    fn active_window(&self) -> Result<Option<WindowDescriptor>, WindowError> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_null() {
            return Ok(None);
        }

        // The foreground window may legitimately have an empty title.
        let (position, size) = window_rect(hwnd)?;
        Ok(Some(WindowDescriptor::new(
            from_hwnd(hwnd),
            window_title(hwnd),
            position,
            size,
        )))
    }
}
