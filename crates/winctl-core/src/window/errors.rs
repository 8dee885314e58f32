use crate::errors::WinctlError;

/// Hard failures of window operations.
///
/// Soft outcomes (no matching window, stale handle, no foreground window)
/// are deliberately not represented here: they come back as `false` or
/// `None` from the operations. Only malformed input and failing platform
/// calls surface as errors.
#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Windowing API call '{call}' failed: {message}")]
    PlatformCallFailed { call: String, message: String },

    #[error("Window operations are not supported on this platform")]
    UnsupportedPlatform,
}

impl WinctlError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::InvalidPattern { .. } => "INVALID_PATTERN",
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::PlatformCallFailed { .. } => "PLATFORM_CALL_FAILED",
            WindowError::UnsupportedPlatform => "UNSUPPORTED_PLATFORM",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowError::InvalidPattern { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let error = WindowError::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid regex pattern '(': unclosed group"
        );
        assert_eq!(error.error_code(), "INVALID_PATTERN");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_enumeration_failed() {
        let error = WindowError::EnumerationFailed {
            message: "EnumWindows returned FALSE".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to enumerate windows: EnumWindows returned FALSE"
        );
        assert_eq!(error.error_code(), "WINDOW_ENUMERATION_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_platform_call_failed() {
        let error = WindowError::PlatformCallFailed {
            call: "GetWindowRect".to_string(),
            message: "invalid window handle".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Windowing API call 'GetWindowRect' failed: invalid window handle"
        );
        assert_eq!(error.error_code(), "PLATFORM_CALL_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_unsupported_platform() {
        let error = WindowError::UnsupportedPlatform;
        assert_eq!(error.error_code(), "UNSUPPORTED_PLATFORM");
        assert!(!error.is_user_error());
    }
}
