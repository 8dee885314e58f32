use std::error::Error;

/// Base trait for all application errors
pub trait WinctlError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type WinctlResult<T> = Result<T, Box<dyn WinctlError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winctl_result() {
        let _result: WinctlResult<i32> = Ok(42);
    }
}
