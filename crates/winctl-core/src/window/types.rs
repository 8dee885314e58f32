use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::window::errors::WindowError;

/// Opaque OS-assigned identifier for a top-level window.
///
/// A handle is a pass-through token: it supports equality and hashing only,
/// never ordering or arithmetic. It is valid only as long as the OS considers
/// the window alive; operations taking a handle return `false` when it has
/// gone stale, which is a routine outcome rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(u64);

impl WindowHandle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Screen coordinates of a window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Outer dimensions of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

/// Snapshot of one top-level window at enumeration time.
///
/// A descriptor is a plain value: it describes the window's state at the
/// moment it was built and carries no guarantee the window still exists,
/// still has this title, or still sits at this position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowDescriptor {
    pub handle: WindowHandle,
    pub title: String,
    pub position: Position,
    pub size: Size,
}

impl WindowDescriptor {
    pub fn new(handle: WindowHandle, title: String, position: Position, size: Size) -> Self {
        Self {
            handle,
            title,
            position,
            size,
        }
    }
}

/// Title predicate for locating a window.
///
/// Literal patterns match as a case-insensitive substring. Regex patterns
/// are compiled case-insensitive and searched unanchored. Compilation
/// happens at construction, so an invalid regex fails before any OS call
/// and never silently falls back to literal matching.
#[derive(Debug, Clone)]
pub enum MatchPattern {
    Literal(String),
    Regex(Regex),
}

impl MatchPattern {
    /// Build a pattern from caller input, `use_regex` selecting the mode.
    pub fn new(pattern: &str, use_regex: bool) -> Result<Self, WindowError> {
        if use_regex {
            Self::regex(pattern)
        } else {
            Ok(Self::literal(pattern))
        }
    }

    /// Case-insensitive substring pattern.
    pub fn literal(pattern: &str) -> Self {
        MatchPattern::Literal(pattern.to_lowercase())
    }

    /// Case-insensitive unanchored regex pattern.
    pub fn regex(pattern: &str) -> Result<Self, WindowError> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| WindowError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(MatchPattern::Regex(compiled))
    }

    /// Test a window title against this pattern.
    pub fn matches(&self, title: &str) -> bool {
        match self {
            MatchPattern::Literal(needle) => title.to_lowercase().contains(needle.as_str()),
            MatchPattern::Regex(re) => re.is_match(title),
        }
    }
}

impl std::fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPattern::Literal(needle) => write!(f, "{}", needle),
            MatchPattern::Regex(re) => write!(f, "{}", re.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_handle_round_trip() {
        let handle = WindowHandle::from_raw(0x2f0a4c);
        assert_eq!(handle.as_raw(), 0x2f0a4c);
        assert_eq!(handle, WindowHandle::from_raw(0x2f0a4c));
        assert_ne!(handle, WindowHandle::from_raw(0x2f0a4d));
    }

    #[test]
    fn test_window_handle_serializes_as_plain_integer() {
        let handle = WindowHandle::from_raw(42);
        assert_eq!(serde_json::to_string(&handle).unwrap(), "42");

        let parsed: WindowHandle = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, handle);
    }

    #[test]
    fn test_literal_match_is_case_insensitive_substring() {
        let pattern = MatchPattern::literal("note");
        assert!(pattern.matches("My Notepad"));
        assert!(pattern.matches("NOTES - editor"));
        assert!(!pattern.matches("Calculator"));
    }

    #[test]
    fn test_literal_match_mixed_case_pattern() {
        let pattern = MatchPattern::literal("NoTePad");
        assert!(pattern.matches("my notepad session"));
    }

    #[test]
    fn test_regex_match_is_case_insensitive_and_unanchored() {
        let pattern = MatchPattern::regex("note(pad)?").unwrap();
        assert!(pattern.matches("My Notepad"));
        assert!(pattern.matches("keynote speech"));
        assert!(!pattern.matches("Calculator"));
    }

    #[test]
    fn test_regex_invalid_pattern_is_an_error() {
        let result = MatchPattern::regex("(unbalanced");
        let err = result.unwrap_err();
        assert!(matches!(err, WindowError::InvalidPattern { .. }));
    }

    #[test]
    fn test_new_selects_mode() {
        assert!(matches!(
            MatchPattern::new("abc", false).unwrap(),
            MatchPattern::Literal(_)
        ));
        assert!(matches!(
            MatchPattern::new("abc", true).unwrap(),
            MatchPattern::Regex(_)
        ));
        // Regex metacharacters are inert in literal mode
        let literal = MatchPattern::new("(unbalanced", false).unwrap();
        assert!(literal.matches("an (unbalanced title"));
    }

    #[test]
    fn test_descriptor_serialization_shape() {
        let descriptor = WindowDescriptor::new(
            WindowHandle::from_raw(7),
            "Terminal".to_string(),
            Position { x: 10, y: 20 },
            Size {
                width: 800,
                height: 600,
            },
        );

        let json = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(json["handle"], 7);
        assert_eq!(json["title"], "Terminal");
        assert_eq!(json["position"]["x"], 10);
        assert_eq!(json["size"]["height"], 600);
    }
}
