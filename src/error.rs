//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
/// Only `NotFound` is produced by path resolution itself; the rest come from
/// the command-line caller.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Key path '{path}' not found. Failed at key '{segment}'")]
    NotFound { path: String, segment: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Check {case} failed: {details}")]
    CheckFailed { case: usize, details: String },
}

impl PathError {
    /// Segment at which traversal stopped, if this is a lookup failure
    pub fn failed_segment(&self) -> Option<&str> {
        match self {
            PathError::NotFound { segment, .. } => Some(segment),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PathError::NotFound { .. })
    }
}

impl FixSuggestion for PathError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            PathError::NotFound { .. } => {
                Some("Check each '/'-separated key exists and every parent is an object (or use --safe)")
            }
            PathError::Io(_) => Some("Check file path and permissions"),
            PathError::Json(_) => Some("Ensure input is valid JSON (try --format yaml for YAML documents)"),
            PathError::Yaml(_) => Some("Check YAML syntax: indentation and quoting"),
            PathError::CheckFailed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_path_and_segment() {
        let err = PathError::NotFound {
            path: "a/b/nonexistent".to_string(),
            segment: "nonexistent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'a/b/nonexistent'"));
        assert!(msg.contains("Failed at key 'nonexistent'"));
        assert_eq!(err.failed_segment(), Some("nonexistent"));
        assert!(err.is_not_found());
    }

    #[test]
    fn every_input_error_has_a_suggestion() {
        let io = PathError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.fix_suggestion().is_some());
        assert!(!io.is_not_found());

        let json = PathError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(json.fix_suggestion().unwrap().contains("--format yaml"));
    }

    #[test]
    fn check_failure_has_no_suggestion() {
        let err = PathError::CheckFailed {
            case: 3,
            details: "expected John".to_string(),
        };
        assert_eq!(err.to_string(), "Check 3 failed: expected John");
        assert!(err.fix_suggestion().is_none());
        assert!(err.failed_segment().is_none());
    }
}
