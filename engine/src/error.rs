//! Level and config loading errors.

/// Errors that can occur while turning an authored level (or a physics
/// config file) into runtime data.
#[derive(Debug)]
pub enum LevelError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// A rotate or camera_spin entry has a duration that is not strictly positive.
    InvalidDuration {
        kind: &'static str,
        index: usize,
        duration: f32,
    },
    /// A rotation axis has zero length.
    ZeroAxis { kind: &'static str, index: usize },
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::Io(e) => write!(f, "IO error: {e}"),
            LevelError::Json(e) => write!(f, "JSON error: {e}"),
            LevelError::InvalidDuration {
                kind,
                index,
                duration,
            } => write!(f, "{kind} #{index}: duration must be > 0, got {duration}"),
            LevelError::ZeroAxis { kind, index } => {
                write!(f, "{kind} #{index}: rotation axis has zero length")
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::Io(e) => Some(e),
            LevelError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e)
    }
}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Json(e)
    }
}
