use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for Vitrine
#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Story '{story}' requires a description")]
    MissingDescription { story: String },

    #[error("No story registered at '{path}'")]
    StoryNotFound { path: String },

    #[error("Theme loading failed for '{path}': {source}")]
    ThemeLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme parsing failed for '{path}': {source}")]
    ThemeParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Site export failed: {0}")]
    SiteExport(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VitrineError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use vitrine::error::ResultExt;
///
/// // Silently log and continue if theme fails to load
/// let theme = load_theme().log_err();
///
/// // Log as warning for expected failures
/// let config = read_config().warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

/// Panic in debug mode, log error in release mode.
///
/// Use for "impossible" states that should crash during development
/// but gracefully degrade in production.
///
/// # Examples
///
/// ```ignore
/// use vitrine::debug_panic;
///
/// debug_panic!("Invalid attribute name: {}", name);
/// ```
#[macro_export]
macro_rules! debug_panic {
    ( $($fmt_arg:tt)* ) => {
        if cfg!(debug_assertions) {
            panic!( $($fmt_arg)* );
        } else {
            tracing::error!("IMPOSSIBLE STATE: {}", format_args!($($fmt_arg)*));
        }
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
