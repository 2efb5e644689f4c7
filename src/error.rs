//! Error types for the FriendNet library.
//!
//! The closure computation itself cannot fail: every word yields a
//! well-defined candidate sequence and every dictionary yields a well-defined
//! closure. Errors come from the outside world, such as an unreadable
//! dictionary file, a malformed configuration, a rejected command line
//! argument, or a worker pool that could not be started.
//!
//! # Examples
//!
//! ```
//! use friendnet::error::{FriendNetError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FriendNetError::invalid_argument("seed word must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for FriendNet operations.
#[derive(Error, Debug)]
pub enum FriendNetError {
    /// I/O errors (dictionary and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary contents that cannot be loaded
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Configuration errors (alphabet, intervals, thread counts)
    #[error("Config error: {0}")]
    Config(String),

    /// Command line arguments the engines cannot run with
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Thread pool or worker errors
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with FriendNetError.
pub type Result<T> = std::result::Result<T, FriendNetError>;

impl FriendNetError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        FriendNetError::Dictionary(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FriendNetError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FriendNetError::InvalidArgument(msg.into())
    }

    /// Create a new thread pool error.
    pub fn thread_pool<S: Into<String>>(msg: S) -> Self {
        FriendNetError::ThreadPool(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FriendNetError::dictionary("line 3: invalid UTF-8");
        assert_eq!(error.to_string(), "Dictionary error: line 3: invalid UTF-8");

        let error = FriendNetError::config("duplicate letter 'a'");
        assert_eq!(error.to_string(), "Config error: duplicate letter 'a'");

        let error = FriendNetError::invalid_argument("seed");
        assert_eq!(error.to_string(), "Invalid argument: seed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = FriendNetError::from(io_error);

        match error {
            FriendNetError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: FriendNetError = json_error.into();
        assert!(matches!(error, FriendNetError::Json(_)));
    }
}
