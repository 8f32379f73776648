//! Error types for the file bindings.
//!
//! Every failure inside a host function is a [`SyncFileError`]. It is turned
//! into a Rhai runtime error at the function boundary and never reaches the
//! script as a native type; the message text is the only detail that survives.

use rhai::EvalAltResult;
use std::io;
use thiserror::Error;

/// Errors raised by the host functions.
#[derive(Error, Debug)]
pub enum SyncFileError {
    /// Wrong number of arguments, or a first argument that is not a string.
    #[error("{function}: expected string path")]
    Argument { function: &'static str },

    #[error("Cannot open file: {path} ({source})")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot stat file: {path} ({source})")]
    Stat {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The buffer could not be allocated, or exceeds the engine's size limit.
    #[error("Cannot allocate binary buffer of {} bytes{}", .len, limit_suffix(.limit))]
    Allocation { len: u64, limit: Option<usize> },
}

fn limit_suffix(limit: &Option<usize>) -> String {
    match limit {
        Some(limit) => format!(" (limit {})", limit),
        None => String::new(),
    }
}

impl From<SyncFileError> for Box<EvalAltResult> {
    fn from(err: SyncFileError) -> Self {
        err.to_string().into()
    }
}

/// Result alias used by the native side of the bindings.
pub type Result<T> = std::result::Result<T, SyncFileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_message_names_function() {
        let err = SyncFileError::Argument {
            function: "readTextFile",
        };
        assert_eq!(err.to_string(), "readTextFile: expected string path");
    }

    #[test]
    fn test_open_message_carries_path_and_os_error() {
        let err = SyncFileError::Open {
            path: "/missing".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Cannot open file: /missing ("));
        assert!(msg.contains(&io::Error::from(io::ErrorKind::NotFound).to_string()));
    }

    #[test]
    fn test_allocation_message() {
        let unlimited = SyncFileError::Allocation { len: 10, limit: None };
        assert_eq!(unlimited.to_string(), "Cannot allocate binary buffer of 10 bytes");

        let limited = SyncFileError::Allocation {
            len: 10,
            limit: Some(4),
        };
        assert_eq!(
            limited.to_string(),
            "Cannot allocate binary buffer of 10 bytes (limit 4)"
        );
    }

    #[test]
    fn test_translates_to_runtime_error() {
        let err: Box<EvalAltResult> = SyncFileError::Argument {
            function: "existsSync",
        }
        .into();
        match *err {
            EvalAltResult::ErrorRuntime(ref value, _) => {
                assert_eq!(value.clone().into_string().unwrap(), "existsSync: expected string path");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }
}
