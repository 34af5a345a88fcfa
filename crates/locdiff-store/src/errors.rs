//! Error handling for locdiff-store
//!
//! Wraps locdiff-core ExError with store-specific helpers

use locdiff_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a serialization error from serde_json::Error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helper_kinds() {
        let io = io_error("read_snapshot", std::io::Error::other("boom"));
        assert_eq!(io.kind(), ExErrorKind::Io);
        assert_eq!(io.op(), Some("read_snapshot"));

        let sql = from_rusqlite(rusqlite::Error::InvalidQuery);
        assert_eq!(sql.kind(), ExErrorKind::Persistence);

        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let ser = serialization_error("parse_snapshot", json_err);
        assert_eq!(ser.code(), "ERR_SERIALIZATION");
    }
}
