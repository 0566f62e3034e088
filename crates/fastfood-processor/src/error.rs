//! # Processor Error Types
//!
//! Everything that aborts an import or export call. Rejected records are not
//! errors: they become an `Invalid data format.` report line instead.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  serde_json / quick-xml ──► Json / XmlDecode / XmlEncode               │
//! │  OrderType / DateTime   ──► Core (CoreError)                           │
//! │  SQLite                 ──► Db (DbError)                               │
//! │  missing employee       ──► EmployeeNotFound (export only)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::config::ConfigError;
use fastfood_core::CoreError;
use fastfood_db::DbError;

/// Fatal import/export errors.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// JSON payload could not be parsed (or a report could not be written).
    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    /// XML payload could not be parsed.
    #[error("Malformed XML payload: {0}")]
    XmlDecode(#[from] quick_xml::de::DeError),

    /// XML report could not be written.
    #[error("XML serialization failed: {0}")]
    XmlEncode(#[from] quick_xml::se::SeError),

    /// Domain failure (unknown order type, unparseable date).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Persistence failure.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// No employee with the requested name.
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for processor operations.
pub type ProcessorResult<T> = Result<T, ProcessorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_are_transparent() {
        let err: ProcessorError = CoreError::UnknownOrderType("Delivery".to_string()).into();
        assert_eq!(err.to_string(), "Unknown order type: 'Delivery'");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: ProcessorError = serde_json::from_str::<Vec<i32>>("[1,").unwrap_err().into();
        assert!(matches!(err, ProcessorError::Json(_)));
    }

    #[test]
    fn test_employee_not_found_message() {
        let err = ProcessorError::EmployeeNotFound("Avery".to_string());
        assert_eq!(err.to_string(), "Employee not found: Avery");
    }
}
