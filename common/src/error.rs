//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid template record: {0}")]
    InvalidRecord(String),

    #[error("Unknown field type: {0} (use date, phone, email or text)")]
    UnknownFieldType(String),

    #[error("Store error: {0}")]
    Store(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_invalid_record() {
        let error = Error::InvalidRecord("missing name".to_string());
        assert_eq!(format!("{}", error), "Invalid template record: missing name");
    }

    #[test]
    fn test_error_display_unknown_field_type() {
        let error = Error::UnknownFieldType("number".to_string());
        let display = format!("{}", error);
        assert!(display.starts_with("Unknown field type: number"));
    }

    #[test]
    fn test_error_display_store() {
        let error = Error::Store("root is not an object".to_string());
        assert_eq!(format!("{}", error), "Store error: root is not an object");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
