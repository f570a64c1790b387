//! Error types and exit codes for shoprec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or empty catalog, unavailable interaction store)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - catalog or store problem (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for ShoprecError {
    fn from(err: rusqlite::Error) -> Self {
        ShoprecError::StoreUnavailable {
            operation: "access interaction store".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur during shoprec operations
#[derive(Error, Debug)]
pub enum ShoprecError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("catalog is empty: no recommendations can be served")]
    EmptyCatalog,

    #[error("catalog unavailable at {path:?}: {reason}")]
    CatalogUnavailable { path: PathBuf, reason: String },

    #[error("invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("duplicate product id in catalog: {id}")]
    DuplicateProductId { id: i64 },

    #[error("product not found: {id}")]
    ProductNotFound { id: i64 },

    #[error("interaction store unavailable: failed to {operation}: {reason}")]
    StoreUnavailable { operation: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl ShoprecError {
    /// Create an error for a failed interaction store operation
    pub fn store_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        ShoprecError::StoreUnavailable {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a catalog resource that cannot be read
    pub fn catalog_unavailable(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        ShoprecError::CatalogUnavailable {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        ShoprecError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a generic failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        ShoprecError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Whether this error means the interaction store could not be reached
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, ShoprecError::StoreUnavailable { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ShoprecError::UsageError(_)
            | ShoprecError::InvalidValue { .. } => ExitCode::Usage,

            ShoprecError::EmptyCatalog
            | ShoprecError::CatalogUnavailable { .. }
            | ShoprecError::InvalidCatalog { .. }
            | ShoprecError::DuplicateProductId { .. }
            | ShoprecError::ProductNotFound { .. }
            | ShoprecError::StoreUnavailable { .. } => ExitCode::Data,

            ShoprecError::Io(_)
            | ShoprecError::Json(_)
            | ShoprecError::Toml(_)
            | ShoprecError::FailedOperation { .. }
            | ShoprecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            ShoprecError::UsageError(_) => "usage_error",
            ShoprecError::InvalidValue { .. } => "invalid_value",
            ShoprecError::EmptyCatalog => "empty_catalog",
            ShoprecError::CatalogUnavailable { .. } => "catalog_unavailable",
            ShoprecError::InvalidCatalog { .. } => "invalid_catalog",
            ShoprecError::DuplicateProductId { .. } => "duplicate_product_id",
            ShoprecError::ProductNotFound { .. } => "product_not_found",
            ShoprecError::StoreUnavailable { .. } => "store_unavailable",
            ShoprecError::Io(_) => "io_error",
            ShoprecError::Json(_) => "json_error",
            ShoprecError::Toml(_) => "toml_error",
            ShoprecError::FailedOperation { .. } => "failed_operation",
            ShoprecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for shoprec operations
pub type Result<T> = std::result::Result<T, ShoprecError>;
