use thiserror::Error;

/// Crate-wide error type.
///
/// `Validation` and `Authentication` are the two kinds domain operations
/// raise themselves; both display the bare rule message because callers
/// and tests compare the text verbatim. The remaining variants carry
/// whatever the persistence collaborator reports and are only propagated.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// 入力がドメインルールに違反した場合
    #[error("{0}")]
    Validation(String),
    /// 資格情報が一致しない場合
    #[error("{0}")]
    Authentication(String),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        AppError::Authentication(message.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
