// モジュール定義
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use domain::entities::{Category, Item, PasswordHasher, ReviewBox, ReviewDate, User};
pub use infrastructure::crypto::DefaultPasswordHasher;
pub use shared::error::{AppError, Result};
