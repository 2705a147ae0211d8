use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CATEGORY_NAME_REQUIRED;
use crate::shared::error::AppError;
use crate::shared::validation;

/// Named container of items inside a category, bound to a repetition
/// pattern by id. ("Box" alone would shadow `std::boxed::Box`.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewBox {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub pattern_id: String,
    pub name: String,
    pub registered_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl ReviewBox {
    pub fn new(
        id: String,
        user_id: String,
        category_id: String,
        pattern_id: String,
        name: String,
        registered_at: DateTime<Utc>,
        edited_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        validate_name(&name)?;

        Ok(Self {
            id,
            user_id,
            category_id,
            pattern_id,
            name,
            registered_at,
            edited_at,
        })
    }

    /// Replaces pattern and name together.
    ///
    /// The bool reports whether `new_pattern_id` equals the pattern id the
    /// box held *before* the call. It is reported even when the rename
    /// fails, so the caller can always tell whether a pattern change was
    /// attempted; schedules only need recomputing when it is `false` and
    /// the update succeeded.
    pub fn set(
        &mut self,
        new_pattern_id: String,
        new_name: String,
        edited_at: DateTime<Utc>,
    ) -> (bool, Result<(), AppError>) {
        let same_pattern = self.pattern_id == new_pattern_id;

        if let Err(err) = validate_name(&new_name) {
            return (same_pattern, Err(err));
        }

        self.pattern_id = new_pattern_id;
        self.name = new_name;
        self.edited_at = edited_at;

        (same_pattern, Ok(()))
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    validation::required(name, CATEGORY_NAME_REQUIRED)
}
