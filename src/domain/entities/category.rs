use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::validation;

// ReviewBox shares this message on purpose: both containers speak the
// same validation vocabulary.
pub(crate) const CATEGORY_NAME_REQUIRED: &str = "category name is required";

/// Named grouping of boxes and items, owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub registered_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        id: String,
        user_id: String,
        name: String,
        registered_at: DateTime<Utc>,
        edited_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        validate_name(&name)?;

        Ok(Self {
            id,
            user_id,
            name,
            registered_at,
            edited_at,
        })
    }

    /// Renames the category. `registered_at` never changes after creation.
    pub fn set(&mut self, name: String, edited_at: DateTime<Utc>) -> Result<(), AppError> {
        validate_name(&name)?;

        self.name = name;
        self.edited_at = edited_at;

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    // 生の値で判定する（トリムしない）
    validation::required(name, CATEGORY_NAME_REQUIRED)
}
