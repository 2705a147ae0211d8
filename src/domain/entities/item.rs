use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::validation;

const ITEM_NAME_REQUIRED: &str = "item name is required";
const LEARNED_DATE_REQUIRED: &str = "learned date is required";

/// The unit of memorization. Category, box and pattern are optional
/// associations: `None` means unassigned, never invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    pub box_id: Option<String>,
    pub pattern_id: Option<String>,
    pub name: String,
    pub detail: String,
    pub learned_date: DateTime<Utc>,
    pub is_finished: bool,
    pub registered_at: DateTime<Utc>,
    pub edited_at: DateTime<Utc>,
}

impl Item {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        item_id: String,
        user_id: String,
        category_id: Option<String>,
        box_id: Option<String>,
        pattern_id: Option<String>,
        name: String,
        detail: String,
        learned_date: Option<DateTime<Utc>>,
        is_finished: bool,
        registered_at: DateTime<Utc>,
        edited_at: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        validate_name(&name)?;
        let learned_date = validation::required_date(learned_date, LEARNED_DATE_REQUIRED)?;

        Ok(Self {
            item_id,
            user_id,
            category_id,
            box_id,
            pattern_id,
            name,
            detail,
            learned_date,
            is_finished,
            registered_at,
            edited_at,
        })
    }

    /// Replaces every listed field at once; passing `None` for an
    /// association clears it. Nothing is assigned until both checks pass.
    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        category_id: Option<String>,
        box_id: Option<String>,
        pattern_id: Option<String>,
        name: String,
        detail: String,
        learned_date: Option<DateTime<Utc>>,
        edited_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        validate_name(&name)?;
        let learned_date = validation::required_date(learned_date, LEARNED_DATE_REQUIRED)?;

        self.category_id = category_id;
        self.box_id = box_id;
        self.pattern_id = pattern_id;
        self.name = name;
        self.detail = detail;
        self.learned_date = learned_date;
        self.edited_at = edited_at;

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    validation::required(name, ITEM_NAME_REQUIRED)
}
