use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;
use crate::shared::validation;

// Steps are stored in a smallint column downstream.
const MAX_STEP_NUMBER: i32 = 32767;

const SCHEDULED_DATE_REQUIRED: &str = "scheduled date is required";

/// One scheduled review occurrence of an item at a given repetition step.
///
/// Created-once record: there is no validated mutation surface. The
/// collaborator that marks reviews done flips `is_completed` directly,
/// and rescheduling replaces the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDate {
    pub review_date_id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    pub box_id: Option<String>,
    pub item_id: String,
    pub step_number: i32,
    pub initial_scheduled_date: DateTime<Utc>,
    pub scheduled_date: DateTime<Utc>,
    pub is_completed: bool,
}

impl ReviewDate {
    /// `initial_scheduled_date` is caller-supplied history and stored as
    /// given; only `scheduled_date` is checked.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        review_date_id: String,
        user_id: String,
        category_id: Option<String>,
        box_id: Option<String>,
        item_id: String,
        step_number: i32,
        initial_scheduled_date: DateTime<Utc>,
        scheduled_date: Option<DateTime<Utc>>,
        is_completed: bool,
    ) -> Result<Self, AppError> {
        validate_step_number(step_number)?;
        let scheduled_date = validation::required_date(scheduled_date, SCHEDULED_DATE_REQUIRED)?;

        Ok(Self {
            review_date_id,
            user_id,
            category_id,
            box_id,
            item_id,
            step_number,
            initial_scheduled_date,
            scheduled_date,
            is_completed,
        })
    }
}

// The three step-number failures stay distinct; several int fields live
// on this entity, so every message names the field.
fn validate_step_number(step_number: i32) -> Result<(), AppError> {
    if step_number == 0 {
        return Err(AppError::validation("step number is required"));
    }
    if step_number < 0 {
        return Err(AppError::validation("step number has an invalid value"));
    }
    if step_number > MAX_STEP_NUMBER {
        return Err(AppError::validation(format!(
            "too many steps (max {MAX_STEP_NUMBER})"
        )));
    }
    Ok(())
}
