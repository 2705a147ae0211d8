use chrono::{DateTime, Utc};

use crate::shared::error::AppError;

/// Reusable field rules shared by every entity.
///
/// A field chains the rules it needs with `?`, in declared order; the
/// first failing rule wins and its message is returned untouched. There
/// is no aggregation of multiple violations.
///
/// Lengths are counted in `chars()`, not bytes.
pub fn required(value: &str, message: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::validation(message));
    }
    Ok(())
}

pub fn min_chars(value: &str, min: usize, message: &str) -> Result<(), AppError> {
    if value.chars().count() < min {
        return Err(AppError::validation(message));
    }
    Ok(())
}

pub fn max_chars(value: &str, max: usize, message: &str) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::validation(message));
    }
    Ok(())
}

pub fn chars_between(value: &str, min: usize, max: usize, message: &str) -> Result<(), AppError> {
    let count = value.chars().count();
    if count < min || count > max {
        return Err(AppError::validation(message));
    }
    Ok(())
}

/// Membership in a fixed allow-list. A miss is a different failure (and
/// message) than an empty value.
pub fn one_of(value: &str, allowed: &[&str], message: &str) -> Result<(), AppError> {
    if !allowed.contains(&value) {
        return Err(AppError::validation(message));
    }
    Ok(())
}

pub fn email_format(value: &str, message: &str) -> Result<(), AppError> {
    if !is_email_shaped(value) {
        return Err(AppError::validation(message));
    }
    Ok(())
}

/// A required date: `None` means the caller never supplied one.
pub fn required_date(
    value: Option<DateTime<Utc>>,
    message: &str,
) -> Result<DateTime<Utc>, AppError> {
    value.ok_or_else(|| AppError::validation(message))
}

// Structural check only: one '@', non-empty local part, dotted domain,
// no whitespace. Deliverability is the mail layer's problem.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
