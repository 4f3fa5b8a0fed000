use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{DESCRIPTION_MAX_CHARS, HOURS_PER_WEEK_MAX, HOURS_PER_WEEK_MIN};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Category,
    Tier,
    Description,
    HoursPerWeek,
}

/// A single violated rule of the activity form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0:?} is required")]
    Required(FormField),
    #[error("description is {actual} characters, limit is {}", DESCRIPTION_MAX_CHARS)]
    DescriptionTooLong { actual: usize },
    #[error(
        "hours per week must be between {} and {}, got {actual}",
        HOURS_PER_WEEK_MIN,
        HOURS_PER_WEEK_MAX
    )]
    HoursOutOfRange { actual: i32 },
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::DescriptionTooLong { .. } => FormField::Description,
            ValidationError::HoursOutOfRange { .. } => FormField::HoursPerWeek,
        }
    }
}
