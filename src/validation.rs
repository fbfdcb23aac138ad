//! Request validation for plant payloads.

use crate::error::AppError;
use crate::model::NewPlant;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_WATERING_SCHEDULE_LENGTH: usize = 200;

/// Uniqueness and lookup key for a plant name: trimmed and lower-cased.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

pub struct PlantValidator;

impl PlantValidator {
    /// Trim every field, then require each to be non-empty and within its length limit.
    /// Returns the normalized payload that the store persists.
    pub fn validate(body: NewPlant) -> Result<NewPlant, AppError> {
        let name = validate_field("name", &body.name, MAX_NAME_LENGTH)?;
        let description = validate_field("description", &body.description, MAX_DESCRIPTION_LENGTH)?;
        let watering_schedule = validate_field(
            "watering_schedule",
            &body.watering_schedule,
            MAX_WATERING_SCHEDULE_LENGTH,
        )?;
        Ok(NewPlant {
            name,
            description,
            watering_schedule,
        })
    }
}

fn validate_field(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if trimmed.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_all_fields() {
        let out = PlantValidator::validate(NewPlant::new("  Fern ", " shade-loving", "Twice a week  "))
            .expect("valid payload");
        assert_eq!(out, NewPlant::new("Fern", "shade-loving", "Twice a week"));
    }

    #[test]
    fn rejects_blank_fields() {
        for body in [
            NewPlant::new("", "d", "w"),
            NewPlant::new("n", "   ", "w"),
            NewPlant::new("n", "d", "\t"),
        ] {
            let err = PlantValidator::validate(body).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref m) if m.ends_with("is required")), "{err}");
        }
    }

    #[test]
    fn rejects_overlong_name() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        let err = PlantValidator::validate(NewPlant::new(long, "d", "w")).unwrap_err();
        assert!(err.to_string().contains("name must be at most 100 characters"));
    }

    #[test]
    fn length_limit_counts_characters_not_bytes() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(PlantValidator::validate(NewPlant::new(name, "d", "w")).is_ok());
    }

    #[test]
    fn name_key_ignores_case_and_padding() {
        assert_eq!(name_key("  Aloe Vera "), "aloe vera");
        assert_eq!(name_key("FERN"), name_key("fern"));
    }
}
