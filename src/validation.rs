//! Client-side checks for the profile form an expert sends to a runner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NICKNAME_MAX: usize = 20;

/// Raw field values as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileFormInput {
    pub nickname: String,
    pub age: String,
    pub height_cm: String,
    pub weight_kg: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub nickname: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Nickname is required")]
    NicknameMissing,
    #[error("Nickname must be at most 20 characters")]
    NicknameTooLong,
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: f64, max: f64 },
}

pub fn validate_profile(input: &ProfileFormInput) -> Result<ProfileSubmission, FormError> {
    let nickname = input.nickname.trim();
    if nickname.is_empty() {
        return Err(FormError::NicknameMissing);
    }
    if nickname.chars().count() > NICKNAME_MAX {
        return Err(FormError::NicknameTooLong);
    }
    let age = number("Age", &input.age, 10.0, 100.0)?;
    if age.fract() != 0.0 {
        return Err(FormError::NotANumber { field: "Age" });
    }
    let height_cm = number("Height", &input.height_cm, 100.0, 250.0)?;
    let weight_kg = number("Weight", &input.weight_kg, 30.0, 250.0)?;
    Ok(ProfileSubmission { nickname: nickname.to_string(), age: age as u32, height_cm, weight_kg })
}

fn number(field: &'static str, raw: &str, min: f64, max: f64) -> Result<f64, FormError> {
    let v: f64 = raw.trim().parse().map_err(|_| FormError::NotANumber { field })?;
    if !v.is_finite() {
        return Err(FormError::NotANumber { field });
    }
    if v < min || v > max {
        return Err(FormError::OutOfRange { field, min, max });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(nickname: &str, age: &str, height: &str, weight: &str) -> ProfileFormInput {
        ProfileFormInput {
            nickname: nickname.into(),
            age: age.into(),
            height_cm: height.into(),
            weight_kg: weight.into(),
        }
    }

    #[test]
    fn test_valid_profile() {
        let sub = validate_profile(&input("  Mina ", "31", "168.5", "57")).unwrap();
        assert_eq!(sub.nickname, "Mina");
        assert_eq!(sub.age, 31);
        assert_eq!(sub.height_cm, 168.5);
        assert_eq!(sub.weight_kg, 57.0);
    }

    #[test]
    fn test_nickname_rules() {
        assert_eq!(validate_profile(&input("   ", "31", "170", "60")), Err(FormError::NicknameMissing));
        let long = "x".repeat(NICKNAME_MAX + 1);
        assert_eq!(validate_profile(&input(&long, "31", "170", "60")), Err(FormError::NicknameTooLong));
    }

    #[test]
    fn test_numbers_checked() {
        assert_eq!(
            validate_profile(&input("a", "abc", "170", "60")),
            Err(FormError::NotANumber { field: "Age" })
        );
        assert_eq!(
            validate_profile(&input("a", "30.5", "170", "60")),
            Err(FormError::NotANumber { field: "Age" })
        );
        assert!(matches!(
            validate_profile(&input("a", "30", "300", "60")),
            Err(FormError::OutOfRange { field: "Height", .. })
        ));
        assert!(matches!(
            validate_profile(&input("a", "30", "170", "NaN")),
            Err(FormError::NotANumber { field: "Weight" })
        ));
    }

    #[test]
    fn test_error_messages_are_readable() {
        let err = FormError::OutOfRange { field: "Age", min: 10.0, max: 100.0 };
        assert_eq!(err.to_string(), "Age must be between 10 and 100");
    }
}
