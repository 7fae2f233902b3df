//! Field-level validation for submission payloads. Fails fast on the first
//! violation with a message the frontend can show as-is.

use crate::error::AppError;

pub const MIN_PASSENGERS: i32 = 1;
pub const MAX_PASSENGERS: i32 = 20;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

pub fn require_non_empty(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(())
}

pub fn validate_passengers(count: i32) -> Result<(), AppError> {
    if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&count) {
        return Err(AppError::BadRequest(format!(
            "Number of passengers must be between {} and {}",
            MIN_PASSENGERS, MAX_PASSENGERS
        )));
    }
    Ok(())
}

pub fn validate_phone_number(value: &str) -> Result<(), AppError> {
    if value.len() != 10 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::BadRequest(
            "Please enter a valid 10-digit phone number".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_rating(value: i32) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(AppError::BadRequest(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passenger_count_boundaries() {
        assert!(validate_passengers(0).is_err());
        assert!(validate_passengers(1).is_ok());
        assert!(validate_passengers(20).is_ok());
        assert!(validate_passengers(21).is_err());
    }

    #[test]
    fn phone_number_must_be_exactly_ten_digits() {
        assert!(validate_phone_number("123456789").is_err());
        assert!(validate_phone_number("1234567890").is_ok());
        assert!(validate_phone_number("12345678901").is_err());
        assert!(validate_phone_number("12345abcde").is_err());
        assert!(validate_phone_number("+911234567").is_err());
    }

    #[test]
    fn rating_boundaries() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(require_non_empty("", "Pickup location is required").is_err());
        assert!(require_non_empty("   ", "Pickup location is required").is_err());
        assert!(require_non_empty("Dehradun", "Pickup location is required").is_ok());
    }
}
