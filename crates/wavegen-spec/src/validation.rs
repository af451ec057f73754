//! Parameter validation shared by the generator descriptions and the synth backend.
//!
//! Every check returns a [`CommonValidationError`] whose message names the
//! offending parameter and the value that was rejected.

use std::fmt;

/// Smallest wavetable a Karplus-Strong generator can interpolate over.
pub const MIN_BUFFER_SIZE: usize = 2;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is finite (not NaN or infinite).
///
/// # Example
/// ```
/// use wavegen_spec::validation::validate_finite;
///
/// assert!(validate_finite("fac", 0.5).is_ok());
/// assert!(validate_finite("fac", f64::NAN).is_err());
/// ```
pub fn validate_finite(name: &str, value: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value is positive (> 0).
///
/// # Arguments
/// * `name` - Name of the parameter (for error messages)
/// * `value` - Value to validate
///
/// # Returns
/// * `Ok(())` if value is positive
/// * `Err(CommonValidationError)` if value is <= 0 or not finite
///
/// # Example
/// ```
/// use wavegen_spec::validation::validate_positive;
///
/// assert!(validate_positive("frequency", 440.0).is_ok());
/// assert!(validate_positive("frequency", 0.0).is_err());
/// assert!(validate_positive("frequency", -1.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate that a value lies strictly inside (0, 1).
///
/// Used for the square wave duty cycle, where both endpoints collapse the
/// wave to a constant.
///
/// # Example
/// ```
/// use wavegen_spec::validation::validate_open_unit_interval;
///
/// assert!(validate_open_unit_interval("split", 0.25).is_ok());
/// assert!(validate_open_unit_interval("split", 0.0).is_err());
/// assert!(validate_open_unit_interval("split", 1.0).is_err());
/// ```
pub fn validate_open_unit_interval(name: &str, value: f64) -> Result<(), CommonValidationError> {
    validate_finite(name, value)?;
    if value <= 0.0 || value >= 1.0 {
        return Err(CommonValidationError::new(format!(
            "{} must be in (0, 1), got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate a wavetable length.
///
/// Interpolation reads two neighbouring entries, so a table needs at least
/// [`MIN_BUFFER_SIZE`] slots.
pub fn validate_buffer_size(name: &str, value: usize) -> Result<(), CommonValidationError> {
    if value < MIN_BUFFER_SIZE {
        return Err(CommonValidationError::new(format!(
            "{} must be at least {}, got {}",
            name, MIN_BUFFER_SIZE, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_rejects_non_finite() {
        let err = validate_positive("frequency", f64::INFINITY).unwrap_err();
        assert!(err.message.contains("frequency"));
        assert!(err.message.contains("finite"));

        assert!(validate_positive("frequency", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_positive_message() {
        let err = validate_positive("frequency", -3.0).unwrap_err();
        assert_eq!(err.to_string(), "frequency must be positive, got -3");
    }

    #[test]
    fn test_validate_open_unit_interval_bounds() {
        assert!(validate_open_unit_interval("split", 0.5).is_ok());
        assert!(validate_open_unit_interval("split", 1e-9).is_ok());
        assert!(validate_open_unit_interval("split", 1.0 - 1e-9).is_ok());

        let err = validate_open_unit_interval("split", 1.5).unwrap_err();
        assert!(err.message.contains("(0, 1)"));
    }

    #[test]
    fn test_validate_buffer_size() {
        assert!(validate_buffer_size("buffer_size", 2).is_ok());
        assert!(validate_buffer_size("buffer_size", 256).is_ok());

        let err = validate_buffer_size("buffer_size", 1).unwrap_err();
        assert!(err.message.contains("at least 2"));
        assert!(validate_buffer_size("buffer_size", 0).is_err());
    }
}
