//! Error types for the synthesis backend.

use thiserror::Error;
use wavegen_spec::{CommonValidationError, SpecError};

/// Result type for synthesis operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors reported at generator construction or frame query.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Frequency is not positive and finite.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Wavetable too small to interpolate over.
    #[error("invalid buffer size: {size} (need at least 2 entries)")]
    InvalidBufferSize {
        /// The invalid size.
        size: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// A negative frame index was requested.
    #[error("frame {frame} is negative")]
    NegativeFrame {
        /// The requested index.
        frame: i64,
    },

    /// A frame past the end of a finite signal was requested.
    #[error("frame {frame} is past the end of a {length}-frame signal")]
    FrameOutOfRange {
        /// The requested index.
        frame: u64,
        /// Length of the signal in frames.
        length: u64,
    },

    /// A generator description failed validation.
    #[error("invalid configuration: {0}")]
    Validation(#[from] CommonValidationError),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable short code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidFrequency { .. } => "WAVE_001",
            AudioError::InvalidBufferSize { .. } => "WAVE_002",
            AudioError::InvalidParameter { .. } => "WAVE_003",
            AudioError::NegativeFrame { .. } => "WAVE_004",
            AudioError::FrameOutOfRange { .. } => "WAVE_005",
            AudioError::Validation(_) => "WAVE_006",
        }
    }

    /// True for errors raised while constructing a generator.
    pub fn is_configuration(&self) -> bool {
        !matches!(
            self,
            AudioError::NegativeFrame { .. } | AudioError::FrameOutOfRange { .. }
        )
    }
}

impl From<SpecError> for AudioError {
    fn from(err: SpecError) -> Self {
        match err {
            SpecError::Invalid(inner) => AudioError::Validation(inner),
            SpecError::JsonParse(inner) => AudioError::invalid_param("json", inner.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("fac", "must be positive");
        assert!(err.to_string().contains("fac"));
        assert!(err.to_string().contains("must be positive"));
        assert_eq!(err.code(), "WAVE_003");
    }

    #[test]
    fn test_query_errors_are_not_configuration() {
        assert!(!AudioError::NegativeFrame { frame: -1 }.is_configuration());
        assert!(!AudioError::FrameOutOfRange {
            frame: 10,
            length: 10
        }
        .is_configuration());
        assert!(AudioError::InvalidBufferSize { size: 1 }.is_configuration());
    }

    #[test]
    fn test_validation_conversion() {
        let err: AudioError = CommonValidationError::new("split must be in (0, 1), got 2").into();
        assert_eq!(err.code(), "WAVE_006");
        assert!(err.to_string().contains("split"));
    }
}
