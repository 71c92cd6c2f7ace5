use thiserror::Error;
use validator::ValidationError;

use crate::constants::{INVALID_BET_ERROR, SPIN_IN_PROGRESS_ERROR};

/// Failures of a single spin request. None of them is fatal: after any of
/// these the machine is idle and another spin can be attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpinError {
    /// The wager failed validation; no request was sent.
    #[error("invalid wager: {}", .0.code)]
    InvalidWager(ValidationError),

    /// The resolution service could not be reached or answered with an error.
    #[error("resolution failed: {message}")]
    ResolutionFailure { message: String },

    /// Another spin is still animating.
    #[error("a spin is already in progress")]
    Busy,
}

impl SpinError {
    pub fn resolution(message: impl Into<String>) -> Self {
        Self::ResolutionFailure { message: message.into() }
    }

    /// Text shown to the player for this failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidWager(err) => err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| INVALID_BET_ERROR.to_string()),
            Self::ResolutionFailure { message } => message.clone(),
            Self::Busy => SPIN_IN_PROGRESS_ERROR.to_string(),
        }
    }
}

impl From<ValidationError> for SpinError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidWager(err)
    }
}

/// Audio could not be played. Always logged, never shown to the player.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("audio cue `{0}` is not available")]
    Missing(String),

    #[error("playback of `{cue}` was rejected: {reason}")]
    Rejected { cue: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("slot config is not valid JSON: {0}")]
    Parse(String),

    #[error("`{0}` must not be empty")]
    EmptyAlphabet(&'static str),

    #[error("slot_count must be at least 1")]
    NoSlots,

    #[error("spin_ticks must be at least 1")]
    NoTicks,

    #[error("particle lifetime range {min_ms}..{max_ms}ms is empty")]
    LifetimeRange { min_ms: u64, max_ms: u64 },

    #[error("min_bet must be a non-negative number, got {0}")]
    MinBet(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn invalid_wager_prefers_attached_message() {
        let mut err = ValidationError::new("bet_below_minimum");
        assert_eq!(SpinError::from(err.clone()).user_message(), INVALID_BET_ERROR);

        err.message = Some(Cow::from("Bet more"));
        assert_eq!(SpinError::InvalidWager(err).user_message(), "Bet more");
    }

    #[test]
    fn resolution_failure_shows_service_text() {
        let err = SpinError::resolution("Aposta inválida.");
        assert_eq!(err.user_message(), "Aposta inválida.");
        assert_eq!(err.to_string(), "resolution failed: Aposta inválida.");
    }
}
