use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use validator::ValidationError;

use crate::constants::INVALID_BET_ERROR;

/// A stake that passed [`validate_bet`]. Only constructible through validation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct WagerAmount(f64);

impl WagerAmount {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for WagerAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads the bet input field. Anything that is not a number becomes NaN so
/// that [`validate_bet`] rejects it.
pub fn parse_bet(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(f64::NAN)
}

pub fn validate_bet(amount: f64, minimum: f64) -> Result<WagerAmount, ValidationError> {
    let code = if amount.is_nan() {
        "bet_not_a_number"
    } else if amount <= 0.0 {
        "bet_not_positive"
    } else if amount <= minimum {
        "bet_below_minimum"
    } else if amount.is_infinite() {
        "bet_not_finite"
    } else {
        return Ok(WagerAmount(amount));
    };

    let mut err = ValidationError::new(code);
    err.message = Some(Cow::from(INVALID_BET_ERROR));
    err.add_param(Cow::from("min"), &minimum);
    if amount.is_finite() {
        err.add_param(Cow::from("value"), &amount);
    }
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MIN_BET;

    #[test]
    fn test_rejects_not_a_number() {
        let err = validate_bet(parse_bet("abc"), MIN_BET).unwrap_err();
        assert_eq!(err.code, "bet_not_a_number");
        let err = validate_bet(parse_bet(""), MIN_BET).unwrap_err();
        assert_eq!(err.code, "bet_not_a_number");
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(validate_bet(0.0, MIN_BET).unwrap_err().code, "bet_not_positive");
        assert_eq!(validate_bet(-3.0, MIN_BET).unwrap_err().code, "bet_not_positive");
    }

    #[test]
    fn test_minimum_boundary() {
        assert_eq!(validate_bet(0.10, MIN_BET).unwrap_err().code, "bet_below_minimum");
        assert_eq!(validate_bet(0.24, MIN_BET).unwrap_err().code, "bet_below_minimum");
        assert_eq!(validate_bet(0.2401, MIN_BET).unwrap().value(), 0.2401);
        assert_eq!(validate_bet(0.25, MIN_BET).unwrap().value(), 0.25);
    }

    #[test]
    fn test_rejects_infinite() {
        assert_eq!(validate_bet(parse_bet("inf"), MIN_BET).unwrap_err().code, "bet_not_finite");
    }

    #[test]
    fn test_parse_bet_trims() {
        assert_eq!(parse_bet(" 1.5 "), 1.5);
        assert!(parse_bet("1,5").is_nan());
    }

    #[test]
    fn test_rejection_carries_message_and_minimum() {
        let err = validate_bet(0.1, MIN_BET).unwrap_err();
        assert_eq!(err.message.as_deref(), Some(INVALID_BET_ERROR));
        assert!(err.params.contains_key("min"));
    }
}
