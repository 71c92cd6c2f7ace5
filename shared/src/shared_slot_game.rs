use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::RESOLUTION_ERROR;
use crate::error::SpinError;
use crate::validation::WagerAmount;

/// Authoritative result of one spin, as decided by the game server.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub symbols: Vec<String>,
    pub won: bool,
}

impl SpinOutcome {
    pub fn new<I, S>(symbols: I, won: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            won,
        }
    }
}

/// Account fields echoed by the server. Rendered as received.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct AccountSnapshot {
    pub balance: Value,
    pub level: Value,
}

impl AccountSnapshot {
    pub fn balance_text(&self) -> String {
        display_value(&self.balance)
    }

    pub fn level_text(&self) -> String {
        display_value(&self.level)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Everything a successful `/play` call yields.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub outcome: SpinOutcome,
    pub account: AccountSnapshot,
}

// === API Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayRequest {
    pub amount_bet: f64,
}

impl From<WagerAmount> for PlayRequest {
    fn from(wager: WagerAmount) -> Self {
        Self { amount_bet: wager.value() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayResponse {
    pub result: Vec<String>,
    #[serde(rename = "ganhou", alias = "won")]
    pub won: bool,
    pub balance: Value,
    pub level: Value,
}

impl From<PlayResponse> for Resolution {
    fn from(resp: PlayResponse) -> Self {
        Self {
            outcome: SpinOutcome { symbols: resp.result, won: resp.won },
            account: AccountSnapshot { balance: resp.balance, level: resp.level },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Decodes the body of a `/play` response.
///
/// Non-success statuses surface the server's `error` text when it has one.
/// A success status with a body that is not a complete result, or that
/// carries an `error`, is treated as a failure as well.
pub fn parse_play_response(status: u16, body: &str) -> Result<Resolution, SpinError> {
    let server_error = || {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.error)
            .filter(|e| !e.trim().is_empty())
    };

    if !(200..300).contains(&status) {
        log::warn!("/play answered with status {}", status);
        return Err(SpinError::resolution(
            server_error().unwrap_or_else(|| RESOLUTION_ERROR.to_string()),
        ));
    }

    if let Some(message) = server_error() {
        return Err(SpinError::resolution(message));
    }

    match serde_json::from_str::<PlayResponse>(body) {
        Ok(resp) => Ok(resp.into()),
        Err(e) => {
            log::error!("Malformed /play response: {}", e);
            Err(SpinError::resolution(RESOLUTION_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_bet;

    #[test]
    fn test_request_body_shape() {
        let wager = validate_bet(1.5, 0.24).unwrap();
        let body = serde_json::to_string(&PlayRequest::from(wager)).unwrap();
        assert_eq!(body, r#"{"amount_bet":1.5}"#);
    }

    #[test]
    fn test_success_response() {
        let body = r#"{"result":["🔥","💣","🤡"],"ganhou":false,"balance":98.5,"level":1}"#;
        let resolution = parse_play_response(200, body).unwrap();
        assert_eq!(resolution.outcome, SpinOutcome::new(["🔥", "💣", "🤡"], false));
        assert_eq!(resolution.account.balance_text(), "98.5");
        assert_eq!(resolution.account.level_text(), "1");
    }

    #[test]
    fn test_won_alias() {
        let body = r#"{"result":["🤑","🤑","🤑"],"won":true,"balance":"120","level":2}"#;
        let resolution = parse_play_response(200, body).unwrap();
        assert!(resolution.outcome.won);
        assert_eq!(resolution.account.balance_text(), "120");
    }

    #[test]
    fn test_error_status_uses_server_message() {
        let err = parse_play_response(400, r#"{"error":"Aposta inválida."}"#).unwrap_err();
        assert_eq!(err, SpinError::resolution("Aposta inválida."));
    }

    #[test]
    fn test_error_status_without_message_is_generic() {
        let err = parse_play_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, SpinError::resolution(RESOLUTION_ERROR));
    }

    #[test]
    fn test_malformed_success_body() {
        let err = parse_play_response(200, r#"{"result":"nope"}"#).unwrap_err();
        assert_eq!(err, SpinError::resolution(RESOLUTION_ERROR));
    }

    #[test]
    fn test_success_status_with_error_field() {
        let err = parse_play_response(200, r#"{"error":"Saldo insuficiente"}"#).unwrap_err();
        assert_eq!(err, SpinError::resolution("Saldo insuficiente"));
    }
}
