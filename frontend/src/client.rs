use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use shared::constants::NETWORK_ERROR;
use shared::shared_slot_game::{parse_play_response, PlayRequest};
use shared::validation::WagerAmount;
use shared::{OutcomeResolver, Resolution, SpinError};

use crate::config::get_play_url;

/// Resolves spins against the game server's `/play` endpoint.
#[derive(Clone, Default)]
pub struct HttpOutcomeClient {
    play_url: Option<String>,
}

impl HttpOutcomeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(play_url: impl Into<String>) -> Self {
        Self { play_url: Some(play_url.into()) }
    }

    async fn play(&self, wager: WagerAmount) -> Result<Resolution, SpinError> {
        let url = self.play_url.clone().unwrap_or_else(get_play_url);

        let request = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(&PlayRequest::from(wager))
            .map_err(|e| {
                log::error!("Failed to build /play request: {:?}", e);
                SpinError::resolution(NETWORK_ERROR)
            })?;

        let response = request.send().await.map_err(|e| {
            log::error!("Network error: {:?}", e);
            SpinError::resolution(NETWORK_ERROR)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("Error reading /play response: {:?}", e);
            SpinError::resolution(NETWORK_ERROR)
        })?;

        parse_play_response(status, &body)
    }
}

impl OutcomeResolver for HttpOutcomeClient {
    fn resolve(&self, wager: WagerAmount) -> LocalBoxFuture<'_, Result<Resolution, SpinError>> {
        self.play(wager).boxed_local()
    }
}
