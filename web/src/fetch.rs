use gloo::net::http::Request;
use kezuri_core as game;
use game::{AcquireError, Outcome};

async fn fetch_outcome(endpoint: &str) -> Result<Outcome, AcquireError> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|err| AcquireError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(AcquireError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| AcquireError::Transport(err.to_string()))?;
    Outcome::from_body(&body)
}

/// Asks `endpoint` for the outcome, settling for a seeded coin flip on any failure.
pub(crate) async fn acquire_outcome(endpoint: &str, fallback_seed: u64) -> Outcome {
    log::debug!("fetching outcome from {}", endpoint);
    game::resolve_outcome(fetch_outcome(endpoint).await, fallback_seed)
}
