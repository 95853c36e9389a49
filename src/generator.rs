use crate::completion::generate_text;
use crate::config::Config;
use crate::error::GenerationError;
use crate::prompt::{build_prompt, pick_keyword};
use crate::session::{Outcome, Session, Ticket};
use crate::state::AppState;
use crate::types::{GeneratedPost, GenerationRequest, PostCard};
use chrono::Utc;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug)]
pub enum GenerateOutcome {
    Succeeded(PostCard),
    Failed(GenerationError),
    /// A newer call was issued while this one was in flight.
    Superseded,
}

/// Runs one generation. The outbound call and the final status transition
/// happen on a spawned task, so a dropped caller never leaves the session
/// `InFlight`.
pub async fn generate(state: &AppState, request: GenerationRequest) -> GenerateOutcome {
    let request = request.normalized();
    let keyword = pick_keyword(&mut rand::rng());
    let prompt = build_prompt(&request, keyword);
    let request_id = Uuid::new_v4().to_string();

    let ticket = state.session.lock().await.begin(request);

    log::info!("Generating post {request_id} (keyword: {keyword})");
    if state.config.debug {
        log::debug!("Prompt:\n{prompt}");
    }

    let task = tokio::spawn(complete(
        state.client.clone(),
        state.config.clone(),
        Arc::clone(&state.session),
        ticket,
        prompt,
        keyword,
        request_id.clone(),
    ));

    match task.await {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("Generation task for post {request_id} aborted: {err}");
            match state.session.lock().await.fail(ticket) {
                Outcome::Applied => {
                    GenerateOutcome::Failed(GenerationError::Aborted(err.to_string()))
                }
                Outcome::Stale => GenerateOutcome::Superseded,
            }
        }
    }
}

async fn complete(
    client: Client,
    config: Config,
    session: Arc<Mutex<Session>>,
    ticket: Ticket,
    prompt: String,
    keyword: &'static str,
    request_id: String,
) -> GenerateOutcome {
    // The session lock is not held across the outbound call.
    let result = generate_text(&client, &config, &prompt).await;

    let mut session = session.lock().await;
    match result {
        Ok(text) => {
            let post = GeneratedPost {
                request_id: request_id.clone(),
                text,
                keyword: keyword.to_string(),
                generated_at: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            };
            match session.succeed(ticket, post) {
                Outcome::Applied => session
                    .card()
                    .map_or(GenerateOutcome::Superseded, GenerateOutcome::Succeeded),
                Outcome::Stale => {
                    log::warn!("Discarding post {request_id}: superseded by a newer request");
                    GenerateOutcome::Superseded
                }
            }
        }
        Err(err) => {
            log::error!("Error generating post {request_id}: {err}");
            match session.fail(ticket) {
                Outcome::Applied => GenerateOutcome::Failed(err),
                Outcome::Stale => GenerateOutcome::Superseded,
            }
        }
    }
}
