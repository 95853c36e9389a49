use crate::config::Config;
use crate::error::GenerationError;
use reqwest::Client;
use serde_json::Value;

/// Sends one chat request carrying `prompt` and returns the generated text.
/// No retries.
pub async fn generate_text(
    client: &Client,
    config: &Config,
    prompt: &str,
) -> Result<String, GenerationError> {
    let request_body = serde_json::json!({
        "message": prompt,
        "model": config.model,
        "temperature": config.temperature,
        "max_tokens": config.max_tokens,
    });

    if config.debug {
        log::debug!("\n==== COMPLETION REQUEST ====");
        log::debug!("Endpoint: {}", config.chat_endpoint());
        log::debug!(
            "Request payload: {}",
            serde_json::to_string_pretty(&request_body).unwrap_or_default()
        );
    }

    let mut builder = client.post(config.chat_endpoint()).json(&request_body);
    if let Some(key) = &config.api_key {
        builder = builder.bearer_auth(key);
    }

    let resp = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Failed to reach completion server: {e}");
            return Err(e.into());
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let body = resp
            .text()
            .await
            .unwrap_or_else(|_| "Failed to get error body".into());
        log::error!("Error from completion server: Status {status}, Body: {body}");
        return Err(GenerationError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let is_json = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("json"));
    let body = resp.text().await?;

    let text = if is_json {
        let json: Value = serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse JSON response: {e}");
            GenerationError::Payload(e.to_string())
        })?;
        extract_text(&json).ok_or_else(|| {
            log::warn!("No text field in response: {json:?}");
            GenerationError::Payload("missing text field".into())
        })?
    } else {
        body
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(GenerationError::EmptyText);
    }

    log::info!(
        "Got post ({} chars): \"{}...\"",
        text.chars().count(),
        text.chars().take(50).collect::<String>()
    );

    Ok(text)
}

/// Accepts both the flat `{"text": ...}` shape and the
/// `{"message": {"content": [{"text": ...}]}}` shape.
pub fn extract_text(json: &Value) -> Option<String> {
    if let Some(text) = json.get("text").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    json.pointer("/message/content")
        .and_then(Value::as_array)?
        .iter()
        .find_map(|item| item.get("text").and_then(Value::as_str))
        .map(str::to_string)
}
