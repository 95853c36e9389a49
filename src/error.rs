use thiserror::Error;

/// The single "generation failed" outcome. Variants only differ in what
/// gets logged; callers treat them all the same way.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("connection error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion server error: HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected completion payload: {0}")]
    Payload(String),
    #[error("completion returned no text")]
    EmptyText,
    #[error("generation task aborted: {0}")]
    Aborted(String),
}
