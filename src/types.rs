use serde::{Deserialize, Serialize};

pub const MIN_POST_LENGTH: u32 = 10;
pub const MAX_POST_LENGTH: u32 = 500;
pub const POST_LENGTH_STEP: u32 = 10;
pub const MAX_FORMALITY: u32 = 100;
pub const FORMALITY_STEP: u32 = 25;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GenerationRequest {
    pub description: String,
    pub post_length: u32,
    pub formality_level: u32,
    pub include_emojis: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            description: String::new(),
            post_length: 50,
            formality_level: 50,
            include_emojis: true,
        }
    }
}

impl GenerationRequest {
    /// Snaps the numeric fields onto the values the form sliders can produce.
    pub fn normalized(mut self) -> Self {
        let length = self.post_length.clamp(MIN_POST_LENGTH, MAX_POST_LENGTH);
        self.post_length = snap(length, POST_LENGTH_STEP).max(MIN_POST_LENGTH);

        let formality = self.formality_level.min(MAX_FORMALITY);
        self.formality_level = snap(formality, FORMALITY_STEP);
        self
    }
}

fn snap(value: u32, step: u32) -> u32 {
    ((value + step / 2) / step) * step
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct GeneratedPost {
    pub request_id: String,
    pub text: String,
    pub keyword: String,
    pub generated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Persona {
    pub title: &'static str,
    pub headline: &'static str,
    pub like_label: &'static str,
    pub comment_label: &'static str,
    pub share_label: &'static str,
}

#[derive(Debug, Serialize, Clone)]
pub struct PostCard {
    pub post: GeneratedPost,
    pub author: Persona,
    pub share_url: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct SessionView {
    pub request: GenerationRequest,
    pub tone: &'static str,
    pub status: RequestStatus,
    pub card: Option<PostCard>,
}

#[derive(Debug, Serialize, Clone)]
pub struct GenerateResponse {
    pub status: RequestStatus,
    pub card: PostCard,
}

#[derive(Debug, Serialize, Clone)]
pub struct ShareResponse {
    pub url: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ShareQuery {
    pub open: bool,
}
