use crate::effects::{Effect, success_effects};
use crate::prompt::{persona, tone_label};
use crate::share::build_share_link;
use crate::types::{GeneratedPost, GenerationRequest, PostCard, RequestStatus, SessionView};
use std::collections::VecDeque;

/// Identifies one `generate` call. Only the most recently issued ticket may
/// write to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Stale,
}

/// The view-model behind the form: current field values, request status,
/// the single post slot and the pending effects.
#[derive(Debug, Default)]
pub struct Session {
    request: GenerationRequest,
    status: RequestStatus,
    post: Option<GeneratedPost>,
    latest: u64,
    effects: VecDeque<Effect>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn post(&self) -> Option<&GeneratedPost> {
        self.post.as_ref()
    }

    /// Effects still queued from an earlier post are dropped.
    pub fn begin(&mut self, request: GenerationRequest) -> Ticket {
        self.latest += 1;
        self.effects.clear();
        self.request = request;
        self.status = RequestStatus::InFlight;
        Ticket(self.latest)
    }

    pub fn succeed(&mut self, ticket: Ticket, post: GeneratedPost) -> Outcome {
        if !self.is_current(ticket) {
            return Outcome::Stale;
        }
        self.post = Some(post);
        self.status = RequestStatus::Succeeded;
        self.effects.extend(success_effects(self.request.include_emojis));
        Outcome::Applied
    }

    /// Leaves the post slot untouched.
    pub fn fail(&mut self, ticket: Ticket) -> Outcome {
        if !self.is_current(ticket) {
            return Outcome::Stale;
        }
        self.status = RequestStatus::Failed;
        Outcome::Applied
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain(..).collect()
    }

    pub fn card(&self) -> Option<PostCard> {
        self.post.as_ref().map(|post| PostCard {
            post: post.clone(),
            author: persona(self.request.formality_level),
            share_url: build_share_link(&post.text),
        })
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            request: self.request.clone(),
            tone: tone_label(self.request.formality_level),
            status: self.status,
            card: self.card(),
        }
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
