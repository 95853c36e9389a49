pub mod completion;
pub mod config;
pub mod effects;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod prompt;
pub mod session;
pub mod share;
pub mod state;
pub mod types;

pub use crate::config::Config;
pub use crate::error::GenerationError;
pub use crate::generator::{GenerateOutcome, generate};
pub use crate::prompt::build_prompt;
pub use crate::share::build_share_link;
pub use crate::state::AppState;
pub use crate::types::*;
