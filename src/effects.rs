use serde::Serialize;

pub const CONFETTI_PARTICLES: u32 = 100;
pub const CONFETTI_SPREAD: u32 = 70;
pub const EMOJI_RAIN_COUNT: u32 = 30;
pub const RAIN_EMOJIS: &[&str] = &["🚀", "💯", "🔥", "🤑", "💪", "🧠", "👀", "🗿"];

/// One-shot decoration for the presentation layer to play.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    Confetti { particle_count: u32, spread: u32 },
    EmojiRain { emojis: Vec<String>, count: u32 },
}

pub fn success_effects(include_emojis: bool) -> Vec<Effect> {
    let mut effects = vec![Effect::Confetti {
        particle_count: CONFETTI_PARTICLES,
        spread: CONFETTI_SPREAD,
    }];
    if include_emojis {
        effects.push(Effect::EmojiRain {
            emojis: RAIN_EMOJIS.iter().map(|e| e.to_string()).collect(),
            count: EMOJI_RAIN_COUNT,
        });
    }
    effects
}
