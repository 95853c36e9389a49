use crate::types::{GenerationRequest, Persona};
use rand::Rng;
use rand::seq::IndexedRandom;

pub const BRAINROT_KEYWORDS: &[&str] = &[
    "skibidi",
    "rizz",
    "gyatt",
    "sigma",
    "fanum tax",
    "ohio",
    "mewing",
    "aura",
];

/// Draws the decorative keyword uniformly from [`BRAINROT_KEYWORDS`].
pub fn pick_keyword<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    BRAINROT_KEYWORDS.choose(rng).copied().unwrap_or("sigma")
}

/// The description is inserted verbatim, without escaping.
pub fn build_prompt(request: &GenerationRequest, keyword: &str) -> String {
    format!(
        "Generate a LinkedIn post based on the following description: {description}.\n\
         Include emojis: {emojis}.\n\
         Formality level: {formality}.\n\
         Keep the post around {length} words long. Ensure the post is as close to {length} words as possible.\n\
         Work the word \"{keyword}\" into the post.\n",
        description = request.description,
        emojis = request.include_emojis,
        formality = request.formality_level,
        length = request.post_length,
        keyword = keyword,
    )
}

pub fn tone_label(formality_level: u32) -> &'static str {
    match formality_level {
        0..=25 => "Maximum Brainrot",
        26..=50 => "Casual Vibes",
        51..=75 => "Semi-Professional",
        _ => "LinkedIn Professional",
    }
}

pub fn persona(formality_level: u32) -> Persona {
    let title = match formality_level {
        76.. => "Strategic Innovation Leader",
        51..=75 => "Digital Transformation Specialist",
        26..=50 => "Chief Rizz Officer",
        _ => "Professional Skibidi Consultant",
    };

    if formality_level > 50 {
        Persona {
            title,
            headline: "Web3 Innovation Strategist | Thought Leader",
            like_label: "Like",
            comment_label: "Comment",
            share_label: "Share",
        }
    } else {
        Persona {
            title,
            headline: "Professional Gyatt Consultant | Sigma Grindset Coach",
            like_label: "Be Based",
            comment_label: "Drop W",
            share_label: "Show Rizz",
        }
    }
}
