//! System prompt construction
//!
//! The advisor instruction seeds every conversation. Deployments can swap it
//! for a file of their own via `ADVISOR_SYSTEM_PROMPT_FILE`.

use std::path::Path;

/// Base system prompt establishing the advisor's role and scope
const ADVISOR_PROMPT: &str = r#"You are "L'Oréal Smart Product & Routine Advisor", a friendly beauty assistant.

- You ONLY answer questions related to L'Oréal products, brands, ingredients, routines, skin concerns, hair concerns, makeup, and fragrance.
- You stay within the L'Oréal family of brands (for example: L'Oréal Paris, Maybelline New York, Garnier, CeraVe, NYX Professional Makeup, etc.).
- If a question is NOT about beauty or L'Oréal, politely refuse and explain that you can only help with L'Oréal beauty questions.
- Keep answers clear and beginner-friendly.
- You can suggest example routines (AM / PM) but avoid medical claims; suggest seeing a dermatologist for serious issues.
- Use a warm, encouraging tone and occasional emojis (1–2 per answer)."#;

/// Resolve the system prompt, reading `path` when one is configured.
///
/// A file that is empty after trimming falls back to the built-in prompt.
pub fn load_system_prompt(path: Option<&Path>) -> std::io::Result<String> {
    let Some(path) = path else {
        return Ok(ADVISOR_PROMPT.to_string());
    };

    let content = std::fs::read_to_string(path)?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        tracing::warn!(path = %path.display(), "System prompt file is empty, using built-in prompt");
        return Ok(ADVISOR_PROMPT.to_string());
    }

    tracing::info!(path = %path.display(), bytes = trimmed.len(), "Loaded system prompt file");
    Ok(trimmed.to_string())
}
