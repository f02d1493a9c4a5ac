//! Keyword-based topic filter
//!
//! Decides whether a question is worth sending to the completion worker.
//! This is a heuristic only; the system prompt also tells the model to
//! refuse off-topic questions.


/// Terms that mark a question as beauty related. Matched as lowercase
/// substrings, so "hair" also covers "haircare" and "pore" covers "pores".
pub const KEYWORDS: &[&str] = &[
    "skin",
    "skincare",
    "serum",
    "moisturizer",
    "cleanser",
    "toner",
    "spf",
    "sunscreen",
    "acne",
    "pore",
    "hyperpigmentation",
    "dark spot",
    "hair",
    "shampoo",
    "conditioner",
    "mask",
    "makeup",
    "foundation",
    "concealer",
    "mascara",
    "lipstick",
    "fragrance",
    "perfume",
    "routine",
    "l'oreal",
    "l'oréal",
    "loreal",
    "loréal",
    "maybelline",
    "garnier",
    "cerave",
    "nyx",
];

/// Returns true if `text` mentions any keyword, ignoring case
pub fn is_in_scope(text: &str) -> bool {
    let lower = text.to_lowercase();
    KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// The first keyword found in `text`, for logging
pub fn matched_keyword(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    KEYWORDS.iter().copied().find(|keyword| lower.contains(keyword))
}
