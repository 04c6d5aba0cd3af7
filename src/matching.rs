use crate::models::FaqEntry;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9']+").unwrap());

/// Minimum score a stored question must reach to answer a query.
pub const MATCH_THRESHOLD: f64 = 0.25; // tune if needed

/// Lowercases and tokenizes free text for matching.
pub fn normalize_text(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Token overlap with soft scoring: recall against the query weighs more
/// than precision against the stored question.
pub fn score_match(query: &str, candidate_q: &str) -> f64 {
    let q_tokens: HashSet<String> = normalize_text(query).into_iter().collect();
    let c_tokens: HashSet<String> = normalize_text(candidate_q).into_iter().collect();
    if q_tokens.is_empty() || c_tokens.is_empty() {
        return 0.0;
    }
    let overlap = q_tokens.intersection(&c_tokens).count() as f64;
    let recall = overlap / q_tokens.len() as f64;
    let precision = overlap / c_tokens.len() as f64;
    0.6 * recall + 0.4 * precision
}

/// Best-scoring entry with a score above zero, if any. Threshold
/// enforcement is left to the caller.
pub fn best_match<'a>(query: &str, faqs: &'a [FaqEntry]) -> Option<(&'a FaqEntry, f64)> {
    let mut best: Option<(&FaqEntry, f64)> = None;
    for faq in faqs {
        let score = score_match(query, &faq.question);
        if score > best.map(|(_, s)| s).unwrap_or(0.0) {
            best = Some((faq, score));
        }
    }
    best
}
