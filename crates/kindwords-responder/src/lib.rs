//! kindwords-responder – rule-based support replies.
//!
//! The responder lowercases the input and walks [`RULES`] in order; the first
//! rule whose keyword set has a substring hit decides the [`Category`], and the
//! category renders its canned reply.  Nothing here touches I/O or keeps state,
//! so every function is safe to call from any thread.
//!
//! Matching is plain substring containment, not word matching: `"made"` hits
//! the anger keyword `"mad"`.  That is the established behaviour and callers
//! may rely on it.

mod replies;
mod rules;

pub use replies::{CRISIS_DISCLAIMER, GROUNDING_TIPS, TIPS_INTRO};
pub use rules::{Category, Rule, RULES};

/// Pick the category `text` falls into.
///
/// Always returns a value; input that matches no rule (including empty or
/// whitespace-only input) is [`Category::Default`].
pub fn classify(text: &str) -> Category {
    let normalized = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&normalized))
        .map(|rule| rule.category)
        .unwrap_or(Category::Default)
}

/// Produce the canned reply for `text`.  Never returns an empty string.
pub fn respond(text: &str) -> String {
    classify(text).reply()
}

#[cfg(test)]
mod tests;
