//! Ordered keyword rules.

use strum::{Display, EnumIter, IntoStaticStr};

use crate::replies;

/// Topic bucket that drives reply selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Crisis,
    Anxiety,
    Sadness,
    Anger,
    Sleep,
    Motivation,
    /// Fallback when no rule matches.
    Default,
}

impl Category {
    /// Render the reply for this category.
    pub fn reply(self) -> String {
        match self {
            Category::Crisis => replies::crisis(),
            Category::Anxiety => replies::anxiety(),
            Category::Sadness => replies::sadness(),
            Category::Anger => replies::anger(),
            Category::Sleep => replies::sleep(),
            Category::Motivation => replies::motivation(),
            Category::Default => replies::reflection(),
        }
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: Category,
    /// Lowercase keywords; any substring hit selects the rule.
    pub keywords: &'static [&'static str],
}

impl Rule {
    /// `normalized` must already be lowercase.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k))
    }
}

/// Rules in priority order.  Crisis must stay first.
pub static RULES: &[Rule] = &[
    Rule {
        category: Category::Crisis,
        keywords: &["suicide", "kill myself", "end my life", "self harm", "harm myself"],
    },
    Rule {
        category: Category::Anxiety,
        keywords: &["panic", "anxious", "anxiety", "overwhelmed"],
    },
    Rule {
        category: Category::Sadness,
        keywords: &["sad", "down", "depressed", "lonely"],
    },
    Rule {
        category: Category::Anger,
        keywords: &["angry", "frustrated", "irritated", "mad"],
    },
    Rule {
        category: Category::Sleep,
        keywords: &["can't sleep", "insomnia", "sleep"],
    },
    Rule {
        category: Category::Motivation,
        keywords: &["motivation", "procrastinate", "stuck"],
    },
];
