use strum::IntoEnumIterator;

use super::*;

#[test]
fn crisis_reply_carries_disclaimer() {
    for text in [
        "I keep thinking about suicide",
        "sometimes I want to KILL MYSELF",
        "I want to end my life",
        "is self harm normal?",
        "I might harm myself",
    ] {
        assert_eq!(classify(text), Category::Crisis, "{text}");
        assert!(respond(text).contains(CRISIS_DISCLAIMER), "{text}");
    }
}

#[test]
fn crisis_beats_every_other_category() {
    for other in ["anxious", "lonely", "angry", "insomnia", "stuck"] {
        let text = format!("{other} and I want to end my life");
        assert_eq!(classify(&text), Category::Crisis, "{text}");
        assert!(respond(&text).contains(CRISIS_DISCLAIMER));
    }
}

#[test]
fn anxiety_offers_grounding_without_disclaimer() {
    let reply = respond("I feel anxious and overwhelmed");
    assert!(GROUNDING_TIPS.iter().any(|tip| reply.contains(tip)));
    assert!(!reply.contains(CRISIS_DISCLAIMER));
}

#[test]
fn anxiety_uses_first_four_tips_only() {
    let reply = respond("panic attack");
    for tip in &GROUNDING_TIPS[..4] {
        assert!(reply.contains(&format!("- {tip}")));
    }
    assert!(!reply.contains(GROUNDING_TIPS[4]));
}

#[test]
fn sadness_lists_every_tip() {
    let reply = respond("I've been so lonely lately");
    assert!(reply.starts_with("I'm hearing heaviness"));
    for tip in GROUNDING_TIPS {
        assert!(reply.contains(tip));
    }
}

#[test]
fn earlier_rule_wins_over_later() {
    assert_eq!(classify("anxious and sad"), Category::Anxiety);
    assert_eq!(classify("sad and angry"), Category::Sadness);
    assert_eq!(classify("frustrated I can't sleep"), Category::Anger);
    assert_eq!(classify("no sleep, no motivation"), Category::Sleep);
}

#[test]
fn matching_ignores_case() {
    assert_eq!(classify("INSOMNIA again"), Category::Sleep);
    assert_eq!(classify("I Can't Sleep"), Category::Sleep);
    assert_eq!(classify("Procrastinate much?"), Category::Motivation);
}

#[test]
fn matching_is_substring_based() {
    // "made" contains "mad".
    assert_eq!(classify("I made dinner"), Category::Anger);
    // "sleepy" contains "sleep".
    assert_eq!(classify("so sleepy"), Category::Sleep);
}

#[test]
fn empty_input_falls_through_to_default() {
    for text in ["", "   ", "\n\t"] {
        assert_eq!(classify(text), Category::Default);
        assert!(respond(text).contains("venting more, brainstorming options"));
    }
}

#[test]
fn unmatched_input_gets_reflection() {
    assert_eq!(classify("hello there"), Category::Default);
}

#[test]
fn every_category_has_a_reply() {
    for category in Category::iter() {
        let reply = category.reply();
        assert!(!reply.trim().is_empty(), "{category}");
        assert_eq!(
            reply.contains(CRISIS_DISCLAIMER),
            category == Category::Crisis,
            "{category}"
        );
    }
}

#[test]
fn rule_table_order() {
    let order: Vec<Category> = RULES.iter().map(|r| r.category).collect();
    assert_eq!(
        order,
        vec![
            Category::Crisis,
            Category::Anxiety,
            Category::Sadness,
            Category::Anger,
            Category::Sleep,
            Category::Motivation,
        ]
    );
    assert!(RULES.iter().all(|r| r.category != Category::Default));
}

#[test]
fn category_display_is_lowercase() {
    assert_eq!(Category::Motivation.to_string(), "motivation");
    assert_eq!(<&'static str>::from(Category::Default), "default");
}
