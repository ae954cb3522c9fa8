//! Canned reply text.

/// Appended to every crisis reply.
pub const CRISIS_DISCLAIMER: &str = "If you're in immediate danger or thinking about harming yourself, \
please reach out to local emergency services or a trusted person right away.";

pub const TIPS_INTRO: &str = "I'm here to listen. I'm not a medical professional, \
but here are a few gentle ideas you can try:";

/// Grounding tips, in display order.  Anxiety replies use the first four.
pub const GROUNDING_TIPS: [&str; 5] = [
    "Take 10 slow breaths—in through the nose, out through the mouth.",
    "Name 5 things you can see, 4 you can feel, 3 you can hear, 2 you can smell, 1 you can taste (5-4-3-2-1 grounding).",
    "Drink a glass of water and relax your shoulders.",
    "Try a 2–5 minute body scan: notice any tension and release it.",
    "Write down what's on your mind for 3 minutes—no filter.",
];

const ANXIETY_TIP_COUNT: usize = 4;

fn bullet_list(tips: &[&str]) -> String {
    tips.iter()
        .map(|tip| format!("- {tip}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn crisis() -> String {
    format!(
        "I'm really sorry you're feeling this way. {CRISIS_DISCLAIMER} \
         You might also contact a local crisis line or a trusted friend or family member. \
         You matter, and you deserve support."
    )
}

pub(crate) fn anxiety() -> String {
    format!(
        "It sounds like you're feeling anxious. {TIPS_INTRO}\n{}\n\
         If it helps, you can tell me one specific worry and we can unpack it together.",
        bullet_list(&GROUNDING_TIPS[..ANXIETY_TIP_COUNT])
    )
}

pub(crate) fn sadness() -> String {
    format!(
        "I'm hearing heaviness in what you're feeling. {TIPS_INTRO}\n{}\n\
         Would you like to try a tiny next step—like a short walk or texting someone you trust?",
        bullet_list(&GROUNDING_TIPS)
    )
}

pub(crate) fn anger() -> String {
    "Anger can be really intense. A quick exercise: clench your fists for 5 seconds, \
     then release slowly; repeat 3 times. If you want, describe what sparked the anger \
     and we can break it into parts you can influence vs. what you can't."
        .to_owned()
}

pub(crate) fn sleep() -> String {
    "Sleep trouble is rough. Consider a short wind-down: dim lights 1 hour before bed, \
     avoid screens 30 minutes prior, and try box-breathing (4s inhale, 4s hold, 4s exhale, \
     4s hold) for 3–5 rounds."
        .to_owned()
}

pub(crate) fn motivation() -> String {
    "Let's try the 2-minute rule: pick one tiny task you can start for 2 minutes. \
     When you're done, check in and we’ll pick the next tiny step together."
        .to_owned()
}

pub(crate) fn reflection() -> String {
    "Thanks for sharing that with me. It sounds important. \
     What would feel most helpful right now—venting more, brainstorming options, \
     or a short grounding exercise?"
        .to_owned()
}
