//! Built-in example questions for the "generate sample question" action.

use rand::Rng;

pub const SAMPLE_QUESTIONS: &[&str] = &[
    "How much profit did beets make?",
    "What was the most cost-efficient crop?",
    "How did carrots do?",
    "Did we grow cabbage?",
    "Was kale a successful crop?",
    "What was the most profitable crop?",
];

/// Pick one sample question uniformly at random.
pub fn random_question() -> &'static str {
    pick_with(&mut rand::rng())
}

/// Pick one sample question using the given RNG.
pub fn pick_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_QUESTIONS[rng.random_range(0..SAMPLE_QUESTIONS.len())]
}
