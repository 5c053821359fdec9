use super::TestMetadata;
use crate::assessments::traits::OceanTrait::{
    self, Agreeableness as A, Conscientiousness as C, Extraversion as E, Neuroticism as N,
    Openness as O,
};

pub(crate) const METADATA: TestMetadata = TestMetadata {
    title: "Big Five (OCEAN)",
    subtitle: "Openness, Conscientiousness, Extraversion, Agreeableness, Neuroticism",
    description: "The Big Five (OCEAN) model maps your personality across five core dimensions. It helps \
        you understand your working style, relationships, communication preferences, and how you \
        respond to pressure.",
    instructions: &[
        "Use the 1 to 5 scale to rate how well each statement fits you.",
        "Answer based on your usual habits, not just how you feel today.",
        "There are no right or wrong answers.",
        "Estimated time: 8 to 12 minutes.",
    ],
};

// Eight items per dimension; the combined-profile gap in the scorer assumes this size.
pub(crate) static QUESTIONS: &[(OceanTrait, &str)] = &[
    (O, "I enjoy exploring new ideas and unfamiliar topics."),
    (C, "I finish tasks thoroughly and on time."),
    (E, "I feel comfortable starting conversations with strangers."),
    (A, "I try to be considerate and kind to everyone."),
    (N, "I worry about things that might go wrong."),
    (O, "I appreciate art, music, or literature."),
    (C, "I keep my belongings and workspace organized."),
    (E, "I enjoy being around lots of people."),
    (A, "I trust that most people have good intentions."),
    (N, "My mood changes easily."),
    (O, "I like trying different ways of doing things."),
    (C, "I make plans and stick to them."),
    (E, "I speak up easily in group discussions."),
    (A, "I am willing to compromise to avoid conflict."),
    (N, "I feel stressed when facing pressure."),
    (O, "I have a vivid imagination."),
    (C, "I pay attention to details."),
    (E, "I gain energy from social activities."),
    (A, "I readily help others even when it is inconvenient."),
    (N, "I get irritated or anxious easily."),
    (O, "I am curious about how things work."),
    (C, "I work steadily toward long-term goals."),
    (E, "I enjoy being the one who livens up a room."),
    (A, "I forgive people who have wronged me."),
    (N, "I often feel insecure about my decisions."),
    (O, "I enjoy reflecting on abstract or philosophical questions."),
    (C, "I follow through on commitments I make."),
    (E, "I make friends quickly."),
    (A, "I am sensitive to what other people need."),
    (N, "I find it hard to calm down after something upsets me."),
    (O, "I seek out new experiences and places."),
    (C, "I prepare carefully before important events."),
    (E, "I prefer working in teams over working alone."),
    (A, "I avoid criticizing people harshly."),
    (N, "I replay awkward moments in my head for a long time."),
    (O, "I enjoy learning things outside my usual field."),
    (C, "I rarely leave work until the last minute."),
    (E, "I feel at ease when meeting new people."),
    (A, "I value cooperation more than competition."),
    (N, "Small setbacks can ruin my whole day."),
];
