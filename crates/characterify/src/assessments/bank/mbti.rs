use super::TestMetadata;
use crate::assessments::traits::MbtiLetter::{self, E, F, I, J, N, P, S, T};

pub(crate) const METADATA: TestMetadata = TestMetadata {
    title: "MBTI",
    subtitle: "Myers-Briggs Type Indicator",
    description: "The MBTI questionnaire helps you understand the personality preferences that shape how \
        you think, interact, and make decisions. The result is not a right-or-wrong verdict but a \
        map of your natural preferences.",
    instructions: &[
        "There are no right or wrong answers. Pick the option that describes you best.",
        "Answer honestly and spontaneously without overthinking.",
        "Focus on your usual habits rather than special situations.",
        "Estimated time: 10 to 15 minutes.",
    ],
};

pub(crate) static QUESTIONS: &[(MbtiLetter, &str)] = &[
    (I, "I recharge best by spending quiet time on my own."),
    (E, "I feel energized after spending time with a group of people."),
    (N, "I enjoy thinking about future possibilities more than present details."),
    (S, "I trust facts and concrete experience more than hunches."),
    (T, "I make decisions mainly on logic and objective criteria."),
    (F, "I consider how a decision will affect people before I make it."),
    (P, "I prefer keeping my options open rather than locking in a plan."),
    (J, "I like to have a clear plan before starting something."),
    (I, "I prefer deep one-on-one conversations over large gatherings."),
    (E, "I usually think out loud and process ideas by talking."),
    (N, "I often notice patterns and connections that others miss."),
    (S, "I pay close attention to practical details and specifics."),
    (T, "I can give critical feedback without much discomfort."),
    (F, "Keeping harmony in a group matters a lot to me."),
    (P, "I work well in bursts of energy close to a deadline."),
    (J, "I feel uneasy when tasks are left unfinished."),
    (I, "I need time to reflect before sharing my opinion."),
    (E, "I easily start conversations with people I do not know."),
    (N, "I am drawn to abstract theories and big ideas."),
    (S, "I prefer step-by-step instructions over a general outline."),
    (T, "Fairness means applying the same rules to everyone."),
    (F, "I am often guided by my personal values when choosing."),
    (P, "I enjoy improvising when plans change unexpectedly."),
    (J, "I keep my schedule and to-do lists well organized."),
    (I, "Long social events tend to drain my energy."),
    (E, "I enjoy being at the center of group activities."),
    (N, "I like imagining how things could be done differently."),
    (S, "I rely on proven methods that have worked before."),
    (T, "I value being right more than being liked in a debate."),
    (F, "I easily sense how other people are feeling."),
    (P, "I find strict routines restrictive."),
    (J, "I prefer to settle decisions quickly rather than leave them open."),
    (I, "I often prefer to work alone on important tasks."),
    (E, "I would rather call or meet someone than send a message."),
    (N, "I read between the lines to find hidden meanings."),
    (S, "I remember real-world details better than abstract concepts."),
    (T, "I analyze pros and cons before trusting my feelings."),
    (F, "I would soften the truth to avoid hurting someone."),
    (P, "I start new things easily but rarely follow a fixed order."),
    (J, "Deadlines help me feel in control of my work."),
];
