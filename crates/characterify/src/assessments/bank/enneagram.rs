use super::TestMetadata;
use crate::assessments::traits::EnneagramType::{
    self, Achiever, Challenger, Enthusiast, Helper, Individualist, Investigator, Loyalist,
    Peacemaker, Reformer,
};

pub(crate) const METADATA: TestMetadata = TestMetadata {
    title: "Enneagram",
    subtitle: "Nine Core Motivation Types",
    description: "The Enneagram helps you understand your core motivations, emotional patterns, and coping \
        strategies. It is well suited to self-reflection: recognizing triggers, needs, and recurring \
        habits.",
    instructions: &[
        "Answer spontaneously and pick what describes you best.",
        "Focus on patterns that show up often.",
        "Use the 1 to 5 scale.",
        "Estimated time: 8 to 12 minutes.",
    ],
};

pub(crate) static QUESTIONS: &[(EnneagramType, &str)] = &[
    (Reformer, "I hold myself to high standards of doing things right."),
    (Helper, "I feel fulfilled when I am helping someone."),
    (Achiever, "Reaching my goals is central to how I see myself."),
    (Individualist, "I often feel different from the people around me."),
    (Investigator, "I need plenty of time alone to think things through."),
    (Loyalist, "I tend to anticipate what could go wrong."),
    (Enthusiast, "I love having many exciting options in front of me."),
    (Challenger, "I take charge naturally when a situation needs direction."),
    (Peacemaker, "I go out of my way to keep the peace."),
    (Reformer, "I notice mistakes and feel the urge to correct them."),
    (Helper, "I easily sense what other people need."),
    (Achiever, "I adapt my image to succeed in different settings."),
    (Individualist, "Expressing my authentic self matters deeply to me."),
    (Investigator, "I prefer observing before getting involved."),
    (Loyalist, "I feel safer when I have a backup plan."),
    (Enthusiast, "I get bored quickly with routine."),
    (Challenger, "I confront problems head-on rather than avoiding them."),
    (Peacemaker, "I find it hard to say what I really want."),
    (Reformer, "I feel guilty when I do not live up to my principles."),
    (Helper, "I sometimes neglect my own needs while caring for others."),
    (Achiever, "I work hard to be recognized for my accomplishments."),
    (Individualist, "I am drawn to deep and intense emotions."),
    (Investigator, "I like to master a subject before sharing my views."),
    (Loyalist, "Loyalty and trust are essential in my relationships."),
    (Enthusiast, "I keep my mood up by planning the next fun thing."),
    (Challenger, "I protect the people I care about fiercely."),
    (Peacemaker, "I tend to go along with others to avoid tension."),
    (Reformer, "I believe there is a right way to do most things."),
    (Helper, "Being needed by others makes me feel valued."),
    (Achiever, "I am efficient and focused on results."),
    (Individualist, "I often long for what feels missing in my life."),
    (Investigator, "I guard my energy and privacy carefully."),
    (Loyalist, "I question authority until I know it can be trusted."),
    (Enthusiast, "I avoid dwelling on painful feelings."),
    (Challenger, "I dislike being controlled by others."),
    (Peacemaker, "I stay calm when others are upset."),
    (Reformer, "I find it hard to relax when things are out of order."),
    (Helper, "I enjoy making people feel cared for."),
    (Achiever, "I compare my progress with other people's."),
    (Individualist, "I express myself through creative outlets."),
    (Investigator, "I feel drained by too many social demands."),
    (Loyalist, "I seek reassurance before making big decisions."),
    (Enthusiast, "I jump into new experiences with enthusiasm."),
    (Challenger, "I speak bluntly even when it makes others uncomfortable."),
    (Peacemaker, "I put off decisions that could upset someone."),
];
