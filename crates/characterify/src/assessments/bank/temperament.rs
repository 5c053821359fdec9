use super::TestMetadata;
use crate::assessments::traits::TemperamentType::{
    self, Choleric, Melancholic, Phlegmatic, Sanguine,
};

pub(crate) const METADATA: TestMetadata = TestMetadata {
    title: "4 Temperaments",
    subtitle: "Sanguine, Choleric, Phlegmatic, Melancholic",
    description: "The Temperament questionnaire maps your energy tendencies and interaction style. The \
        result is useful for communication, teamwork, and self-management.",
    instructions: &[
        "Answer honestly and consistently.",
        "Use the 1 to 5 scale.",
        "There are no right or wrong answers.",
        "Estimated time: 5 to 8 minutes.",
    ],
};

pub(crate) static QUESTIONS: &[(TemperamentType, &str)] = &[
    (Sanguine, "I am talkative and enjoy lively company."),
    (Choleric, "I like to take the lead and make quick decisions."),
    (Phlegmatic, "I stay calm and steady in most situations."),
    (Melancholic, "I pay careful attention to quality and detail."),
    (Sanguine, "I make friends easily wherever I go."),
    (Choleric, "I am driven by goals and measurable results."),
    (Phlegmatic, "I prefer to avoid conflict whenever possible."),
    (Melancholic, "I plan ahead and think through the consequences."),
    (Sanguine, "I bring energy and fun to a group."),
    (Choleric, "I become impatient when things move slowly."),
    (Phlegmatic, "I am a patient listener."),
    (Melancholic, "I hold high standards for myself and others."),
    (Sanguine, "I act on enthusiasm more than careful planning."),
    (Choleric, "I am comfortable challenging others to get things done."),
    (Phlegmatic, "I adapt easily to what the group wants."),
    (Melancholic, "I tend to analyze situations deeply before acting."),
    (Sanguine, "I get bored when there is nothing new going on."),
    (Choleric, "I stay determined even under heavy pressure."),
    (Phlegmatic, "I enjoy a predictable and peaceful routine."),
    (Melancholic, "I am sensitive to criticism of my work."),
    (Sanguine, "I openly show my emotions to others."),
    (Choleric, "I prefer to be in control of outcomes."),
    (Phlegmatic, "I rarely lose my temper."),
    (Melancholic, "I prefer order and structure in my environment."),
];
