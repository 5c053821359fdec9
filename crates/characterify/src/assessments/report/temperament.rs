use super::{NarrativeTable, ReportContent, ReportSection};
use crate::assessments::traits::{TemperamentType, TraitTag};

pub(super) struct TemperamentProfile {
    pub description: &'static str,
    pub narrative: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub growth: &'static [&'static str],
}

const PROFILE_ENTRIES: &[(&str, TemperamentProfile)] = &[
    ("S", TemperamentProfile {
        description: "Enthusiastic, expressive, and quick to build social connections.",
        narrative: "As a Sanguine you tend to be enthusiastic, expressive, and good at creating a lively \
            atmosphere. You make social connections quickly, bring positive energy, and enjoy interaction. \
            In work or organizations Sanguines often excel at communication, presenting, events, community, \
            or collaboration across many people. Consistency is the usual challenge because new things and \
            changing moods pull your attention. Under pressure you may reach for distractions instead of \
            solving the root problem. A light structure helps most: three daily priorities, focus \
            time-boxes, and a short review habit so your energy produces steady output.",
        strengths: &[
            "Creates a positive atmosphere",
            "Communicative",
            "Adapts quickly",
            "Motivates others easily",
        ],
        challenges: &[
            "Easily distracted",
            "Inconsistent",
            "Impulsive",
            "Sometimes misses details",
        ],
        growth: &[
            "Three daily priorities",
            "Focus time-boxes",
            "Practice follow-through",
            "Weekly review",
        ],
    }),
    ("C", TemperamentProfile {
        description: "Decisive, goal-focused, confident, and results-oriented.",
        narrative: "As a Choleric you tend to be decisive, fast, and results-oriented. You are comfortable \
            leading, making decisions, and driving execution when a situation needs clear direction. In a \
            team you are often the engine that makes sure targets are hit. Patience and communication style \
            are the usual challenges: as pressure rises you can sound harsh or push too hard. Balance \
            firmness with empathy by explaining goals, listening to the team's needs, and pausing before \
            responding to conflict. That way your strength feels both safe and effective.",
        strengths: &[
            "Natural leader",
            "Decides quickly",
            "Resilient under pressure",
            "Takes on challenges",
        ],
        challenges: &[
            "Too dominant",
            "Impatient",
            "Comes across as harsh",
            "Resists compromise under pressure",
        ],
        growth: &[
            "Practice empathy",
            "Delegate",
            "Pause before responding",
            "Involve the team in solutions",
        ],
    }),
    ("P", TemperamentProfile {
        description: "Calm, cooperative, and a keeper of harmony.",
        narrative: "As a Phlegmatic you tend to be calm, steady, and protective of harmony. You are a good \
            listener, cooperative, and able to mediate conflict so the atmosphere stays constructive. In a \
            team you are often the balancing presence that keeps collaboration smooth. Postponing \
            decisions, avoiding conflict, or under-stating your needs are the usual challenges. Under \
            pressure you may become more passive and stay silent. Build courage gradually: time-box \
            getting started, set daily priorities, and practice stating your needs directly so you stay \
            present and influential.",
        strengths: &[
            "Patient",
            "Mediator",
            "Steady",
            "Cooperative and supportive",
        ],
        challenges: &[
            "Procrastinates",
            "Avoids conflict",
            "Not assertive enough",
            "Slow to start big decisions",
        ],
        growth: &[
            "Daily priorities",
            "Practice saying no",
            "Time-box getting started",
            "Practice healthy conflict",
        ],
    }),
    ("M", TemperamentProfile {
        description: "Meticulous, structured, and attentive to quality and detail.",
        narrative: "As a Melancholic you tend to be meticulous, structured, and quality-oriented. You are \
            strong in analysis, detail, and consistent process. At work you often excel in roles that call \
            for planning, documentation, quality assurance, and systematic thinking. Perfectionism and \
            overthinking are the usual challenges, especially when high standards meet tight deadlines. \
            Under pressure you may become anxious and find it hard to let go of control. Define what good \
            enough means, limit revisions with a time-box, and keep a steady rest rhythm so quality stays \
            high without costing your health.",
        strengths: &[
            "Detail-oriented",
            "Analytical",
            "High standards",
            "Consistent and tidy",
        ],
        challenges: &[
            "Perfectionistic",
            "Overthinks",
            "Prone to anxiety",
            "Struggles to release quality control",
        ],
        growth: &[
            "Define good enough",
            "Limit revisions",
            "Separate facts from assumptions",
            "Keep a rest rhythm",
        ],
    }),
];

pub(super) static PROFILES: NarrativeTable<TemperamentProfile> =
    NarrativeTable::new(PROFILE_ENTRIES);

const CLOSING: &str = "Temperament is a map of your energy and interaction style. Use it to understand \
     your default patterns and to prepare strategies that let your strengths work without sliding into \
     extremes under pressure.";

const GENERIC: TemperamentProfile = TemperamentProfile {
    description: "A blend of temperaments without a single clear lead.",
    narrative: "Your answers do not match one recognized temperament. Notice which descriptions fit you on \
        ordinary days and which appear under pressure; both are part of your style.",
    strengths: &["Flexible across interaction styles"],
    challenges: &["Default pattern is not yet clear"],
    growth: &["Observe your energy for a week and retake the questionnaire"],
};

pub(super) fn compose(type_code: &str) -> ReportContent {
    let profile = PROFILES.get(type_code).unwrap_or(&GENERIC);
    let name = TemperamentType::from_code(type_code)
        .map(|kind| kind.label())
        .unwrap_or(if type_code.is_empty() {
            "Unrecognized Temperament"
        } else {
            type_code
        });

    let summary_md = format!(
        "**{name}**\n\n{}\n\n*In short:* {}\n\n{CLOSING}",
        profile.narrative, profile.description,
    );

    ReportContent {
        title: name.to_string(),
        subtitle: profile.description.to_string(),
        summary_md,
        sections: vec![
            ReportSection::new("Strengths", profile.strengths.iter().copied()),
            ReportSection::new("Challenges", profile.challenges.iter().copied()),
            ReportSection::new("Growth Suggestions", profile.growth.iter().copied()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_temperament_has_four_items_per_list() {
        for kind in TemperamentType::ALL {
            let profile = PROFILES.get(kind.code()).expect("profile");
            assert!(profile.narrative.contains(kind.label()));
            assert_eq!(profile.strengths.len(), 4);
            assert_eq!(profile.challenges.len(), 4);
            assert_eq!(profile.growth.len(), 4);
        }
    }

    #[test]
    fn composes_named_report() {
        let content = compose("P");
        assert_eq!(content.title, "Phlegmatic");
        assert!(content.summary_md.starts_with("**Phlegmatic**\n\nAs a Phlegmatic"));
        assert!(content.summary_md.contains("*In short:* Calm, cooperative"));
        let titles: Vec<&str> = content.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Strengths", "Challenges", "Growth Suggestions"]);
    }

    #[test]
    fn unknown_code_keeps_the_raw_name() {
        let content = compose("X");
        assert_eq!(content.title, "X");
        assert_eq!(content.subtitle, GENERIC.description);
        assert!(content.sections.iter().all(|section| !section.items.is_empty()));
    }

    #[test]
    fn empty_code_still_has_a_title() {
        let content = compose("");
        assert!(!content.title.is_empty());
    }
}
