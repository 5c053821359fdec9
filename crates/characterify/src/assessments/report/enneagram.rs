use super::{NarrativeTable, ReportContent, ReportSection};
use crate::assessments::traits::{EnneagramType, TraitTag};

pub(super) struct TypeProfile {
    pub short: &'static str,
    pub narrative: &'static str,
    pub motivation: &'static str,
    pub fear: &'static str,
    pub desire: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub growth: &'static [&'static str],
}

const PROFILE_ENTRIES: &[(&str, TypeProfile)] = &[
    ("1", TypeProfile {
        short: "Principled, guided by integrity and quality standards.",
        narrative: "As an Enneagram Type 1 you are oriented toward integrity, standards, and doing what is \
            right. You notice disorder quickly and feel a strong pull to improve quality, in yourself and \
            around you. At work you often excel through discipline, precision, and commitment to clean \
            results. Perfectionism, heavy criticism of yourself or others, and difficulty accepting that \
            good enough is sometimes enough are common challenges. Under stress you may become rigid or \
            easily frustrated. Growth for Type 1 means practicing self-compassion, telling healthy \
            standards apart from excessive control, and building ways to relax so your energy is not spent \
            chasing perfection.",
        motivation: "Integrity and rightness",
        fear: "Making mistakes or being bad",
        desire: "To be good, right, and meaningful",
        strengths: &["Principled", "Disciplined", "Dependable", "Guards quality"],
        challenges: &["Perfectionistic", "Critical", "Rigid", "Hard to satisfy"],
        growth: &[
            "Practice self-compassion",
            "Separate standards from control",
            "Practice good enough",
        ],
    }),
    ("2", TypeProfile {
        short: "Warm, supportive, and motivated to help.",
        narrative: "As an Enneagram Type 2 you are warm, supportive, and motivated to help and to feel \
            needed. You read people's needs quickly, build relationships, and create emotional safety. In a \
            team you are often the social glue that makes people feel noticed. Saying no is hard, giving too \
            much leads to exhaustion, and you may quietly expect something in return. Under stress you can \
            become sensitive or feel unappreciated. Growth for Type 2 means healthy boundaries, learning to \
            ask for help, and valuing yourself without depending on others' approval.",
        motivation: "Being accepted and needed",
        fear: "Being unloved or ignored",
        desire: "To be loved for what they give",
        strengths: &["Empathetic", "Generous", "Builds relationships", "Reads people's needs"],
        challenges: &[
            "Struggles to say no",
            "Puts others first too often",
            "Easily disappointed",
            "Seeks validation",
        ],
        growth: &[
            "Set healthy boundaries",
            "Ask for help",
            "Value yourself without approval",
        ],
    }),
    ("3", TypeProfile {
        short: "Driven by achievement, image, and effectiveness.",
        narrative: "As an Enneagram Type 3 you are oriented toward achievement, effectiveness, and results. \
            You adapt well, pick up on expectations quickly, and push yourself toward targets. At work Type \
            3 often excels through productivity and a focus on outcomes. Overwork, leaning too much on image, \
            or ignoring emotional needs while busy having to succeed are common challenges. Under stress you \
            may push harder or struggle to admit limits. Growth for Type 3 means defining success on your \
            own terms, protecting recovery time, and practicing presence so identity is not tied only to \
            achievement.",
        motivation: "Success and self-worth",
        fear: "Failing or being worthless",
        desire: "To be recognized for achievement",
        strengths: &["Productive", "Adaptable", "Goal-oriented", "Drives performance"],
        challenges: &[
            "Overworks",
            "Image-focused",
            "Neglects emotions",
            "Afraid to look weak",
        ],
        growth: &[
            "Define success on your own terms",
            "Schedule recovery",
            "Practice mindfulness",
        ],
    }),
    ("4", TypeProfile {
        short: "Authentic, expressive, and attuned to identity.",
        narrative: "As an Enneagram Type 4 you are sensitive, authentic, and oriented toward identity and \
            personal meaning. You usually have emotional depth and a strong sense of aesthetics and \
            self-expression. Type 4 is often very strong in creative work or roles that call for empathy. \
            Mood swings, comparing yourself with others, or feeling that something is missing can make it \
            hard to move forward. Under stress you may overthink or withdraw. Growth for Type 4 means stable \
            routines, separating facts from interpretation, and small consistent actions so emotion becomes \
            a source of strength rather than a brake.",
        motivation: "Identity and uniqueness",
        fear: "Having no identity or significance",
        desire: "To find personal meaning",
        strengths: &["Creative", "Emotionally perceptive", "Authentic", "Expressive"],
        challenges: &[
            "Mood swings",
            "Compares self to others",
            "Overthinks",
            "Focuses on what is missing",
        ],
        growth: &[
            "Keep stable routines",
            "Separate facts from interpretation",
            "Take small consistent actions",
        ],
    }),
    ("5", TypeProfile {
        short: "Analytical, observant, and values knowledge.",
        narrative: "As an Enneagram Type 5 you are analytical, observant, and value knowledge and competence. \
            You like to understand things in depth, map out systems, and conserve energy by choosing \
            interactions selectively. At work you often excel at research, analysis, problem solving, and \
            concept design. Withdrawing too far, delaying action until understanding is complete, or seeming \
            emotionally distant are common challenges. Under stress you may isolate yourself further. Growth \
            for Type 5 means balancing theory with practice through small experiments, gradual social \
            engagement, and simpler communication so others can use your insight.",
        motivation: "Understanding and competence",
        fear: "Being incapable or depleted",
        desire: "To master knowledge and be self-sufficient",
        strengths: &["Analytical", "Independent", "Objective", "Thinks deeply"],
        challenges: &[
            "Withdraws",
            "Emotionally reserved",
            "Overanalyzes",
            "Delays action",
        ],
        growth: &[
            "Balance theory and practice",
            "Engage socially step by step",
            "Communicate simply",
        ],
    }),
    ("6", TypeProfile {
        short: "Loyal, watchful, and in need of security.",
        narrative: "As an Enneagram Type 6 you are loyal, watchful, and oriented toward security and \
            certainty. You anticipate risks well, make plans, and take responsibility seriously. In a team \
            Type 6 is often the guardian of the system who makes sure things do not fall apart. Anxiety, \
            doubt, or too many what-if scenarios can delay decisions. Under stress you may over-prepare or \
            find it hard to trust. Growth for Type 6 means testing assumptions against data, keeping a \
            simple plan A and plan B, and building courage through small consistent decisions.",
        motivation: "Security and certainty",
        fear: "Being without support or under threat",
        desire: "To feel safe and ready for risk",
        strengths: &["Loyal", "Planner", "Responsible", "Anticipates risk"],
        challenges: &["Anxious", "Doubtful", "Over-prepares", "Tests others' trust"],
        growth: &[
            "Test assumptions with data",
            "Keep a simple plan A and B",
            "Make small decisions consistently",
        ],
    }),
    ("7", TypeProfile {
        short: "Optimistic, spontaneous, and seeks new experiences.",
        narrative: "As an Enneagram Type 7 you are optimistic, spontaneous, and always looking for new \
            experiences. You are energetic, spot opportunities quickly, and enjoy variety. At work Type 7 \
            often excels at ideation, networking, and lifting team spirit. Impulsiveness, scattered focus, or \
            avoiding discomfort can make monotonous work hard to finish. Under stress you may become more \
            distractible. Growth for Type 7 means practicing focus on one thing, building tolerance for \
            boredom and discomfort, and finishing before moving on so your energy produces real output.",
        motivation: "Freedom and experience",
        fear: "Being trapped in pain or limitation",
        desire: "To enjoy life and keep options open",
        strengths: &["Optimistic", "Innovative", "Energetic", "Spots opportunities"],
        challenges: &[
            "Avoids discomfort",
            "Scattered focus",
            "Impulsive",
            "Struggles to finish",
        ],
        growth: &[
            "Focus on one thing",
            "Tolerate boredom",
            "Finish before moving on",
        ],
    }),
    ("8", TypeProfile {
        short: "Assertive, protective, and likes control.",
        narrative: "As an Enneagram Type 8 you are assertive, protective, and intent on controlling your own \
            life. You are bold, decide quickly, and can lead through difficult situations. In a team Type 8 \
            is often the driver of action and the protector. Seeming too dominant or hard, or finding it \
            difficult to show vulnerability, are common challenges. Under stress you may become more \
            confrontational or pushy. Growth for Type 8 means practicing empathy in conflict, listening \
            before responding, and building trust through delegation so your strength feels safe to others.",
        motivation: "Control and protection",
        fear: "Being controlled or harmed",
        desire: "To be self-determined and protect others",
        strengths: &["Bold", "Decisive", "Protective", "Leads in a crisis"],
        challenges: &[
            "Dominant",
            "Harsh",
            "Struggles with vulnerability",
            "Quick to confront",
        ],
        growth: &[
            "Listen before responding",
            "Practice empathy",
            "Delegate and trust",
        ],
    }),
    ("9", TypeProfile {
        short: "Calm, peaceful, and a natural mediator.",
        narrative: "As an Enneagram Type 9 you are calm, peaceful, and protective of harmony. You mediate, \
            listen, and make the atmosphere more stable. In a team Type 9 often balances conflict and helps \
            collaboration run smoothly. Procrastination, avoiding conflict, or setting aside your own needs \
            for everyone's comfort are common challenges. Under stress you may become more passive. Growth \
            for Type 9 means time-boxing the start of tasks, setting daily priorities, and practicing healthy \
            conflict by saying what you need so you stay present and influential.",
        motivation: "Peace and stability",
        fear: "Conflict or loss of connection",
        desire: "Harmony and calm",
        strengths: &["Mediates", "Patient", "Steady", "Calms the room"],
        challenges: &[
            "Procrastinates",
            "Avoids conflict",
            "Struggles to prioritize",
            "Downplays own needs",
        ],
        growth: &[
            "Time-box getting started",
            "Set daily priorities",
            "Practice healthy conflict",
        ],
    }),
];

pub(super) static PROFILES: NarrativeTable<TypeProfile> = NarrativeTable::new(PROFILE_ENTRIES);

const CLOSING: &str = "The Enneagram focuses on motivation, the reasons behind what you do. Use this \
     result for reflection and for practicing new habits.";

const GENERIC: TypeProfile = TypeProfile {
    short: "A mix of motivations without a single clear lead.",
    narrative: "Your answers do not point to one recognized Enneagram type. Read the type descriptions that \
        felt closest and notice which motivations show up most often in your daily choices.",
    motivation: "Not determined",
    fear: "Not determined",
    desire: "Not determined",
    strengths: &["Draws on several motivational styles"],
    challenges: &["Core pattern is not yet clear"],
    growth: &["Retake the questionnaire after a week of self-observation"],
};

pub(super) fn compose(type_code: &str) -> ReportContent {
    let profile = PROFILES.get(type_code).unwrap_or(&GENERIC);
    let name = EnneagramType::from_code(type_code)
        .map(|kind| kind.label())
        .unwrap_or("Unrecognized Type");

    let title = format!("Enneagram Type {type_code}: {name}");
    let summary_md = format!(
        "**{title}**\n\n{}\n\n*In short:* {}\n\n\
         **Core motivation:** {}\n**Core fear:** {}\n**Core desire:** {}\n\n{CLOSING}",
        profile.narrative, profile.short, profile.motivation, profile.fear, profile.desire,
    );

    ReportContent {
        title,
        subtitle: profile.short.to_string(),
        summary_md,
        sections: vec![
            ReportSection::new("Core Strengths", profile.strengths.iter().copied()),
            ReportSection::new("Common Challenges", profile.challenges.iter().copied()),
            ReportSection::new("Growth Suggestions", profile.growth.iter().copied()),
        ],
    }
}
