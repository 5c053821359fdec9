use std::collections::BTreeMap;

use super::{NarrativeTable, ReportContent, ReportSection};
use crate::assessments::scoring::Percentages;
use crate::assessments::traits::{OceanTrait, TraitTag};

/// Share (of the grand total) at or above which a dimension reads as high.
const HIGH_SHARE: f64 = 24.0;
/// Share at or below which a dimension reads as low.
const LOW_SHARE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TraitLevel {
    High,
    Moderate,
    Low,
}

impl TraitLevel {
    pub(super) fn from_share(pct: f64) -> Self {
        if pct >= HIGH_SHARE {
            Self::High
        } else if pct <= LOW_SHARE {
            Self::Low
        } else {
            Self::Moderate
        }
    }

    pub(super) const fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

fn display_name(dimension: OceanTrait) -> &'static str {
    match dimension {
        OceanTrait::Openness => "Openness (curiosity)",
        OceanTrait::Conscientiousness => "Conscientiousness (discipline)",
        OceanTrait::Extraversion => "Extraversion (sociability)",
        OceanTrait::Agreeableness => "Agreeableness (cooperation)",
        OceanTrait::Neuroticism => "Neuroticism (stress sensitivity)",
    }
}

fn meaning(dimension: OceanTrait) -> &'static str {
    match dimension {
        OceanTrait::Openness => "curiosity, creativity, and an appetite for new ideas and experiences",
        OceanTrait::Conscientiousness => "order, discipline, consistency, and a focus on goals",
        OceanTrait::Extraversion => "a need for social stimulation, interactive energy, and expressiveness",
        OceanTrait::Agreeableness => "empathy, cooperation, and a tendency to keep the peace",
        OceanTrait::Neuroticism => "sensitivity to stress, worry, and emotional swings",
    }
}

const PROFILE_ENTRIES: &[(&str, &str)] = &[
    ("O",
        "Your profile shows Openness as the most dominant dimension. It is linked to curiosity, openness to \
         new ideas, and comfort with exploring possibilities. You tend to see patterns and opportunities \
         quickly, are drawn to concepts, and enjoy variety in learning and work. At work you usually excel \
         at tasks that need creativity, strategy, innovation, and unconventional problem solving. Repetitive \
         routine may bore you, and the urge to keep exploring can delay execution. The most effective \
         development is pairing exploration with an execution system: turn ideas into small, measurable \
         experiments with a time-box, then review the outcome so your creativity has real impact."),
    ("C",
        "Your profile shows Conscientiousness as the most dominant dimension. It usually reflects order, \
         discipline, consistency, and a drive to finish. You are comfortable with plans, standards, and a \
         clear definition of done. At work you often excel in roles that need precision, time management, \
         quality, and long-term responsibility. Perfectionism or over-control can appear, especially when \
         your standards are high and resources are tight. Keep the strength of structure while practicing \
         flexibility: set a good-enough minimum, iterate, and leave room for uncertainty so productivity \
         stays steady."),
    ("E",
        "Your profile shows Extraversion as the most dominant dimension. It relates to social energy, \
         expressiveness, and ease with interaction. You connect easily, start conversations quickly, and \
         often draw energy from collaboration. At work you usually excel at coordination, presenting, \
         negotiating, or working across groups. Too much interaction, or discussion that never turns into \
         output, can scatter your focus. Build a rhythm of short structured discussions followed by focused \
         blocks of execution so your social energy accelerates results instead of draining attention."),
    ("A",
        "Your profile shows Agreeableness as the most dominant dimension. It relates to empathy, \
         cooperation, and keeping harmony. You consider the impact on others, help readily, and build trust \
         well. In a team you are often the balancing force that keeps collaboration smooth. Being firm can \
         be hard, conflicts that need resolving may be avoided, and your own needs can fall behind. Practice \
         assertiveness: state boundaries and needs clearly without losing warmth, so you stay cooperative \
         while also deciding effectively."),
    ("N",
        "Your profile shows Neuroticism as the most dominant dimension. It relates to sensitivity to stress, \
         worry, and emotional swings as pressure rises. This does not mean you are weak. You respond more \
         strongly to your surroundings, which becomes a strength when managed because it sharpens vigilance \
         and care. Overthinking, emotional fatigue, or an outsized focus on risk are common. Consistent \
         coping helps most: sleep hygiene, a time-box for worrying, journaling, and emotion regulation such \
         as breathing and grounding. When steady, you can turn sensitivity into a healthy, productive sense \
         for risk."),
    ("A_C",
        "Your profile stands out on Conscientiousness and Agreeableness. You tend to be dependable and tidy \
         as well as warm in relationships. This pairing often makes you the backbone of a team, guarding \
         quality and atmosphere at the same time. Saying no is hard, so responsibilities pile up. Grow by \
         setting healthy limits: know your capacity, communicate priorities, and ask for support when the \
         load goes past what is sustainable."),
    ("A_E",
        "Your profile stands out on Extraversion and Agreeableness. You tend to be friendly, sociable, and \
         cooperative. This pairing is usually strong for networking, teamwork, and keeping harmony. The \
         common challenge is pleasing others too much or struggling to be firm when it is needed. Grow \
         through warm assertiveness: state your limits, stay courteous, and keep the focus on solutions."),
    ("A_N",
        "Your profile stands out on Agreeableness and Neuroticism. You tend to be empathetic and caring, and \
         also easily moved by emotion as pressure rises. You are sensitive to people's needs and the mood \
         around you, but may bottle up conflict or blame yourself. Grow by building healthy boundaries, \
         practicing self-compassion, and stating your needs directly. With good coping your empathy becomes \
         a steady strength rather than a source of exhaustion."),
    ("A_O",
        "Your profile stands out on Openness and Agreeableness. You tend to be creative and open to new \
         ideas while staying sensitive to others and protecting harmony. This often produces a warm \
         collaborative style: you can develop fresh ideas without making people feel threatened. Too much \
         compromise can blunt an idea, and decisions may wait until everyone is comfortable. Keep your \
         empathy while staying firm on goals by agreeing on decision criteria and deadlines."),
    ("C_E",
        "Your profile stands out on Conscientiousness and Extraversion. This often describes someone \
         energetic in collaboration yet structured and results-driven. You can organize people, keep the \
         work rhythm, and make sure targets are met. Fatigue from carrying many responsibilities and \
         interactions at once is the main risk. Delegate, split priorities, and protect recharge time so \
         performance stays steady."),
    ("C_N",
        "Your profile stands out on Conscientiousness and Neuroticism. You tend to be responsible, \
         detail-oriented, and alert to signs of risk. The pairing can deliver high-quality work but invites \
         perfectionism and burnout when pressure is not managed. Set a clear good-enough standard, time-box \
         revisions, and keep recovery routines such as sleep, breaks, and light exercise. That keeps your \
         thoroughness a strength without draining your energy."),
    ("C_O",
        "Your profile combines Openness and Conscientiousness as the top two dimensions. This is often a \
         powerful mix: you have ideas and creativity along with the ability to organize execution. You can \
         think innovatively while building the systems that turn ideas into results. High standards may slow \
         experimentation, or a flood of ideas may strain your structure. Iterate in measured steps: build \
         small prototypes, define what good enough means, and improve gradually."),
    ("E_N",
        "Your profile stands out on Extraversion and Neuroticism. You tend to be expressive and responsive, \
         and also sensitive to pressure. In a team you care a lot and react quickly, but you tire easily when \
         interaction and stress arrive together. Manage your energy: schedule breaks, limit social overload, \
         use emotion-regulation techniques, and keep a simple structure so your thoughts do not run too far \
         ahead."),
    ("E_O",
        "Your profile stands out on Openness and Extraversion. This is often someone eager to explore ideas \
         and comfortable voicing them through discussion, networking, or collaboration. You catch \
         opportunities quickly, spark brainstorming, and move people with the energy of ideas. Focus is the \
         common challenge, with plenty of stimulation and plenty of possibilities. Pick one or two priority \
         ideas, time-box exploration, and turn the rest into concrete action items."),
    ("N_O",
        "Your profile stands out on Openness and Neuroticism. You tend to have strong imagination and \
         reflection, which lets you see many possibilities, including risks others miss. The pairing can \
         produce sharp analysis but may trigger overthinking if left unmanaged. Channel reflection into small \
         actions: write down the options, pick a first step, and evaluate it. Time-box your thinking and \
         practice emotion regulation so creativity does not turn into anxiety."),
];

pub(super) static PROFILES: NarrativeTable<&'static str> = NarrativeTable::new(PROFILE_ENTRIES);

const FRAMEWORK: &str = "The Big Five (OCEAN) is **continuous**: each dimension runs from low through \
     moderate to high. You are not one single thing; you have a certain level of each tendency. Use these \
     results as a tool for reflection and for building measurable habits.";

const STRENGTHS: &[&str] = &[
    "Gives a structured map of your working style, communication, and response to pressure.",
    "Supports development plans built around specific dimensions such as discipline, adaptability, or empathy.",
    "Makes reflection measurable so you can focus on the habits with the most impact.",
];

const ROUTINES: &[&str] = &[
    "Pick one dimension to train for 14 days (for example C: a daily checklist of three tasks).",
    "Five minutes of journaling: trigger, response, alternative response (especially for N).",
    "Focus time-boxes: 25 to 50 minutes of focused work plus a 5 to 10 minute break.",
    "Weekly reflection: one thing that worked, one thing to improve, one small next action.",
];

/// Dimensions with their share, highest first; equal shares keep canonical order.
fn ranked_shares(percentages: &Percentages) -> Vec<(OceanTrait, f64)> {
    let mut ranked: Vec<(OceanTrait, f64)> = OceanTrait::ALL
        .iter()
        .map(|dimension| {
            let pct = percentages.share_of(dimension.code()).unwrap_or(0.0);
            (*dimension, pct)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

fn fallback_paragraph(ranked: &[(OceanTrait, f64)]) -> String {
    let (first, second) = (ranked[0].0, ranked[1].0);
    format!(
        "Your profile stands out most on **{}** and **{}**. Your tendencies are shaped largely by {} as \
         well as {}. Use this report to understand when you are most effective, what triggers stress, and \
         which habits would pay off most if strengthened. A high score is not always better and a low score \
         is not always worse; what matters is fit with the context and a balanced strategy.",
        display_name(first),
        display_name(second),
        meaning(first),
        meaning(second),
    )
}

pub(super) fn compose(
    result_key: &str,
    scores: &BTreeMap<String, u32>,
    percentages: &Percentages,
) -> ReportContent {
    let ranked = ranked_shares(percentages);
    let paragraph = match PROFILES.get(result_key) {
        Some(text) => (*text).to_string(),
        None => fallback_paragraph(&ranked),
    };

    let mut dimension_scores = Vec::with_capacity(OceanTrait::ALL.len());
    let mut dimension_details = Vec::with_capacity(OceanTrait::ALL.len());
    for dimension in OceanTrait::ALL {
        let pct = percentages.share_of(dimension.code()).unwrap_or(0.0);
        let level = TraitLevel::from_share(pct).label();
        let raw = scores.get(dimension.code()).copied().unwrap_or(0);
        dimension_scores.push(format!(
            "{}: ~{pct:.1}% ({level}, raw score {raw})",
            display_name(*dimension)
        ));
        dimension_details.push(format!(
            "**{} ({level})**: Reflects {}.",
            display_name(*dimension),
            meaning(*dimension)
        ));
    }

    let mut development: Vec<String> = ranked
        .iter()
        .filter_map(|(dimension, pct)| match TraitLevel::from_share(*pct) {
            TraitLevel::High => Some(format!(
                "**{} high**: use it as a strength, but keep it balanced so it does not tip into overdoing.",
                display_name(*dimension)
            )),
            TraitLevel::Low => Some(format!(
                "**{} low**: make it a training focus through small, consistent habits.",
                display_name(*dimension)
            )),
            TraitLevel::Moderate => None,
        })
        .collect();
    if development.is_empty() {
        development.push(
            "All dimensions sit in the moderate range: pick the one most relevant to your current goals and practice it deliberately."
                .to_string(),
        );
    }

    let summary_md = format!(
        "**Big Five (OCEAN)**\n\n{paragraph}\n\n{FRAMEWORK}\n\n**Profile key: {result_key}**"
    );

    ReportContent {
        title: "Big Five (OCEAN)".to_string(),
        subtitle: format!("Profile summary: {result_key}"),
        summary_md,
        sections: vec![
            ReportSection::new("Dimension Scores", dimension_scores),
            ReportSection::new("Dimension Details", dimension_details),
            ReportSection::new("Strengths & Benefits", STRENGTHS.iter().copied()),
            ReportSection::new("Development Suggestions", development),
            ReportSection::new("Practical Routines", ROUTINES.iter().copied()),
        ],
    }
}
