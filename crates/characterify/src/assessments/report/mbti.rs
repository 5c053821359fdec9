use super::{NarrativeTable, ReportContent, ReportSection};
use crate::assessments::scoring::DimensionSplit;
use crate::assessments::traits::{MbtiLetter, TraitTag};

pub(super) struct TypeNarrative {
    pub name: &'static str,
    pub tagline: &'static str,
    pub narrative: &'static str,
}

const fn entry(name: &'static str, tagline: &'static str, narrative: &'static str) -> TypeNarrative {
    TypeNarrative {
        name,
        tagline,
        narrative,
    }
}

const TYPE_ENTRIES: &[(&str, TypeNarrative)] = &[
    ("ISTJ", entry(
        "Logistician",
        "Structured, realistic, and dependable.",
        "As an ISTJ you tend to be practical, orderly, and driven by responsibility. You trust consistency, \
         clear rules, and methods that have proven themselves. ISTJs often excel where precision, procedure, \
         operational management, or stable systems matter, and they keep the commitments they make. Friction \
         shows up with sudden change, ambiguity, or when a call has to be made on intuition without enough \
         data. Under pressure you may become rigid or critical. Growth comes from building in some slack \
         (a fallback plan), practicing a warmer tone, and asking why a change is happening so that adapting \
         feels reasonable rather than imposed.",
    )),
    ("ISFJ", entry(
        "Defender",
        "Warm, meticulous, and devoted to stability and care.",
        "As an ISFJ you tend to be warm, careful, and service-minded. You notice the small details that make \
         people comfortable, protect stability, and help in steady, reliable ways. ISFJs often excel where \
         persistence, attention to people's needs, and tidy long-running work are required. You value safe \
         relationships and predictable surroundings. The usual trap is carrying too much, finding it hard to \
         say no, or postponing your own needs. Under pressure you may become sensitive to criticism or feel \
         unappreciated. Growth comes from healthy boundaries, delegating, and stating your needs calmly and \
         clearly.",
    )),
    ("INFJ", entry(
        "Advocate",
        "Visionary, idealistic, and attuned to meaning and values.",
        "As an INFJ you combine deep intuition with real care for values and people. You look for the \
         meaning behind events, read emotional dynamics, and want to leave a positive mark. INFJs often \
         excel at mentoring, purposeful planning, writing, or guiding change with a clear direction. You may \
         appear calm while carrying a rich inner world and firm standards. The risk is exhaustion from \
         absorbing other people's emotions, or suppressing your own needs to keep the peace. Under pressure \
         you may overthink, withdraw, or feel let down when reality misses the ideal. Growth comes from firm \
         boundaries, naming your needs plainly, and pairing idealism with small consistent actions.",
    )),
    ("INTJ", entry(
        "Strategist",
        "Analytical, independent, and focused on systems and improvement.",
        "As an INTJ you tend to be strategic, systematic, and improvement-oriented. You see the big pattern, \
         lay out long-range plans, and break them into efficient steps. INTJs are often comfortable working \
         alone, untangling complex problems, and deciding on logic and goals. Teams value your sharp analysis \
         and ability to build structure, though you can come across as blunt without some warmth in how you \
         communicate. Perfectionism, high standards, and impatience with slower or less systematic people \
         are common sticking points. Under pressure you may grow rigid or controlling. Growth comes from \
         practicing flexibility through quick iterations, explaining the reasoning behind decisions, and \
         building collaborative habits that make others feel included.",
    )),
    ("ISTP", entry(
        "Virtuoso",
        "Practical, calm, and excellent at hands-on problem solving.",
        "As an ISTP you tend to be calm, pragmatic, and focused on solving real problems. You read situations \
         quickly, break a problem into parts, and fix it efficiently. ISTPs often excel at troubleshooting, \
         experimentation, and adapting on the ground. You value freedom and dislike rules that get in the \
         way. Complex emotions or roundabout conversations can be draining. Under pressure you may withdraw \
         or become too blunt. Growth comes from more explicit communication, sharing progress updates, and \
         building follow-through for the dull but important tasks.",
    )),
    ("ISFP", entry(
        "Adventurer",
        "Sensitive, flexible, and authentically expressive.",
        "As an ISFP you tend to be perceptive, flexible, and authentic in how you express yourself. You pay \
         attention to the present moment, to aesthetic quality, and to personal values in everyday choices. \
         ISFPs often excel where sensitivity, practical creativity, and a humane approach are needed. You \
         dislike being forced and prefer moving at your natural pace. Harsh criticism and conflict are hard, \
         and big decisions may stall while you try to protect everyone's feelings. Under pressure you may \
         withdraw or lose motivation. Growth comes from a light structure, practicing assertiveness, and \
         setting small realistic targets so your talents turn into visible results.",
    )),
    ("INFP", entry(
        "Mediator",
        "Reflective, empathetic, and guided by strong personal values.",
        "As an INFP you tend to be values-driven, empathetic, and authentic. You choose what fits your \
         principles and are highly sensitive to meaning, fairness, and emotion. INFPs often excel in creative \
         work, roles that call for empathy, or work that leaves room for reflection and good relationships. \
         Conflict can be difficult, doubt creeps in when you want to be right by your values, and tasks that \
         feel meaningless get postponed. In a team you can be a wise balancing voice, provided you explain \
         your boundaries and working preferences so you are not misread. Growth comes from light structure \
         such as routines and time-boxes, the courage to voice opinions, and a habit of finishing before \
         polishing.",
    )),
    ("INTP", entry(
        "Thinker",
        "Deeply curious, logical, and drawn to understanding concepts.",
        "As an INTP you tend to think conceptually and analytically, drawn to patterns, theories, and \
         explanations that hold together logically. You enjoy exploring an idea from every side, testing \
         assumptions, and refining your thinking until it is consistent. INTPs often shine when given room \
         for research, problem solving, and designing elegant solutions. A common challenge is delaying \
         execution while waiting for perfect understanding, or losing energy when a procedure feels \
         irrational. Socially you can be warm and funny, yet you still need time alone to recharge and \
         process. The key to growth is balancing depth of analysis with small, consistent execution habits \
         such as time-boxing, and practicing more explicit communication so others can follow your ideas.",
    )),
    ("ESTP", entry(
        "Entrepreneur",
        "Bold, fast, and comfortable deciding in the thick of things.",
        "As an ESTP you tend to be quick, daring, and responsive. You make practical decisions fast, seize \
         opportunities, and act when action is needed. ESTPs often excel in dynamic roles: negotiation, \
         sales, crisis handling, field operations, or anything that requires rapid adaptation. You enjoy a \
         challenge and solve problems by doing. Risks include acting without weighing the long term, \
         impatience with detail, or sounding too blunt. Under pressure you may become impulsive or overlook \
         how people feel. Growth comes from pausing before big decisions, adding a review habit, and keeping \
         a minimal structure so your speed produces steadier outcomes.",
    )),
    ("ESFP", entry(
        "Entertainer",
        "Energetic, social, and a source of positive atmosphere.",
        "As an ESFP you tend to be friendly, expressive, and bring positive energy wherever you go. You \
         enjoy interaction, put people at ease, and live in the moment. ESFPs often excel in communication, \
         service, presenting, events, or any work that rewards social skill. You read the room quickly and \
         can be the connector who makes a team warmer. Consistency and long-term focus are the usual \
         challenge, especially when tasks feel repetitive. Under pressure you may sidestep problems or look \
         for distractions. Growth comes from a light routine with three daily priorities, time management \
         practice, and clear targets so your energy also produces measurable results.",
    )),
    ("ENFP", entry(
        "Campaigner",
        "Creative, enthusiastic, and quick to connect with people.",
        "As an ENFP you tend to be enthusiastic, creative, and easily connected to many people. You spot \
         opportunities, see potential in others, and liven things up with ideas and positive energy. ENFPs \
         often excel in communication, creative work, community building, and inspiring change. You value \
         freedom and meaning, so you work best when the goal fits your values. Staying consistent, finishing \
         monotonous work, and deciding among too many options can be hard. Under pressure you may get \
         distracted or emotional. Growth comes from a simple system of daily priorities and time-boxes, \
         focusing on one or two main goals, and a regular review rhythm so ideas become progress.",
    )),
    ("ENTP", entry(
        "Debater",
        "Inventive, healthily argumentative, and eager to explore new ideas.",
        "As an ENTP you tend to be inventive, quick to grasp ideas, and fond of exploring possibilities. You \
         are drawn to discussion, healthy debate, and finding better ways to do things. ENTPs often excel at \
         brainstorming, strategy, persuasive communication, and creative problem solving. You handle change \
         well and often see opportunity where others see obstacles. Challenges include jumping between \
         interests, leaving work unfinished for the next new thing, or seeming too combative to sensitive \
         colleagues. Under pressure you may become impulsive or argumentative. Growth comes from execution \
         discipline with time-boxes and checklists, empathy in debate, and closing small decisions so your \
         best ideas actually ship.",
    )),
    ("ESTJ", entry(
        "Executive",
        "Decisive, organized, and focused on results and order.",
        "As an ESTJ you tend to be decisive, organized, and results-focused. You like structure, clear \
         rules, and efficient processes. ESTJs often excel in management, operations, team coordination, and \
         making sure standards and timelines are met. You are comfortable making decisions and setting \
         expectations. Friction appears when others do not share your standards or when a situation calls \
         for more flexibility and empathy. Under pressure you may seem harsh or controlling. Growth comes \
         from a more coaching style of communication, leaving room for discussion, and balancing firmness \
         with listening so your leadership is both effective and welcomed.",
    )),
    ("ESFJ", entry(
        "Consul",
        "Friendly, supportive, and a keeper of community harmony.",
        "As an ESFJ you tend to be supportive, cooperative, and protective of social harmony. You notice \
         what people need, organize activities, and make sure everyone feels included. ESFJs often excel in \
         service, coordination, community, people operations, or settings that need strong relationships and \
         order. You are comfortable with clear routines and enjoy watching others grow. The usual traps are \
         worrying too much about others' opinions, struggling to say no, or avoiding conflicts that need \
         resolving. Under pressure you may become sensitive to criticism. Growth comes from healthy \
         boundaries, assertiveness, and separating criticism of an action from your own worth.",
    )),
    ("ENFJ", entry(
        "Protagonist",
        "Inspiring, empathetic, and driven to make an impact.",
        "As an ENFJ you tend to be warm, inspiring, and attuned to what others need. You build trust easily, \
         bring people together, and encourage shared growth. ENFJs often excel in people-centered \
         leadership, mentoring, communication, or team management. You read social dynamics and steer a \
         group's energy toward meaningful goals. The risk is carrying other people's emotional load, \
         neglecting your own needs, or feeling crushed when harmony breaks. Under pressure you may over-help \
         or overthink how others see you. Growth comes from healthy boundaries, delegation, and balancing \
         empathy with firmness so your impact stays sustainable.",
    )),
    ("ENTJ", entry(
        "Commander",
        "Visionary, decisive, and at ease setting strategic direction.",
        "As an ENTJ you tend to be decisive, visionary, and results-oriented. You are comfortable leading, \
         setting direction, and building systems that raise performance. ENTJs often excel at strategic \
         planning, decision making, and moving a team toward its targets. You value efficiency and the \
         courage to take responsibility. Patience is a frequent challenge, as is pushing hard when standards \
         slip or overlooking the emotional side that keeps a team going. Under pressure you may dominate or \
         resist feedback. Growth comes from a coaching style of leadership: listening, inviting \
         collaboration, giving the team room to own its part, and balancing speed with relationships.",
    )),
];

pub(super) static TYPES: NarrativeTable<TypeNarrative> = NarrativeTable::new(TYPE_ENTRIES);

const GENERIC_NARRATIVE: &str = "Your type shows a distinctive combination of preferences. Use this \
     report as a map of habits: how you recharge, how you take in information, how you make decisions, \
     and how you pace your work. The strengths, challenges, and growth sections point to the most \
     relevant next steps.";

const FRAMEWORK: &str = "MBTI maps **psychological preferences**, not ability, intelligence, or moral \
     worth. Your type is not a box that limits you but a map of habits that helps you understand your \
     natural patterns. When the percentages on a dimension are close you are likely flexible; when they \
     are far apart you are probably very comfortable on one side and may need deliberate practice to \
     balance the other.";

const STRENGTHS: &[&str] = &[
    "A recognizable working pattern you can rely on when the environment suits your preferences.",
    "A consistent way of understanding problems, so decisions make sense to you.",
    "Strong collaboration potential when role expectations and communication rhythm are clear.",
    "Fast growth when feedback is concrete and there is room to improve the process.",
];

const CHALLENGES: &[&str] = &[
    "Blind spot: getting so comfortable with your own preferences that you miss signals from other styles.",
    "When tired or under pressure, responses can swing to extremes such as withdrawing, over-controlling, overthinking, or people-pleasing.",
    "Style clashes appear when there is no agreement on how to work together (detail versus big picture, fast versus structured).",
    "Miscommunication risk: assuming others process information the way you do.",
];

const COMMUNICATION: &[&str] = &[
    "Use a clear format: context, goal, request, and deadline if there is one.",
    "Ask how the other person prefers to work: details or the outline, discussion first or straight to action.",
    "Leave room for clarification by restating what you understood before acting.",
    "In a conflict, separate facts from interpretation and then agree on the next step.",
];

const TEAMWORK: &[&str] = &[
    "Take roles that use your dominant preferences, and practice one opposite area for balance.",
    "Work in a rhythm: short planning, focused execution, review, small improvement.",
    "Use simple tools such as notes, checklists, and a calendar to stay consistent whatever your type.",
    "Agree as a team on how feedback is given, how priorities are set, and what done means.",
];

const ROUTINES: &[&str] = &[
    "A 10-minute weekly reflection: what worked, what triggered you, and one small improvement for next week.",
    "Practice a 10-second pause before reacting to emotional situations, then choose the most useful response.",
    "Practice written communication: three short points plus a clear next step.",
    "Plan your energy around E/I by scheduling recharge time, quiet or social, as part of being productive.",
];

fn preference(letter: MbtiLetter) -> &'static str {
    match letter {
        MbtiLetter::I => "Energy tends to recover through private time, deep focus, and room to think.",
        MbtiLetter::E => "Energy tends to recover through interaction, discussion, and social stimulation.",
        MbtiLetter::S => "Tends to process information through facts, concrete detail, and direct experience.",
        MbtiLetter::N => "Tends to process information through patterns, ideas, possibilities, and underlying meaning.",
        MbtiLetter::T => "Prefers to weigh decisions through logic, consistency, and clear criteria.",
        MbtiLetter::F => "Prefers to weigh decisions through values, empathy, and the impact on people.",
        MbtiLetter::P => "Likes flexibility, exploring options, and adjusting strategy along the way.",
        MbtiLetter::J => "Likes structure, plans, certainty, and clear closure on decisions.",
    }
}

fn preference_line(code_letter: &str) -> String {
    match MbtiLetter::from_code(code_letter) {
        Some(letter) => format!(
            "- **{code_letter} ({})**: {}",
            letter.label(),
            preference(letter)
        ),
        None => format!("- **{code_letter} ({code_letter})**: {code_letter}"),
    }
}

fn dominance_line(split: &DimensionSplit) -> String {
    let (letter, pct, name) = split.leader();
    let (other_letter, other_name) = split.trailer();
    format!(
        "**{} vs {}**: leans toward **{name} ({letter})** at about **{pct:.0}%** (versus {other_name} / {other_letter}).",
        split.name_a, split.name_b
    )
}

pub(super) fn compose(code: &str, splits: &[DimensionSplit]) -> ReportContent {
    let (name, tagline, narrative) = match TYPES.get(code) {
        Some(entry) => (entry.name, entry.tagline, entry.narrative),
        None if code.is_empty() => ("Unclassified", "", GENERIC_NARRATIVE),
        None => (code, "", GENERIC_NARRATIVE),
    };

    let preferences: Vec<String> = code
        .chars()
        .map(|letter| preference_line(&letter.to_string()))
        .collect();

    let mut dominance: Vec<String> = splits.iter().map(dominance_line).collect();
    if dominance.is_empty() {
        dominance.push("No dimension data was recorded for this result.".to_string());
    }

    let title = format!("{code} ({name})");
    let summary_md = format!(
        "**{title}**\n\n{narrative}\n\n*Tagline:* {tagline}\n\n{FRAMEWORK}\n\n\
         **Your preferences at a glance:**\n{}\n\n\
         **Dimension dominance (based on your answers):**\n{}",
        preferences.join("\n"),
        dominance
            .iter()
            .map(|line| format!("- {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
    );

    ReportContent {
        title,
        subtitle: tagline.to_string(),
        summary_md,
        sections: vec![
            ReportSection::new("Preference Summary", dominance),
            ReportSection::new("Core Strengths", STRENGTHS.iter().copied()),
            ReportSection::new("Common Challenges", CHALLENGES.iter().copied()),
            ReportSection::new("Communication Tips", COMMUNICATION.iter().copied()),
            ReportSection::new("Career & Teamwork", TEAMWORK.iter().copied()),
            ReportSection::new("Personal Growth Routines", ROUTINES.iter().copied()),
        ],
    }
}
