use super::domain::AnswerSet;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// A scoring bucket within one test's closed vocabulary.
///
/// `ALL` lists the tags in canonical order; that order drives iteration, chart series,
/// and every first-seen tie-break.
pub trait TraitTag: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn code(self) -> &'static str;
    fn label(self) -> &'static str;
    fn index(self) -> usize;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MbtiLetter {
    I,
    E,
    N,
    S,
    T,
    F,
    P,
    J,
}

impl TraitTag for MbtiLetter {
    const ALL: &'static [Self] = &[
        Self::I,
        Self::E,
        Self::N,
        Self::S,
        Self::T,
        Self::F,
        Self::P,
        Self::J,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::E => "E",
            Self::N => "N",
            Self::S => "S",
            Self::T => "T",
            Self::F => "F",
            Self::P => "P",
            Self::J => "J",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::I => "Introvert",
            Self::E => "Extrovert",
            Self::N => "Intuitive",
            Self::S => "Sensing",
            Self::T => "Thinking",
            Self::F => "Feeling",
            Self::P => "Perceiving",
            Self::J => "Judging",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The four opposed MBTI axes. The first letter of each pair wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MbtiPair {
    Energy,
    Perception,
    Judgment,
    Lifestyle,
}

impl MbtiPair {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Energy,
            Self::Perception,
            Self::Judgment,
            Self::Lifestyle,
        ]
    }

    pub const fn letters(self) -> (MbtiLetter, MbtiLetter) {
        match self {
            Self::Energy => (MbtiLetter::I, MbtiLetter::E),
            Self::Perception => (MbtiLetter::N, MbtiLetter::S),
            Self::Judgment => (MbtiLetter::T, MbtiLetter::F),
            Self::Lifestyle => (MbtiLetter::P, MbtiLetter::J),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OceanTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl TraitTag for OceanTrait {
    const ALL: &'static [Self] = &[
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Neuroticism,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Openness => "O",
            Self::Conscientiousness => "C",
            Self::Extraversion => "E",
            Self::Agreeableness => "A",
            Self::Neuroticism => "N",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnneagramType {
    Reformer,
    Helper,
    Achiever,
    Individualist,
    Investigator,
    Loyalist,
    Enthusiast,
    Challenger,
    Peacemaker,
}

impl TraitTag for EnneagramType {
    const ALL: &'static [Self] = &[
        Self::Reformer,
        Self::Helper,
        Self::Achiever,
        Self::Individualist,
        Self::Investigator,
        Self::Loyalist,
        Self::Enthusiast,
        Self::Challenger,
        Self::Peacemaker,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Reformer => "1",
            Self::Helper => "2",
            Self::Achiever => "3",
            Self::Individualist => "4",
            Self::Investigator => "5",
            Self::Loyalist => "6",
            Self::Enthusiast => "7",
            Self::Challenger => "8",
            Self::Peacemaker => "9",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Reformer => "The Reformer",
            Self::Helper => "The Helper",
            Self::Achiever => "The Achiever",
            Self::Individualist => "The Individualist",
            Self::Investigator => "The Investigator",
            Self::Loyalist => "The Loyalist",
            Self::Enthusiast => "The Enthusiast",
            Self::Challenger => "The Challenger",
            Self::Peacemaker => "The Peacemaker",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperamentType {
    Sanguine,
    Choleric,
    Phlegmatic,
    Melancholic,
}

impl TraitTag for TemperamentType {
    const ALL: &'static [Self] = &[
        Self::Sanguine,
        Self::Choleric,
        Self::Phlegmatic,
        Self::Melancholic,
    ];

    fn code(self) -> &'static str {
        match self {
            Self::Sanguine => "S",
            Self::Choleric => "C",
            Self::Phlegmatic => "P",
            Self::Melancholic => "M",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sanguine => "Sanguine",
            Self::Choleric => "Choleric",
            Self::Phlegmatic => "Phlegmatic",
            Self::Melancholic => "Melancholic",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Closed per-test accumulator: one slot per tag, all starting at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitTotals<T: TraitTag> {
    totals: Vec<u32>,
    _tags: PhantomData<T>,
}

impl<T: TraitTag> Default for TraitTotals<T> {
    fn default() -> Self {
        Self {
            totals: vec![0; T::ALL.len()],
            _tags: PhantomData,
        }
    }
}

impl<T: TraitTag> TraitTotals<T> {
    /// Sums answers over a question table. Indices the table does not cover are ignored
    /// and unanswered questions contribute nothing.
    pub fn accumulate(questions: &[(T, &str)], answers: &AnswerSet) -> Self {
        let mut totals = Self::default();
        for (index, (tag, _)) in questions.iter().enumerate() {
            totals.add(*tag, u32::from(answers.value(index)));
        }
        totals
    }

    pub fn add(&mut self, tag: T, value: u32) {
        self.totals[tag.index()] += value;
    }

    pub fn get(&self, tag: T) -> u32 {
        self.totals[tag.index()]
    }

    pub fn grand_total(&self) -> u32 {
        self.totals.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, u32)> + '_ {
        T::ALL.iter().map(|tag| (*tag, self.get(*tag)))
    }

    /// Tags by total, highest first. Equal totals keep canonical order.
    pub fn ranked(&self) -> Vec<(T, u32)> {
        let mut ranked: Vec<(T, u32)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Highest total; the earliest tag in canonical order wins a tie.
    pub fn dominant(&self) -> T {
        let mut best = T::ALL[0];
        for (tag, total) in self.iter() {
            if total > self.get(best) {
                best = tag;
            }
        }
        best
    }

    /// Percentage share of the grand total for each tag, in canonical order.
    /// An all-zero set yields zero for every tag.
    pub fn shares(&self) -> Vec<(T, f64)> {
        let denominator = f64::from(self.grand_total().max(1));
        self.iter()
            .map(|(tag, total)| (tag, f64::from(total) / denominator * 100.0))
            .collect()
    }

    pub fn to_score_map(&self) -> BTreeMap<String, u32> {
        self.iter()
            .map(|(tag, total)| (tag.code().to_string(), total))
            .collect()
    }
}
