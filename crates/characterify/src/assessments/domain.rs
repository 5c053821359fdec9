use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Highest value on the 5-point agreement scale. Zero marks an unanswered item.
pub const LIKERT_MAX: u8 = 5;

/// The closed set of questionnaires the engine knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestId {
    Mbti,
    Ocean,
    Enneagram,
    Temperament,
}

impl TestId {
    pub const fn ordered() -> [Self; 4] {
        [Self::Mbti, Self::Ocean, Self::Enneagram, Self::Temperament]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mbti => "mbti",
            Self::Ocean => "ocean",
            Self::Enneagram => "enneagram",
            Self::Temperament => "temperament",
        }
    }

    pub const fn chart_kind(self) -> ChartKind {
        match self {
            Self::Mbti => ChartKind::MbtiStacked,
            Self::Ocean | Self::Enneagram | Self::Temperament => ChartKind::Barh,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestId {
    type Err = AssessmentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| AssessmentError::UnknownTest(raw.to_string()))
    }
}

/// How a result should be drawn by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    MbtiStacked,
    Barh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Likert5,
}

/// Answers keyed by 0-based question index.
///
/// Values are limited to `0..=5`; out-of-range values are rejected on insert and on
/// deserialization so the scorer can trust every stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<usize, u8>", into = "BTreeMap<usize, u8>")]
pub struct AnswerSet(BTreeMap<usize, u8>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an answer set from values listed in question order.
    pub fn from_values<I>(values: I) -> Result<Self, AssessmentError>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut answers = Self::new();
        for (index, value) in values.into_iter().enumerate() {
            answers.record(index, value)?;
        }
        Ok(answers)
    }

    pub fn record(&mut self, index: usize, value: u8) -> Result<(), AssessmentError> {
        if value > LIKERT_MAX {
            return Err(AssessmentError::AnswerOutOfRange { index, value });
        }
        self.0.insert(index, value);
        Ok(())
    }

    /// Value for a question, 0 when it was never answered.
    pub fn value(&self, index: usize) -> u8 {
        self.0.get(&index).copied().unwrap_or(0)
    }

    pub fn answered(&self) -> usize {
        self.0.values().filter(|value| **value > 0).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0.iter().map(|(index, value)| (*index, *value))
    }
}

impl TryFrom<BTreeMap<usize, u8>> for AnswerSet {
    type Error = AssessmentError;

    fn try_from(raw: BTreeMap<usize, u8>) -> Result<Self, Self::Error> {
        let mut answers = Self::new();
        for (index, value) in raw {
            answers.record(index, value)?;
        }
        Ok(answers)
    }
}

impl From<AnswerSet> for BTreeMap<usize, u8> {
    fn from(answers: AnswerSet) -> Self {
        answers.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("unknown test id '{0}'")]
    UnknownTest(String),
    #[error("answer {value} for question {index} is outside the 0..=5 scale")]
    AnswerOutOfRange { index: usize, value: u8 },
    #[error("question {index} does not exist (test has {count} questions)")]
    QuestionOutOfRange { index: usize, count: usize },
}
