//! Deterministic scoring for the four questionnaires.
//!
//! Each test walks its typed question table by index, sums the Likert values per tag, and
//! classifies the totals. The composed narrative is attached so a [`ScoreResult`] is a
//! self-contained, serializable snapshot that can be stored and replayed as-is.

mod dominant;
mod mbti;
mod ocean;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::bank::{
    enneagram as enneagram_bank, mbti as mbti_bank, ocean as ocean_bank,
    temperament as temperament_bank,
};
use super::domain::{AnswerSet, AssessmentError, ChartKind, TestId};
use super::report::{self, ReportContent};
use super::traits::{EnneagramType, MbtiLetter, OceanTrait, TemperamentType, TraitTotals};

/// One opposed MBTI axis with the share of each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSplit {
    pub a: String,
    pub b: String,
    pub name_a: String,
    pub name_b: String,
    pub pct_a: f64,
    pub pct_b: f64,
}

impl DimensionSplit {
    /// Winning side as `(letter, pct, name)`; the first side wins an even split.
    pub fn leader(&self) -> (&str, f64, &str) {
        if self.pct_a >= self.pct_b {
            (self.a.as_str(), self.pct_a, self.name_a.as_str())
        } else {
            (self.b.as_str(), self.pct_b, self.name_b.as_str())
        }
    }

    /// Losing side as `(letter, name)`.
    pub fn trailer(&self) -> (&str, &str) {
        if self.pct_a >= self.pct_b {
            (self.b.as_str(), self.name_b.as_str())
        } else {
            (self.a.as_str(), self.name_a.as_str())
        }
    }
}

/// A tag's share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitShare {
    pub tag: String,
    pub label: String,
    pub pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Percentages {
    Dimensions(Vec<DimensionSplit>),
    Shares(Vec<TraitShare>),
}

impl Percentages {
    pub fn dimensions(&self) -> &[DimensionSplit] {
        match self {
            Self::Dimensions(splits) => splits,
            Self::Shares(_) => &[],
        }
    }

    pub fn shares(&self) -> &[TraitShare] {
        match self {
            Self::Dimensions(_) => &[],
            Self::Shares(shares) => shares,
        }
    }

    pub fn share_of(&self, tag: &str) -> Option<f64> {
        self.shares()
            .iter()
            .find(|share| share.tag == tag)
            .map(|share| share.pct)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub test_id: TestId,
    pub result_type: String,
    pub scores: BTreeMap<String, u32>,
    pub percentages: Percentages,
    pub chart_kind: ChartKind,
    pub content: ReportContent,
}

/// Stateless scorer over the built-in question tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores answers for a raw test id, rejecting ids outside the closed set.
    pub fn score(&self, test_id: &str, answers: &AnswerSet) -> Result<ScoreResult, AssessmentError> {
        let test: TestId = test_id.parse()?;
        Ok(self.score_test(test, answers))
    }

    pub fn score_test(&self, test: TestId, answers: &AnswerSet) -> ScoreResult {
        let (result_type, scores, percentages) = match test {
            TestId::Mbti => {
                let totals = TraitTotals::<MbtiLetter>::accumulate(mbti_bank::QUESTIONS, answers);
                let (code, splits) = mbti::classify(&totals);
                (code, totals.to_score_map(), Percentages::Dimensions(splits))
            }
            TestId::Ocean => {
                let totals = TraitTotals::<OceanTrait>::accumulate(ocean_bank::QUESTIONS, answers);
                (
                    ocean::classify(&totals),
                    totals.to_score_map(),
                    Percentages::Shares(dominant::shares(&totals)),
                )
            }
            TestId::Enneagram => {
                let totals =
                    TraitTotals::<EnneagramType>::accumulate(enneagram_bank::QUESTIONS, answers);
                (
                    dominant::classify(&totals),
                    totals.to_score_map(),
                    Percentages::Shares(dominant::shares(&totals)),
                )
            }
            TestId::Temperament => {
                let totals = TraitTotals::<TemperamentType>::accumulate(
                    temperament_bank::QUESTIONS,
                    answers,
                );
                (
                    dominant::classify(&totals),
                    totals.to_score_map(),
                    Percentages::Shares(dominant::shares(&totals)),
                )
            }
        };

        debug!(
            test = %test,
            result_type = %result_type,
            answered = answers.answered(),
            "scored assessment"
        );

        let content = report::compose(test, &result_type, &scores, &percentages);

        ScoreResult {
            test_id: test,
            result_type,
            scores,
            percentages,
            chart_kind: test.chart_kind(),
            content,
        }
    }
}
