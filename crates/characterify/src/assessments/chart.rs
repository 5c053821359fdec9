//! Chart-ready series derived from a stored result.
//!
//! Only `chart_kind` and `percentages` are read, so replayed history renders exactly as it
//! did when first scored.

use serde::{Deserialize, Serialize};

use super::domain::ChartKind;
use super::scoring::ScoreResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedRow {
    pub label: String,
    pub name_a: String,
    pub pct_a: f64,
    pub name_b: String,
    pub pct_b: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSeries {
    Stacked { rows: Vec<StackedRow> },
    Bars { labels: Vec<String>, values: Vec<f64> },
}

impl ScoreResult {
    pub fn chart(&self) -> ChartSeries {
        match self.chart_kind {
            ChartKind::MbtiStacked => ChartSeries::Stacked {
                rows: self
                    .percentages
                    .dimensions()
                    .iter()
                    .map(|split| StackedRow {
                        label: format!("{}/{}", split.a, split.b),
                        name_a: split.name_a.clone(),
                        pct_a: split.pct_a,
                        name_b: split.name_b.clone(),
                        pct_b: split.pct_b,
                    })
                    .collect(),
            },
            ChartKind::Barh => {
                let shares = self.percentages.shares();
                ChartSeries::Bars {
                    labels: shares.iter().map(|share| share.label.clone()).collect(),
                    values: shares.iter().map(|share| share.pct).collect(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::assessments::domain::{AnswerSet, TestId};
    use crate::assessments::scoring::Scorer;

    use super::*;

    #[test]
    fn mbti_renders_one_row_per_pair() {
        let result = Scorer::new().score_test(TestId::Mbti, &AnswerSet::new());
        let ChartSeries::Stacked { rows } = result.chart() else {
            panic!("mbti should stack");
        };
        let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["I/E", "N/S", "T/F", "P/J"]);
        assert_eq!(rows[2].name_b, "Feeling");
    }

    #[test]
    fn other_tests_render_bars_in_canonical_order() {
        let answers = AnswerSet::from_values([5, 1, 2, 3]).expect("valid answers");
        let result = Scorer::new().score_test(TestId::Temperament, &answers);
        match result.chart() {
            ChartSeries::Bars { labels, values } => {
                assert_eq!(labels, vec!["Sanguine", "Choleric", "Phlegmatic", "Melancholic"]);
                assert_eq!(values.len(), 4);
                assert!((values.iter().sum::<f64>() - 100.0).abs() < 0.01);
                assert!((values[0] - 5.0 / 11.0 * 100.0).abs() < 1e-9);
            }
            other => panic!("expected bars, got {other:?}"),
        }
    }

    #[test]
    fn series_serializes_with_kind_tag() {
        let result = Scorer::new().score_test(TestId::Ocean, &AnswerSet::new());
        let json = serde_json::to_value(result.chart()).expect("serializes");
        assert_eq!(json["kind"], "bars");
        assert_eq!(json["labels"][0], "Openness");
    }
}
