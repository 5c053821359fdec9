//! Static question tables and display metadata for the four questionnaires.
//!
//! Each test keeps a typed `(tag, prompt)` table that the scorer walks by index; the
//! public [`TestDefinition`] is derived from the same table so the two never drift.

pub(crate) mod enneagram;
pub(crate) mod mbti;
pub(crate) mod ocean;
pub(crate) mod temperament;

use super::domain::{AssessmentError, ScaleType, TestId};
use super::traits::TraitTag;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub trait_tag: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TestDefinition {
    pub id: TestId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub instructions: Vec<&'static str>,
    pub questions: Vec<Question>,
    pub scale_type: ScaleType,
}

impl TestDefinition {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn summary(&self) -> TestSummaryView {
        TestSummaryView {
            id: self.id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            question_count: self.question_count(),
            scale_type: self.scale_type,
        }
    }
}

/// Listing entry without the question payload.
#[derive(Debug, Clone, Serialize)]
pub struct TestSummaryView {
    pub id: TestId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub question_count: usize,
    pub scale_type: ScaleType,
}

pub(crate) struct TestMetadata {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub instructions: &'static [&'static str],
}

#[derive(Debug)]
pub struct QuestionBank {
    tests: Vec<TestDefinition>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        let tests = TestId::ordered()
            .into_iter()
            .map(|id| match id {
                TestId::Mbti => build_definition(id, &mbti::METADATA, mbti::QUESTIONS),
                TestId::Ocean => build_definition(id, &ocean::METADATA, ocean::QUESTIONS),
                TestId::Enneagram => {
                    build_definition(id, &enneagram::METADATA, enneagram::QUESTIONS)
                }
                TestId::Temperament => {
                    build_definition(id, &temperament::METADATA, temperament::QUESTIONS)
                }
            })
            .collect();

        Self { tests }
    }

    pub fn list_tests(&self) -> &[TestDefinition] {
        &self.tests
    }

    pub fn get_test(&self, id: TestId) -> &TestDefinition {
        &self.tests[id.index()]
    }

    pub fn find_test(&self, raw: &str) -> Result<&TestDefinition, AssessmentError> {
        let id: TestId = raw.parse()?;
        Ok(self.get_test(id))
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}

fn build_definition<T: TraitTag>(
    id: TestId,
    metadata: &TestMetadata,
    table: &[(T, &'static str)],
) -> TestDefinition {
    TestDefinition {
        id,
        title: metadata.title,
        subtitle: metadata.subtitle,
        description: metadata.description,
        instructions: metadata.instructions.to_vec(),
        questions: table
            .iter()
            .map(|(tag, text)| Question {
                trait_tag: tag.code(),
                text: *text,
            })
            .collect(),
        scale_type: ScaleType::Likert5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessments::traits::{EnneagramType, MbtiLetter, OceanTrait, TemperamentType};

    fn count_tag<T: TraitTag>(table: &[(T, &str)], tag: T) -> usize {
        table.iter().filter(|(candidate, _)| *candidate == tag).count()
    }

    #[test]
    fn lists_tests_in_canonical_order() {
        let bank = QuestionBank::standard();
        let ids: Vec<TestId> = bank.list_tests().iter().map(|test| test.id).collect();
        assert_eq!(ids, TestId::ordered().to_vec());
        for id in TestId::ordered() {
            assert_eq!(bank.get_test(id).id, id);
        }
    }

    #[test]
    fn find_test_rejects_unknown_ids() {
        let bank = QuestionBank::standard();
        assert_eq!(
            bank.find_test("temperament").expect("known test").id,
            TestId::Temperament
        );
        assert!(matches!(
            bank.find_test("disc"),
            Err(AssessmentError::UnknownTest(raw)) if raw == "disc"
        ));
    }

    #[test]
    fn question_tables_are_balanced_per_tag() {
        for letter in MbtiLetter::ALL {
            assert_eq!(count_tag(mbti::QUESTIONS, *letter), 5, "{letter:?}");
        }
        for dimension in OceanTrait::ALL {
            assert_eq!(count_tag(ocean::QUESTIONS, *dimension), 8, "{dimension:?}");
        }
        for kind in EnneagramType::ALL {
            assert_eq!(count_tag(enneagram::QUESTIONS, *kind), 5, "{kind:?}");
        }
        for kind in TemperamentType::ALL {
            assert_eq!(count_tag(temperament::QUESTIONS, *kind), 6, "{kind:?}");
        }
    }

    #[test]
    fn definitions_mirror_typed_tables() {
        let bank = QuestionBank::standard();
        let definition = bank.get_test(TestId::Mbti);
        assert_eq!(definition.question_count(), mbti::QUESTIONS.len());
        for (question, (tag, text)) in definition.questions.iter().zip(mbti::QUESTIONS) {
            assert_eq!(question.trait_tag, tag.code());
            assert_eq!(question.text, *text);
        }

        for test in bank.list_tests() {
            assert_eq!(test.scale_type, ScaleType::Likert5);
            assert!(!test.instructions.is_empty());
            assert!(test.questions.iter().all(|q| !q.text.trim().is_empty()));
            assert!(test.question_count() <= 70);
        }
    }

    #[test]
    fn summary_omits_questions() {
        let bank = QuestionBank::standard();
        let summary = bank.get_test(TestId::Enneagram).summary();
        assert_eq!(summary.question_count, 45);
        let json = serde_json::to_value(&summary).expect("serializes");
        assert!(json.get("questions").is_none());
        assert_eq!(json["id"], "enneagram");
    }
}
