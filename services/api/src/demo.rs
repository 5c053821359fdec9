use crate::commands::{open_service, render_outcome};
use characterify::assessments::{
    AnswerSet, AssessmentService, HistoryRepository, SessionStore, TestId, LIKERT_MAX,
};
use characterify::error::AppError;
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only run the demo for one questionnaire.
    #[arg(long)]
    pub(crate) test: Option<TestId>,
    /// Offset applied to the synthetic answer pattern; different seeds give different types.
    #[arg(long, default_value_t = 0)]
    pub(crate) seed: u8,
    /// Record each demo result in history.
    #[arg(long)]
    pub(crate) save: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { test, seed, save } = args;
    let service = open_service()?;

    println!("Characterify questionnaire demo (seed {seed})");
    let tests: Vec<TestId> = match test {
        Some(test) => vec![test],
        None => TestId::ordered().to_vec(),
    };
    demo_tests(&service, &tests, seed, save)?;
    Ok(())
}

/// Scores each test in turn; the first scoring or save failure stops the demo.
pub(crate) fn demo_tests<H, S>(
    service: &AssessmentService<H, S>,
    tests: &[TestId],
    seed: u8,
    save: bool,
) -> Result<usize, AppError>
where
    H: HistoryRepository + 'static,
    S: SessionStore + 'static,
{
    for test in tests {
        let definition = service.test(test.as_str())?;
        let answers = synthetic_answers(definition.question_count(), seed)?;
        println!(
            "\n=== {} ({} of {} questions answered) ===\n",
            definition.title,
            answers.answered(),
            definition.question_count()
        );

        let outcome = service.score(test.as_str(), &answers, save)?;
        println!("{}", render_outcome(&outcome));
        if let Some(id) = outcome.history_id {
            println!("\nSaved as history entry #{id}");
        }
    }

    Ok(tests.len())
}

/// Deterministic 1..=5 answers that vary with the question index and the seed.
pub(crate) fn synthetic_answers(count: usize, seed: u8) -> Result<AnswerSet, AppError> {
    let values = (0..count).map(|index| {
        let step = (index * 7 + index / 3 + usize::from(seed)) % usize::from(LIKERT_MAX);
        step as u8 + 1
    });
    Ok(AnswerSet::from_values(values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryHistoryRepository, InMemorySessionStore};
    use characterify::assessments::{HistoryEntry, HistoryError, HistoryId, HistoryRecord, Scorer};
    use std::sync::Arc;

    struct ReadOnlyHistory;

    impl HistoryRepository for ReadOnlyHistory {
        fn insert(&self, _entry: HistoryEntry) -> Result<HistoryRecord, HistoryError> {
            Err(HistoryError::Unavailable("history is read-only".to_string()))
        }

        fn restore(&self, _record: HistoryRecord) -> Result<(), HistoryError> {
            Err(HistoryError::Unavailable("history is read-only".to_string()))
        }

        fn fetch(&self, _id: HistoryId) -> Result<Option<HistoryRecord>, HistoryError> {
            Ok(None)
        }

        fn list(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
            Ok(Vec::new())
        }

        fn delete(&self, _id: HistoryId) -> Result<(), HistoryError> {
            Err(HistoryError::NotFound)
        }

        fn clear(&self) -> Result<usize, HistoryError> {
            Ok(0)
        }
    }

    #[test]
    fn demo_saves_every_test() {
        let history = Arc::new(InMemoryHistoryRepository::default());
        let service =
            AssessmentService::new(history.clone(), Arc::new(InMemorySessionStore::default()));
        let ran = demo_tests(&service, &TestId::ordered(), 1, true).expect("demo runs");
        assert_eq!(ran, 4);
        assert_eq!(history.list().expect("list").len(), 4);
    }

    #[test]
    fn demo_fails_when_results_cannot_be_saved() {
        let service = AssessmentService::new(
            Arc::new(ReadOnlyHistory),
            Arc::new(InMemorySessionStore::default()),
        );
        let err = demo_tests(&service, &[TestId::Ocean], 0, true).expect_err("save fails");
        assert!(matches!(err, AppError::History(HistoryError::Unavailable(_))));

        assert_eq!(
            demo_tests(&service, &[TestId::Ocean], 0, false).expect("unsaved demo runs"),
            1
        );
    }

    #[test]
    fn synthetic_answers_cover_every_question_within_scale() {
        let answers = synthetic_answers(45, 3).expect("valid answers");
        assert_eq!(answers.len(), 45);
        assert_eq!(answers.answered(), 45);
        assert!(answers.iter().all(|(_, value)| (1..=5).contains(&value)));
    }

    #[test]
    fn seeds_change_the_pattern_but_not_determinism() {
        let first = synthetic_answers(40, 0).expect("valid answers");
        let again = synthetic_answers(40, 0).expect("valid answers");
        let shifted = synthetic_answers(40, 2).expect("valid answers");
        assert_eq!(first, again);
        assert_ne!(first, shifted);

        let scorer = Scorer::new();
        assert_eq!(
            scorer.score_test(TestId::Mbti, &first),
            scorer.score_test(TestId::Mbti, &again)
        );
    }
}
