use crate::infra::{HistoryStore, InMemorySessionStore};
use characterify::assessments::{
    AnswerSet, AssessmentService, ChartSeries, HistoryId, ScoreOutcome, TestDefinition,
};
use characterify::config::AppConfig;
use characterify::error::AppError;
use clap::{Args, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) type CliService = AssessmentService<HistoryStore, InMemorySessionStore>;

#[derive(Subcommand, Debug)]
pub(crate) enum TestsCommand {
    /// List the available questionnaires
    List,
    /// Print instructions and questions for one questionnaire
    Show { test_id: String },
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Questionnaire id (mbti, ocean, enneagram, temperament)
    pub(crate) test_id: String,
    /// JSON file with answers, either `[4, 2, ...]` or `{"0": 4, "1": 2}`
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Record the result in history
    #[arg(long)]
    pub(crate) save: bool,
    /// Print the raw result as JSON instead of the rendered report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum HistoryCommand {
    /// List saved results, newest first
    List,
    /// Replay one saved result
    Show { id: HistoryId },
    /// Export saved results
    Export(ExportArgs),
    /// Import results from a JSON export, keeping their ids
    Import { path: PathBuf },
    /// Delete one saved result
    Delete { id: HistoryId },
    /// Delete every saved result
    Clear,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub(crate) format: ExportFormat,
    /// Destination file (stdout when omitted)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExportFormat {
    Json,
    Csv,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerFile {
    Listed(Vec<u8>),
    Indexed(AnswerSet),
}

pub(crate) fn open_service() -> Result<CliService, AppError> {
    let config = AppConfig::load()?;
    let history = HistoryStore::from_config(&config.storage);
    Ok(AssessmentService::new(
        Arc::new(history),
        Arc::new(InMemorySessionStore::default()),
    ))
}

pub(crate) fn run_tests(command: TestsCommand) -> Result<(), AppError> {
    let service = open_service()?;
    match command {
        TestsCommand::List => {
            for summary in service.list_tests() {
                println!(
                    "{:<12} {} ({}) - {} questions",
                    summary.id, summary.title, summary.subtitle, summary.question_count
                );
            }
        }
        TestsCommand::Show { test_id } => {
            let definition = service.test(&test_id)?;
            println!("{}", render_definition(definition));
        }
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        test_id,
        answers,
        save,
        json,
    } = args;

    let service = open_service()?;
    let answers = load_answers(&answers)?;
    let outcome = service.score(&test_id, &answers, save)?;

    if json {
        println!("{}", to_pretty_json(&outcome)?);
    } else {
        println!("{}", render_outcome(&outcome));
    }
    if let Some(id) = outcome.history_id {
        println!("Saved as history entry #{id}");
    }
    Ok(())
}

pub(crate) fn run_history(command: HistoryCommand) -> Result<(), AppError> {
    let service = open_service()?;
    let history = service.history();
    match command {
        HistoryCommand::List => {
            let records = history.list()?;
            if records.is_empty() {
                println!("No saved results.");
            }
            for record in records {
                println!(
                    "#{:<5} {:<12} {:<8} {}",
                    record.id,
                    record.test_type,
                    record.result_type,
                    record.created_at.format("%Y-%m-%d %H:%M")
                );
            }
        }
        HistoryCommand::Show { id } => {
            let outcome = service.replay(id)?;
            println!("{}", render_outcome(&outcome));
        }
        HistoryCommand::Export(ExportArgs { format, out }) => {
            let rows = match &out {
                Some(path) => export(&service, format, BufWriter::new(File::create(path)?))?,
                None => export(&service, format, io::stdout().lock())?,
            };
            if let Some(path) = out {
                println!("Exported {rows} results to {}", path.display());
            }
        }
        HistoryCommand::Import { path } => {
            let reader = BufReader::new(File::open(&path)?);
            let rows = history.import_json(reader)?;
            println!("Imported {rows} results from {}", path.display());
        }
        HistoryCommand::Delete { id } => {
            history.delete(id)?;
            println!("Deleted history entry #{id}");
        }
        HistoryCommand::Clear => {
            let removed = history.clear()?;
            println!("Deleted {removed} history entries");
        }
    }
    Ok(())
}

fn export<W: io::Write>(
    service: &CliService,
    format: ExportFormat,
    writer: W,
) -> Result<usize, AppError> {
    let rows = match format {
        ExportFormat::Json => service.history().export_json(writer)?,
        ExportFormat::Csv => service.history().export_csv(writer)?,
    };
    Ok(rows)
}

pub(crate) fn load_answers(path: &Path) -> Result<AnswerSet, AppError> {
    let raw = fs::read(path)?;
    let parsed: AnswerFile = serde_json::from_slice(&raw).map_err(|err| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("{} is not a valid answer file: {err}", path.display()),
        )
    })?;
    match parsed {
        AnswerFile::Listed(values) => Ok(AnswerSet::from_values(values)?),
        AnswerFile::Indexed(answers) => Ok(answers),
    }
}

pub(crate) fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|err| io::Error::new(ErrorKind::InvalidData, err).into())
}

pub(crate) fn render_definition(definition: &TestDefinition) -> String {
    let mut lines = vec![
        format!("{} ({})", definition.title, definition.subtitle),
        String::new(),
        definition.description.to_string(),
        String::new(),
        "Instructions:".to_string(),
    ];
    lines.extend(
        definition
            .instructions
            .iter()
            .map(|line| format!("  - {line}")),
    );
    lines.push(String::new());
    lines.push("Answer each statement from 1 (strongly disagree) to 5 (strongly agree):".to_string());
    lines.extend(
        definition
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| format!("  {:>2}. {}", index + 1, question.text)),
    );
    lines.join("\n")
}

/// Markdown report followed by raw scores and a text rendering of the chart.
pub(crate) fn render_outcome(outcome: &ScoreOutcome) -> String {
    let mut lines = vec![outcome.result.content.to_markdown(), "## Scores".to_string()];
    lines.extend(
        outcome
            .result
            .scores
            .iter()
            .map(|(tag, score)| format!("- {tag}: {score}")),
    );
    lines.push(String::new());
    lines.push("## Chart".to_string());
    match &outcome.chart {
        ChartSeries::Stacked { rows } => {
            for row in rows {
                lines.push(format!(
                    "{:<4} {:<12} {:>5.1}% | {:>5.1}% {}",
                    row.label, row.name_a, row.pct_a, row.pct_b, row.name_b
                ));
            }
        }
        ChartSeries::Bars { labels, values } => {
            let width = labels.iter().map(String::len).max().unwrap_or(0);
            for (label, value) in labels.iter().zip(values) {
                let bar = "#".repeat((value / 2.5).round() as usize);
                lines.push(format!("{label:<width$} {bar} {value:.1}%"));
            }
        }
    }
    lines.join("\n")
}
