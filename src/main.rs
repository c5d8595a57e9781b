//! assessment-engine - runs one assessment end to end and prints the report.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use assessment_engine::adapters::{
    CsvInventoryReader, InMemorySessionRepository, SampleInventoryGenerator, SampleProfile,
};
use assessment_engine::application::{
    EndAssessmentCommand, EndAssessmentHandler, GetReportHandler, GetReportQuery, RunAnalysisCommand, RunAnalysisHandler, SessionLocks,
    StartAssessmentCommand, StartAssessmentHandler, SubmitProfileCommand, SubmitProfileHandler,
    UploadInventoryHandler, ValidateInventoryCommand, ValidateInventoryHandler,
};
use assessment_engine::config::AppConfig;
use assessment_engine::domain::assistant::Intent;
use assessment_engine::domain::recommendation::Recommendation;
use assessment_engine::domain::report::{AssessmentReport, ReportView};
use assessment_engine::domain::workflow::{AssessmentProfile, Program};
use assessment_engine::ports::{InventorySource, SessionRepository};

#[derive(Parser)]
#[command(name = "assessment-engine")]
#[command(version, about = "Cloud migration assessment: inventory in, report out")]
struct Cli {
    /// Assessment program (map, ola, one-ola)
    #[arg(long)]
    program: Program,

    /// Customer name
    #[arg(long)]
    customer: String,

    /// Target region
    #[arg(long)]
    region: Option<String>,

    /// Migration timeline
    #[arg(long)]
    timeline: Option<String>,

    /// Inventory CSV file
    #[arg(long, conflicts_with = "sample")]
    inventory: Option<PathBuf>,

    /// Generate a sample inventory with this many servers
    #[arg(long)]
    sample: Option<usize>,

    /// Seed for the sample generator
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Shape of the sample inventory
    #[arg(long, value_enum, default_value = "general")]
    sample_profile: SampleKind,

    /// Report view (full, executive, technical, cost-model)
    #[arg(long, default_value = "full")]
    view: ReportView,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Answer a question about the report instead of printing it
    #[arg(long)]
    ask: Option<String>,

    /// Configuration file (yaml, toml or json)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SampleKind {
    General,
    MultiPlatform,
    WindowsFileServers,
}

impl From<SampleKind> for SampleProfile {
    fn from(kind: SampleKind) -> Self {
        match kind {
            SampleKind::General => SampleProfile::General,
            SampleKind::MultiPlatform => SampleProfile::MultiPlatform,
            SampleKind::WindowsFileServers => SampleProfile::WindowsFileServers,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Serialize)]
struct Answer<'a> {
    question: &'a str,
    intent: Intent,
    recommendations: Vec<&'a Recommendation>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load config")?,
    };
    config.validate().context("Invalid configuration")?;
    config.logging.init();

    let source: Box<dyn InventorySource> = match (&cli.inventory, cli.sample) {
        (Some(path), _) => Box::new(CsvInventoryReader::from_path(path)),
        (None, Some(count)) => Box::new(
            SampleInventoryGenerator::new(cli.sample_profile.into(), cli.seed).with_count(count),
        ),
        (None, None) => bail!("Provide either --inventory <csv> or --sample <count>"),
    };

    let report = run(&cli, &config, source.as_ref()).await?;

    match &cli.ask {
        Some(question) => {
            let intent = Intent::classify(question);
            let recommendations = report
                .recommendations
                .iter()
                .filter(|r| intent.related_category().map_or(true, |c| r.category == c))
                .collect();
            print(
                &Answer {
                    question,
                    intent,
                    recommendations,
                },
                cli.format,
            )
        }
        None => print(&report.view(cli.view), cli.format),
    }
}

async fn run(
    cli: &Cli,
    config: &AppConfig,
    source: &dyn InventorySource,
) -> Result<AssessmentReport> {
    let repository: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());
    let locks = SessionLocks::new();
    let engine = Arc::new(config.recommendation_engine());

    let started = StartAssessmentHandler::new(repository.clone())
        .handle(StartAssessmentCommand {
            program: cli.program,
        })
        .await?;
    let session_id = *started.session.id();

    let mut profile = AssessmentProfile::new(cli.program, cli.customer.clone());
    profile.region = cli.region.clone();
    profile.timeline = cli.timeline.clone();

    SubmitProfileHandler::new(repository.clone(), locks.clone())
        .handle(SubmitProfileCommand {
            session_id,
            profile,
        })
        .await?;

    UploadInventoryHandler::new(repository.clone(), locks.clone())
        .handle_source(session_id, source)
        .await?;

    let validated = ValidateInventoryHandler::new(repository.clone(), locks.clone())
        .handle(ValidateInventoryCommand {
            session_id,
            required_fields: None,
        })
        .await?;

    let analysed = RunAnalysisHandler::new(repository.clone(), locks.clone(), engine)
        .handle(RunAnalysisCommand { session_id })
        .await?;

    info!(
        session_id = %session_id,
        issues = validated.report.issues().len(),
        recommendations = analysed.recommendations.len(),
        monthly_impact = %analysed.recommendations.total_monthly_impact(),
        "Assessment complete"
    );

    let report = GetReportHandler::new(repository.clone())
        .handle(GetReportQuery { session_id })
        .await?;

    EndAssessmentHandler::new(repository, locks)
        .handle(EndAssessmentCommand { session_id })
        .await?;
    Ok(report)
}

fn print<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    println!("{}", rendered);
    Ok(())
}
