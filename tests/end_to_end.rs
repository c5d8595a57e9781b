//! End-to-end tests: CSV file in, report out, through the application handlers.
//!
//! Uses the in-memory session repository; no external services.

use std::io::Write;
use std::sync::Arc;

use tempfile::NamedTempFile;

use assessment_engine::adapters::{
    CsvInventoryReader, InMemorySessionRepository, SampleInventoryGenerator, SampleProfile,
};
use assessment_engine::application::{
    AssessmentError, EndAssessmentCommand, EndAssessmentHandler, GetReportHandler, GetReportQuery, NavigateStageCommand,
    NavigateStageHandler, Navigation, RunAnalysisCommand, RunAnalysisHandler, SessionLocks,
    StartAssessmentCommand, StartAssessmentHandler, SubmitProfileCommand, SubmitProfileHandler,
    UploadInventoryHandler, ValidateInventoryCommand, ValidateInventoryHandler,
};
use assessment_engine::domain::foundation::{ErrorCode, Money, SessionId};
use assessment_engine::domain::inventory::{Column, OsFamily};
use assessment_engine::domain::recommendation::{Category, Priority, RecommendationEngine};
use assessment_engine::domain::report::{AssessmentReport, ReportError, ReportView};
use assessment_engine::domain::workflow::{AssessmentProfile, Program, Stage};
use assessment_engine::ports::{InventorySource, SessionRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

const INVENTORY_CSV: &str = "\
Server_Name,CPU_Cores,Memory_GB,Storage_GB,OS,Application_Count,Storage_Type,Utilization_CPU
web01,4,16,200,Windows Server 2019,3,SSD,12%
web02,4,16,200,Windows Server 2019,2,SSD,15
app01,,32,2000,Linux Ubuntu 20.04,5,SAN,90
";

struct Harness {
    repository: Arc<dyn SessionRepository>,
    locks: SessionLocks,
}

impl Harness {
    fn new() -> Self {
        Self {
            repository: Arc::new(InMemorySessionRepository::new()),
            locks: SessionLocks::new(),
        }
    }

    async fn start(&self, program: Program) -> SessionId {
        let result = StartAssessmentHandler::new(self.repository.clone())
            .handle(StartAssessmentCommand { program })
            .await
            .unwrap();
        *result.session.id()
    }

    async fn submit_profile(&self, session_id: SessionId, program: Program) -> Stage {
        let profile = AssessmentProfile::new(program, "Acme Corp")
            .with_region("eu-west-1")
            .with_timeline("Q3");
        SubmitProfileHandler::new(self.repository.clone(), self.locks.clone())
            .handle(SubmitProfileCommand {
                session_id,
                profile,
            })
            .await
            .unwrap()
            .stage
    }

    async fn upload(&self, session_id: SessionId, source: &dyn InventorySource) -> Stage {
        UploadInventoryHandler::new(self.repository.clone(), self.locks.clone())
            .handle_source(session_id, source)
            .await
            .unwrap()
            .stage
    }

    async fn validate(&self, session_id: SessionId) -> Result<Stage, AssessmentError> {
        ValidateInventoryHandler::new(self.repository.clone(), self.locks.clone())
            .handle(ValidateInventoryCommand {
                session_id,
                required_fields: None,
            })
            .await
            .map(|r| r.stage)
    }

    async fn analyse(&self, session_id: SessionId) -> Stage {
        RunAnalysisHandler::new(
            self.repository.clone(),
            self.locks.clone(),
            Arc::new(RecommendationEngine::default()),
        )
        .handle(RunAnalysisCommand { session_id })
        .await
        .unwrap()
        .stage
    }

    async fn navigate(&self, session_id: SessionId, navigation: Navigation) -> Stage {
        NavigateStageHandler::new(self.repository.clone(), self.locks.clone())
            .handle(NavigateStageCommand {
                session_id,
                navigation,
            })
            .await
            .unwrap()
            .stage
    }

    async fn report(&self, session_id: SessionId) -> Result<AssessmentReport, AssessmentError> {
        GetReportHandler::new(self.repository.clone())
            .handle(GetReportQuery { session_id })
            .await
    }

    async fn end(&self, session_id: SessionId) -> Result<(), AssessmentError> {
        EndAssessmentHandler::new(self.repository.clone(), self.locks.clone())
            .handle(EndAssessmentCommand { session_id })
            .await
    }

    async fn run(&self, program: Program, source: &dyn InventorySource) -> AssessmentReport {
        let id = self.start(program).await;
        self.submit_profile(id, program).await;
        self.upload(id, source).await;
        self.validate(id).await.unwrap();
        self.analyse(id).await;
        self.report(id).await.unwrap()
    }
}

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// =============================================================================
// Full runs
// =============================================================================

#[tokio::test]
async fn csv_inventory_runs_through_every_program() {
    let file = csv_file(INVENTORY_CSV);

    for program in Program::all() {
        let harness = Harness::new();
        let report = harness
            .run(*program, &CsvInventoryReader::from_path(file.path()))
            .await;

        assert_eq!(report.summary.program, *program);
        assert_eq!(report.summary.customer, "Acme Corp");
        assert_eq!(report.summary.total_records, 3);
        assert!(!report.recommendations.is_empty());
        assert_eq!(
            report.summary.total_monthly_impact,
            report.recommendations.iter().map(|r| r.monthly_impact).sum::<Money>()
        );
        assert_eq!(
            report.summary.total_annual_impact,
            report.summary.total_monthly_impact.annualized()
        );
        assert_eq!(report.roi.total_monthly(), report.summary.total_monthly_impact);
    }
}

#[tokio::test]
async fn validation_findings_match_inventory() {
    let file = csv_file(INVENTORY_CSV);
    let report = Harness::new()
        .run(Program::Map, &CsvInventoryReader::from_path(file.path()))
        .await;

    let validation = &report.validation;
    assert_eq!(validation.missing_count(Column::CpuCores), 1);
    assert_eq!(validation.family_count(OsFamily::Windows), 2);
    assert_eq!(validation.family_count(OsFamily::Linux), 1);
    assert_eq!(validation.family_count(OsFamily::Unknown), 0);
    assert_eq!(validation.family_count(OsFamily::Container), 0);
    assert!(!validation.is_clean());
    assert_eq!(validation.issues().len(), 1);
    assert!(validation.issues()[0].description().contains("CPU_Cores"));
    assert_eq!(report.summary.data_quality_issue_count, 1);
}

#[tokio::test]
async fn map_promotes_right_sizing_to_the_top() {
    let file = csv_file(INVENTORY_CSV);
    let report = Harness::new()
        .run(Program::Map, &CsvInventoryReader::from_path(file.path()))
        .await;

    let first = &report.recommendations.as_slice()[0];
    assert_eq!(first.category, Category::RightSizing);
    assert_eq!(first.priority, Priority::Critical);
    assert_eq!(first.monthly_impact, Money::from_cents(18_000));

    let counted: usize = report.summary.count_by_priority.values().sum();
    assert_eq!(counted, report.recommendations.len());
    assert_eq!(report.summary.count_by_priority.len(), Priority::all().len());
}

#[tokio::test]
async fn sample_inventory_reports_are_reproducible() {
    let source = SampleInventoryGenerator::new(SampleProfile::MultiPlatform, 7).with_count(40);

    let first = Harness::new().run(Program::Ola, &source).await;
    let second = Harness::new().run(Program::Ola, &source).await;

    assert_eq!(first.summary.total_records, 40);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(first.validation, second.validation);
}

#[tokio::test]
async fn every_view_serializes() {
    let file = csv_file(INVENTORY_CSV);
    let report = Harness::new()
        .run(Program::OneOla, &CsvInventoryReader::from_path(file.path()))
        .await;

    for view in ReportView::all() {
        let json = serde_json::to_value(report.view(*view)).unwrap();
        assert!(json.is_object(), "{} view is not an object", view);
    }

    let executive = serde_json::to_value(report.view(ReportView::Executive)).unwrap();
    assert!(executive["top_recommendations"].as_array().unwrap().len() <= 5);
    assert!(executive.get("summary").is_some());
}

#[tokio::test]
async fn oversized_storage_cells_do_not_break_totals() {
    let file = csv_file(
        "Server_Name,CPU_Cores,Memory_GB,Storage_GB,OS,Storage_Type\n\
         a,4,16,1e18,Windows,SSD\n\
         b,4,16,1e18,Windows,SSD\n",
    );
    let report = Harness::new()
        .run(Program::Map, &CsvInventoryReader::from_path(file.path()))
        .await;

    assert_eq!(report.validation.missing_count(Column::StorageGb), 2);
    assert!(report
        .recommendations
        .iter()
        .all(|r| r.category != Category::StorageTiering));
    assert_eq!(report.roi.total_monthly(), report.summary.total_monthly_impact);
}

// =============================================================================
// Guards and navigation
// =============================================================================

#[tokio::test]
async fn report_before_results_is_incomplete() {
    let harness = Harness::new();
    let id = harness.start(Program::Map).await;
    assert_eq!(harness.submit_profile(id, Program::Map).await, Stage::DataAcquisition);

    let err = harness.report(id).await.unwrap_err();
    assert!(matches!(
        err,
        AssessmentError::Report(ReportError::IncompleteAssessment { .. })
    ));
    assert_eq!(err.code(), ErrorCode::IncompleteAssessment);
}

#[tokio::test]
async fn missing_required_column_blocks_validation() {
    let file = csv_file(
        "Server_Name,Memory_GB,Storage_GB,OS\n\
         web01,16,200,Windows Server 2019\n",
    );
    let harness = Harness::new();
    let id = harness.start(Program::Map).await;
    harness.submit_profile(id, Program::Map).await;
    harness
        .upload(id, &CsvInventoryReader::from_path(file.path()))
        .await;

    let err = harness.validate(id).await.unwrap_err();
    assert!(matches!(err, AssessmentError::Schema(_)));
    assert_eq!(err.code(), ErrorCode::SchemaError);

    let session = harness.repository.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(session.current_stage(), Stage::Validation);
}

#[tokio::test]
async fn regress_and_reupload_discards_downstream_results() {
    let file = csv_file(INVENTORY_CSV);
    let harness = Harness::new();
    let id = harness.start(Program::Map).await;
    harness.submit_profile(id, Program::Map).await;
    harness
        .upload(id, &CsvInventoryReader::from_path(file.path()))
        .await;
    harness.validate(id).await.unwrap();
    assert_eq!(harness.analyse(id).await, Stage::Results);

    assert_eq!(harness.navigate(id, Navigation::Regress).await, Stage::Computation);
    assert_eq!(harness.navigate(id, Navigation::Regress).await, Stage::Validation);
    assert_eq!(harness.navigate(id, Navigation::Regress).await, Stage::DataAcquisition);

    let smaller = SampleInventoryGenerator::new(SampleProfile::General, 1).with_count(5);
    assert_eq!(harness.upload(id, &smaller).await, Stage::Validation);

    let session = harness.repository.find_by_id(&id).await.unwrap().unwrap();
    assert!(session.state().validation().is_none());
    assert!(session.state().recommendations().is_none());

    harness.validate(id).await.unwrap();
    harness.analyse(id).await;
    assert_eq!(harness.report(id).await.unwrap().summary.total_records, 5);
}

#[tokio::test]
async fn reset_returns_to_setup_with_no_data() {
    let harness = Harness::new();
    let id = harness.start(Program::Ola).await;
    harness.submit_profile(id, Program::Ola).await;

    assert_eq!(harness.navigate(id, Navigation::Reset).await, Stage::Setup);

    let session = harness.repository.find_by_id(&id).await.unwrap().unwrap();
    assert!(session.state().completed_stages().is_empty());
    assert_eq!(session.program(), Program::Ola);
}

#[tokio::test]
async fn ending_sessions_releases_their_state() {
    let file = csv_file(INVENTORY_CSV);
    let harness = Harness::new();

    let finished = harness.start(Program::Map).await;
    harness.submit_profile(finished, Program::Map).await;
    harness
        .upload(finished, &CsvInventoryReader::from_path(file.path()))
        .await;
    harness.validate(finished).await.unwrap();
    harness.analyse(finished).await;
    harness.report(finished).await.unwrap();

    let abandoned = harness.start(Program::Ola).await;
    harness.submit_profile(abandoned, Program::Ola).await;
    assert_eq!(harness.locks.tracked(), 2);

    harness.end(finished).await.unwrap();
    harness.end(abandoned).await.unwrap();

    assert_eq!(harness.locks.tracked(), 0);
    assert!(harness.repository.find_by_id(&finished).await.unwrap().is_none());
    assert!(matches!(
        harness.report(abandoned).await,
        Err(AssessmentError::NotFound(_))
    ));
    assert_eq!(
        harness.end(abandoned).await.unwrap_err().code(),
        ErrorCode::SessionNotFound
    );
}
