use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use jotform::{FormDriver, FormPlan, FormSettings, PlanRequest, RecordingDriver, run_plan};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tracing_subscriber::EnvFilter;
use wso_core::{
    DelegateKind, MeetingFile, Normalizer, SubmissionKind, Vocabulary, load_meeting_file,
};

#[derive(Parser)]
#[command(name = "wso-register")]
#[command(about = "Fill out the WSO group records change form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export JSON Schemas for the meeting file format
    Schema {
        #[command(subcommand)]
        command: SchemaCommands,
    },
    /// Validate a meeting file and print how it will be normalized
    Check {
        meeting: PathBuf,
        #[command(flatten)]
        vocabulary: VocabularyArg,
    },
    /// Print the page-by-page form input as JSON
    Plan {
        meeting: PathBuf,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Drive the form. Without --webdriver this is a logged dry run.
    Submit {
        meeting: PathBuf,
        #[command(flatten)]
        form: FormArgs,
        /// WebDriver server to drive a real browser, e.g. http://localhost:9515
        #[arg(long)]
        webdriver: Option<String>,
    },
}

#[derive(Subcommand)]
enum SchemaCommands {
    /// Export JSON Schema files for the meeting file types
    Export {
        /// Output directory (default: ./schemas)
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },
}

#[derive(clap::Args)]
struct VocabularyArg {
    /// TOML file overriding the default labels and fallbacks
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

#[derive(clap::Args)]
struct FormArgs {
    #[command(flatten)]
    vocabulary: VocabularyArg,
    /// TOML file with the form endpoint, paths and timeouts
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Records site base URL; overrides the settings file
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long, value_enum, default_value_t = KindArg::Physical)]
    kind: KindArg,
    /// Effective date of the change as MM-DD-YYYY (default: today)
    #[arg(long)]
    date: Option<String>,
    /// Click the final submit button instead of leaving the form for review
    #[arg(long)]
    submit: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Physical,
    Online,
}

impl From<KindArg> for SubmissionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Physical => SubmissionKind::Physical,
            KindArg::Online => SubmissionKind::Online,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Schema { command } => match command {
            SchemaCommands::Export { out_dir } => schema_export(out_dir),
        },
        Commands::Check { meeting, vocabulary } => check(&meeting, &vocabulary),
        Commands::Plan { meeting, form } => plan(&meeting, &form),
        Commands::Submit {
            meeting,
            form,
            webdriver,
        } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(submit(&meeting, &form, webdriver.as_deref()))
        }
    }
}

fn schema_export(out_dir: PathBuf) -> Result<()> {
    fs::create_dir_all(&out_dir)?;

    let meeting_file_schema = schema_for!(wso_core::MeetingFile);
    let meeting_file_json = serde_json::to_string_pretty(&meeting_file_schema)?;
    fs::write(out_dir.join("MeetingFile.schema.json"), meeting_file_json)?;

    let record_schema = schema_for!(wso_core::MeetingRecord);
    let record_json = serde_json::to_string_pretty(&record_schema)?;
    fs::write(out_dir.join("MeetingRecord.schema.json"), record_json)?;

    let submitter_schema = schema_for!(wso_core::SubmitterData);
    let submitter_json = serde_json::to_string_pretty(&submitter_schema)?;
    fs::write(out_dir.join("SubmitterData.schema.json"), submitter_json)?;

    let vocabulary_schema = schema_for!(wso_core::Vocabulary);
    let vocabulary_json = serde_json::to_string_pretty(&vocabulary_schema)?;
    fs::write(out_dir.join("Vocabulary.schema.json"), vocabulary_json)?;

    println!("Exported schemas to {}", out_dir.display());
    Ok(())
}

fn check(meeting: &Path, vocabulary: &VocabularyArg) -> Result<()> {
    let file = load_meeting_file(meeting)?;
    let vocabulary = load_vocabulary(vocabulary)?;
    let record = &file.meeting;
    let normalizer = Normalizer::new(record, &vocabulary);
    let schedule = normalizer.schedule();

    println!("{}", record.name);
    match record.wso_id {
        Some(id) => println!("  WSO id:        {id}"),
        None => println!("  WSO id:        (not registered)"),
    }
    println!("  Format:        {}", normalizer.meeting_type().label());
    println!(
        "  Schedule:      {} {}:{:0>2} {} for {} minutes",
        schedule.day, schedule.hour, schedule.minute, schedule.am_pm, record.duration
    );
    println!("  Language:      {}", normalizer.normalized_language(false));
    println!("  Meeting place: {}", normalizer.meeting_place_label());
    println!(
        "  Address:       {}, {}, {} {}, {}",
        record.address_street_1,
        normalizer.city_label(),
        normalizer.state_label(),
        normalizer.zip_label(),
        normalizer.country_label()
    );
    println!(
        "  Participants:  {}",
        normalizer.participant_type_label().unwrap_or_else(|| "(none)".to_string())
    );
    println!("  Attendees:     {}", normalizer.attendees_label());
    let options: Vec<String> = normalizer.ordered_option_labels();
    println!("  Options:       {}", options.join(", "));
    for kind in [DelegateKind::Cma, DelegateKind::Gr] {
        let status = if normalizer.has_delegate(kind) {
            "complete"
        } else if normalizer.delegate(kind).is_some() {
            "incomplete, page will be skipped"
        } else {
            "none"
        };
        println!("  {:<15}{status}", format!("{kind}:"));
    }
    Ok(())
}

fn plan(meeting: &Path, form: &FormArgs) -> Result<()> {
    let file = load_meeting_file(meeting)?;
    let plan = build_plan(&file, form)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

async fn submit(meeting: &Path, form: &FormArgs, webdriver: Option<&str>) -> Result<()> {
    let file = load_meeting_file(meeting)?;
    let plan = build_plan(&file, form)?;

    match webdriver {
        Some(server_url) => drive_browser(server_url, &plan).await,
        None => {
            tracing::info!("no --webdriver given, dry run");
            let mut driver = RecordingDriver::new();
            drive(&mut driver, &plan).await
        }
    }
}

#[cfg(feature = "webdriver")]
async fn drive_browser(server_url: &str, plan: &FormPlan) -> Result<()> {
    let mut driver = jotform::WebDriverDriver::connect(server_url).await?;
    drive(&mut driver, plan).await
}

#[cfg(not(feature = "webdriver"))]
async fn drive_browser(_server_url: &str, _plan: &FormPlan) -> Result<()> {
    anyhow::bail!("this build has no browser support; rebuild with --features webdriver")
}

async fn drive<D: FormDriver>(driver: &mut D, plan: &FormPlan) -> Result<()> {
    let outcome = run_plan(driver, plan).await;
    if let Err(err) = driver.close().await {
        tracing::warn!(error = %err, "closing browser session failed");
    }
    let report = outcome?;
    println!(
        "Filled {} pages{}",
        report.pages.len(),
        if report.submitted { " and submitted" } else { "; review and submit manually" }
    );
    Ok(())
}

fn build_plan(file: &MeetingFile, form: &FormArgs) -> Result<FormPlan> {
    let vocabulary = load_vocabulary(&form.vocabulary)?;
    let mut settings = match &form.settings {
        Some(path) => FormSettings::load(path)?,
        None => FormSettings::default(),
    };
    if let Some(endpoint) = &form.endpoint {
        settings.records_endpoint = Some(endpoint.clone());
    }
    let request = PlanRequest {
        record: &file.meeting,
        vocabulary: &vocabulary,
        submitter: file.submitter.as_ref(),
        kind: form.kind.into(),
        effective_date: effective_date(form.date.as_deref())?,
        submit: form.submit,
    };
    Ok(FormPlan::build(&request, &settings)?)
}

fn load_vocabulary(arg: &VocabularyArg) -> Result<Vocabulary> {
    match &arg.vocabulary {
        Some(path) => Vocabulary::load(path),
        None => Ok(Vocabulary::default()),
    }
}

fn effective_date(raw: Option<&str>) -> Result<Date> {
    match raw {
        Some(raw) => Date::parse(raw, format_description!("[month]-[day]-[year]"))
            .with_context(|| format!("--date {raw} is not MM-DD-YYYY")),
        None => Ok(OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()),
    }
}
