//! CLI entry point for the GPA calculator.
//!
//! Provides subcommands for computing a GPA from a module list, exporting a
//! report, showing the grading scale and running an interactive session.

use anyhow::{Result, bail};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use gpa_calculator::calculator::compute;
use gpa_calculator::calculator::utility::fmt_number;
use gpa_calculator::config::Settings;
use gpa_calculator::output::{format_breakdown, positional_labels, print_json, print_pretty, save_report};
use gpa_calculator::parser::load_modules;
use gpa_calculator::report::{GpaReport, Period, ReportFormat};
use gpa_calculator::scale::GradeScale;
use gpa_calculator::shell::Shell;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calculator")]
#[command(about = "Credit-weighted GPA calculator on the SLIIT grading scale", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the GPA for a module list CSV (name,grade,credits)
    Calculate {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Also log the aggregate as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Export a report for a module list CSV
    Report {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },
    /// Print the grading scale
    Scale,
    /// Look up the grade for a mark out of 100
    Marks {
        #[arg(value_name = "MARKS")]
        marks: u8,
    },
    /// Edit a module list interactively
    Shell {
        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(Args)]
struct ExportArgs {
    /// Academic year label, e.g. "Year 2"
    #[arg(long, default_value = "Year 1")]
    year: String,

    /// Semester label, e.g. "Semester 1"
    #[arg(long, default_value = "Semester 1")]
    semester: String,

    /// Report document format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Directory to write the report to (defaults to GPA_REPORT_DIR)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// File name prefix (defaults to GPA_REPORT_SUBJECT)
    #[arg(long)]
    subject: Option<String>,
}

impl ExportArgs {
    fn period(&self) -> Period {
        Period::new(&self.year, &self.semester)
    }

    fn out_dir(&self, settings: &Settings) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| settings.report_dir.clone())
    }

    fn subject(&self, settings: &Settings) -> String {
        self.subject
            .clone()
            .unwrap_or_else(|| settings.report_subject.clone())
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    let settings = Settings::from_env();

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = settings
        .log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = settings
        .log_file_path
        .file_name()
        .unwrap_or(OsStr::new("gpa_calculator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate { file, json } => {
            let modules = load_modules(&file)?;
            let result = compute(&modules);

            print_pretty(&result);
            if json {
                print_json(&result)?;
            }

            info!(
                modules = modules.len(),
                total_credits = result.total_credits,
                gpa = result.gpa,
                "GPA computed"
            );

            print!(
                "{}",
                format_breakdown(&positional_labels(modules.len()), &modules, &result)
            );
        }
        Commands::Report { file, export } => {
            let modules = load_modules(&file)?;
            let report = GpaReport::build(
                &modules,
                export.period(),
                &export.subject(&settings),
                Utc::now(),
            );

            if modules.is_empty() || report.summary.total_credits <= 0.0 {
                bail!(
                    "'{}' has no graded modules with credits, nothing to report",
                    file.display()
                );
            }

            let renderer = export.format.renderer();
            let path = save_report(&export.out_dir(&settings), &report, renderer.as_ref())?;
            println!("Report saved to {}", path.display());
        }
        Commands::Scale => {
            println!("{:<6} {:>9} {:>12}", "Grade", "GPA Value", "Marks Range");
            for entry in GradeScale::standard().entries() {
                println!(
                    "{:<6} {:>9} {:>12}",
                    entry.grade,
                    fmt_number(entry.gpa_value),
                    entry.marks_range()
                );
            }
        }
        Commands::Marks { marks } => match GradeScale::standard().grade_for_marks(marks) {
            Some(entry) => println!(
                "{marks} marks -> {} (grade point {})",
                entry.grade,
                fmt_number(entry.gpa_value)
            ),
            None => bail!("marks must be between 0 and 100, got {marks}"),
        },
        Commands::Shell { export } => {
            let mut shell = Shell::new(
                export.period(),
                export.subject(&settings),
                export.out_dir(&settings),
                export.format,
            );
            let stdin = std::io::stdin();
            shell.run(stdin.lock(), std::io::stdout())?;
        }
    }

    Ok(())
}
