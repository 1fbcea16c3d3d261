mod advisor;
mod client;
mod config;
mod errors;
mod export;
mod models;
mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::client::HrClient;
use crate::config::Config;
use crate::errors::AppError;
use crate::export::Exporter;

#[derive(Parser)]
#[command(
    name = "hrlens",
    version,
    about = "Client for the HR analysis API: resume screening and employee sentiment reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen a resume against a job description
    Screen {
        /// Path to the resume file (pdf, docx, txt, or a common image format)
        #[arg(long)]
        resume: PathBuf,

        /// Job description text, or @path to read it from a file
        #[arg(long = "job-description", value_name = "TEXT|@PATH")]
        job_description: String,

        /// Export the rendered report as a PDF (to PATH, or a default filename)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        pdf: Option<Option<PathBuf>>,
    },

    /// Analyze employee feedback for sentiment and attrition risk
    Sentiment {
        /// Feedback category (general, satisfaction, exit-interview, ...)
        #[arg(long = "feedback-type", default_value = "general")]
        feedback_type: String,

        /// Feedback text, or @path to read it from a file
        #[arg(long, value_name = "TEXT|@PATH")]
        feedback: String,

        /// Export the rendered report as a PDF (to PATH, or a default filename)
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        pdf: Option<Option<PathBuf>>,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so the rendered report owns stdout.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "hrlens v{} → {}",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url
    );

    let client = HrClient::new(config.api_base_url.clone());
    let mut exporter = Exporter::new();

    match cli.command {
        Commands::Screen {
            resume,
            job_description,
            pdf,
        } => {
            let candidate = resume
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "resume".to_string());
            println!("Selected resume: {}", candidate.bold());

            let job_description = read_text_arg(&job_description)?;

            println!(
                "{}",
                "Analyzing resume against the job description...".dimmed()
            );
            let result = client
                .screen_resume(&resume, &job_description)
                .await
                .map_err(AppError::from)?;

            let recommendations = advisor::derive_recommendations(&result);
            let doc =
                report::screening::build_report(&candidate, &job_description, &result, &recommendations);
            report::print_document(&doc);
            exporter.remember(doc);

            if let Some(path) = pdf {
                let stem = resume
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "candidate".to_string());
                let path = path
                    .unwrap_or_else(|| PathBuf::from(export::default_screening_filename(&stem)));
                exporter.export_to(&path)?;
                println!("{} {}", "Report saved:".green(), path.display());
            }
        }

        Commands::Sentiment {
            feedback_type,
            feedback,
            pdf,
        } => {
            let feedback = read_text_arg(&feedback)?;

            println!("{}", "Analyzing employee feedback...".dimmed());
            let result = client
                .analyze_sentiment(&feedback_type, &feedback)
                .await
                .map_err(AppError::from)?;

            let doc = report::sentiment::build_report(&result);
            report::print_document(&doc);
            exporter.remember(doc);

            if let Some(path) = pdf {
                let path =
                    path.unwrap_or_else(|| PathBuf::from(export::SENTIMENT_REPORT_FILENAME));
                exporter.export_to(&path)?;
                println!("{} {}", "Report saved:".green(), path.display());
            }
        }
    }

    Ok(())
}

/// Resolves a text argument: literal text, or the contents of a file when
/// prefixed with '@'.
fn read_text_arg(value: &str) -> Result<String, AppError> {
    match value.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .map(|s| s.trim().to_string())
            .map_err(|e| AppError::Input(format!("could not read {path}: {e}"))),
        None => Ok(value.to_string()),
    }
}
