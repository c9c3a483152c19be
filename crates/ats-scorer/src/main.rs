use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ats_core::extract::{PdfExtractor, TextExtractor};
use ats_core::logging;
use ats_core::matching::AtsScorer;
use ats_core::JobRequirement;
use chrono::NaiveDate;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};

/// Score a resume against a job-requirement record.
#[derive(Debug, Parser)]
#[command(name = "ats-scorer", version)]
struct Args {
    /// Resume file; `.pdf` goes through text extraction, anything else is
    /// read as plain text
    #[arg(long)]
    resume: PathBuf,

    /// Job-requirement record (JSON)
    #[arg(long)]
    job: PathBuf,

    /// Pin the processing date (YYYY-MM-DD) for reproducible runs
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Pretty-print the result
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    dotenv().ok();
    logging::init_logging("ats-scorer");

    let args = Args::parse();

    let Some(resume_text) = read_resume(&args.resume) else {
        return ExitCode::FAILURE;
    };
    let Some(job) = read_job(&args.job) else {
        return ExitCode::FAILURE;
    };

    let scorer = AtsScorer::from_env();
    let result = match args.today {
        Some(today) => scorer.score_at(&resume_text, &job, today),
        None => scorer.score(&resume_text, &job),
    };

    info!(
        score = result.score,
        experience = %result.details.experience_years,
        skills_matched = result.details.skills_matched.len(),
        "scored resume"
    );

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };
    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "failed to serialize result");
            ExitCode::FAILURE
        }
    }
}

fn read_resume(path: &Path) -> Option<String> {
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);

    if is_pdf {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to read resume");
                return None;
            }
        };
        // An unextractable PDF scores as an empty resume rather than failing.
        Some(PdfExtractor.extract_text(&bytes))
    } else {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to read resume");
                None
            }
        }
    }
}

fn read_job(path: &Path) -> Option<JobRequirement> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            error!(path = %path.display(), error = %err, "failed to read job record");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(job) => Some(job),
        Err(err) => {
            error!(path = %path.display(), error = %err, "invalid job record JSON");
            None
        }
    }
}
