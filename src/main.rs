use async_trait::async_trait;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use talent_ai::config::AppConfig;
use talent_ai::error::AppError;
use talent_ai::pipeline::{
    BatchOutcome, BatchScoringService, ExtractionCache, ExtractionError, FactExtractor,
    ResumeSubmission,
};
use talent_ai::scoring::{
    category_rubrics, fit_summary, CandidateId, ExtractedFactRecord, JobRequirements, JobType,
    ScoreBreakdown, ScoringEngine,
};
use talent_ai::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Candidate Screening Scorer",
    about = "Score and rank extracted candidate facts against a job posting from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a batch of candidates against a posting and print the ranked pool
    Score(ScoreArgs),
    /// Print the rubric catalog and weight profile for a job type
    Rubric(RubricArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Path to the job posting JSON
    #[arg(long)]
    job: PathBuf,
    /// Path to the extracted facts JSON (array of candidate entries)
    #[arg(long)]
    facts: PathBuf,
    /// Include per-item score breakdowns and fit summaries in the output
    #[arg(long)]
    breakdown: bool,
    /// Write the full outcome as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RubricArgs {
    /// Job type whose rubric to print
    #[arg(long, default_value = "general", value_parser = parse_job_type)]
    job_type: JobType,
}

/// One row of the extracted-facts input file.
#[derive(Debug, Deserialize)]
struct FactsFileEntry {
    candidate_id: CandidateId,
    facts: ExtractedFactRecord,
}

/// Serves facts parsed from the input file, keyed by candidate id. Lets the
/// CLI drive the batch pipeline without a live extraction backend.
struct PreparedExtractor {
    records: HashMap<CandidateId, ExtractedFactRecord>,
}

#[async_trait]
impl FactExtractor for PreparedExtractor {
    async fn extract(
        &self,
        _job: &JobRequirements,
        submission: &ResumeSubmission,
    ) -> Result<ExtractedFactRecord, ExtractionError> {
        self.records
            .get(&submission.candidate_id)
            .cloned()
            .ok_or_else(|| {
                ExtractionError::Unavailable(format!(
                    "no extracted facts on file for candidate '{}'",
                    submission.candidate_id
                ))
            })
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score(args) => run_score(args).await,
        Command::Rubric(args) => run_rubric(args),
    }
}

fn parse_job_type(raw: &str) -> Result<JobType, String> {
    let wanted = raw.trim().to_ascii_lowercase();
    JobType::ordered()
        .into_iter()
        .find(|job_type| job_type.label() == wanted)
        .ok_or_else(|| {
            let labels: Vec<&str> = JobType::ordered().iter().map(|kind| kind.label()).collect();
            format!(
                "unknown job type '{raw}', expected one of: {}",
                labels.join(", ")
            )
        })
}

async fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let job: JobRequirements = serde_json::from_str(&fs::read_to_string(&args.job)?)?;
    let entries: Vec<FactsFileEntry> = serde_json::from_str(&fs::read_to_string(&args.facts)?)?;

    info!(
        posting = %job.title,
        candidates = entries.len(),
        "scoring batch from prepared facts"
    );

    let submissions: Vec<ResumeSubmission> = entries
        .iter()
        .map(|entry| ResumeSubmission {
            candidate_id: entry.candidate_id.clone(),
            resume_text: String::new(),
        })
        .collect();
    let records: HashMap<CandidateId, ExtractedFactRecord> = entries
        .into_iter()
        .map(|entry| (entry.candidate_id, entry.facts))
        .collect();

    let cache = Arc::new(ExtractionCache::new(
        config.evaluation.cache_capacity,
        config.evaluation.cache_ttl(),
    ));
    let service = BatchScoringService::new(
        Arc::new(PreparedExtractor { records }),
        cache,
        ScoringEngine::default(),
        config.evaluation.max_concurrent_extractions,
    );

    let outcome = service.evaluate_batch(&job, submissions).await?;
    render_outcome(&job, &outcome, args.breakdown);

    if let Some(path) = args.output {
        fs::write(&path, serde_json::to_string_pretty(&outcome)?)?;
        println!("\nOutcome written to {}", path.display());
    }

    Ok(())
}

fn run_rubric(args: RubricArgs) -> Result<(), AppError> {
    println!("Scoring rubric for {} postings", args.job_type);

    for rubric in category_rubrics(args.job_type) {
        println!("\n{} (weight {:.2})", rubric.category.label(), rubric.weight);
        for item in &rubric.items {
            println!(
                "- {} ({:.0} points max): {}",
                item.id, item.max_points, item.description
            );
            for (condition, points) in item
                .scoring_guide
                .conditions()
                .zip(item.scoring_guide.values())
            {
                println!("    {condition}: {points:.0}");
            }
        }
    }

    Ok(())
}

fn render_outcome(job: &JobRequirements, outcome: &BatchOutcome, show_breakdown: bool) {
    println!("Candidate scoring report");
    println!("Posting: {} ({})", job.title, job.job_type);

    if outcome.evaluations.is_empty() {
        println!("\nRanked pool: empty");
    } else {
        println!("\nRanked pool ({} scored)", outcome.evaluations.len());
        for result in &outcome.evaluations {
            match result.placement {
                Some(placement) => println!(
                    "- #{} {}: {}/100, {} of {}, {}",
                    placement.rank,
                    result.candidate_id,
                    result.overall_score,
                    placement.quartile.label(),
                    placement.pool_size,
                    result.tier.label()
                ),
                None => println!(
                    "- {}: {}/100, {}",
                    result.candidate_id,
                    result.overall_score,
                    result.tier.label()
                ),
            }
        }
    }

    if !outcome.skipped.is_empty() {
        println!("\nSkipped candidates");
        for entry in &outcome.skipped {
            println!("- {}: {}", entry.candidate_id, entry.error);
        }
    }

    if show_breakdown {
        for result in &outcome.evaluations {
            if let Some(breakdown) = outcome.breakdowns.get(&result.candidate_id) {
                render_breakdown(&result.candidate_id, breakdown);
            }
        }
    }
}

fn render_breakdown(candidate_id: &CandidateId, breakdown: &ScoreBreakdown) {
    println!("\nScore breakdown for {candidate_id}");
    for category in &breakdown.categories {
        println!(
            "- {}: {:.1}/{:.1} raw, weight {:.2}, contributes {:.1}",
            category.category_label,
            category.raw_points,
            category.max_points,
            category.weight,
            category.weighted_contribution
        );
        for item in &category.items {
            println!(
                "    - {}: {:.1}/{:.1} ({})",
                item.item_id, item.points, item.max_points, item.reason
            );
        }
    }

    let summary = fit_summary(breakdown);
    if !summary.strengths.is_empty() {
        println!("  Strengths:");
        for highlight in &summary.strengths {
            println!("    - {}: {}", highlight.description, highlight.detail);
        }
    }
    if !summary.gaps.is_empty() {
        println!("  Gaps:");
        for highlight in &summary.gaps {
            println!("    - {}: {}", highlight.description, highlight.detail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_type_parser_accepts_known_labels() {
        assert_eq!(parse_job_type("technical"), Ok(JobType::Technical));
        assert_eq!(parse_job_type(" Entry-Level "), Ok(JobType::EntryLevel));
        assert_eq!(parse_job_type("general"), Ok(JobType::General));
    }

    #[test]
    fn job_type_parser_rejects_unknown_labels() {
        let err = parse_job_type("executive").expect_err("unknown label");
        assert!(err.contains("executive"));
        assert!(err.contains("entry-level"));
    }

    #[tokio::test]
    async fn prepared_extractor_misses_report_unavailable() {
        let extractor = PreparedExtractor {
            records: HashMap::new(),
        };
        let submission = ResumeSubmission {
            candidate_id: CandidateId::new("cand-404"),
            resume_text: String::new(),
        };
        let job: JobRequirements = serde_json::from_value(serde_json::json!({
            "title": "Registered Nurse",
            "description": "Med-surg unit",
            "must_have": [],
            "nice_to_have": [],
            "job_type": "general"
        }))
        .expect("job parses");

        let err = extractor
            .extract(&job, &submission)
            .await
            .expect_err("no facts on file");
        assert!(matches!(err, ExtractionError::Unavailable(_)));
        assert!(err.to_string().contains("cand-404"));
    }
}
