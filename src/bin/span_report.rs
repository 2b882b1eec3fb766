use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use phrase_align_rs::{
    input, AlignConfig, AlignmentInput, AlignmentReport, PhraseAlignerBuilder,
};
use serde::Serialize;

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Bare `{start, end}` pairs, ready for the clip extraction step.
    Spans,
    /// Full per-phrase report with outcomes and scores.
    Report,
}

#[derive(Debug, Parser)]
#[command(name = "span_report")]
#[command(about = "Locate time spans for summary phrases in a word-level transcript")]
struct Args {
    /// Word timestamp JSON produced by the speech-to-text step.
    #[arg(long, env = "SPAN_REPORT_WORDS")]
    words: PathBuf,
    /// Summary text, one phrase per line.
    #[arg(long, env = "SPAN_REPORT_SUMMARY")]
    summary: PathBuf,
    /// Full transcript text with sentence punctuation.
    #[arg(long, env = "SPAN_REPORT_TRANSCRIPT")]
    transcript: PathBuf,
    /// Write output here instead of stdout.
    #[arg(long, env = "SPAN_REPORT_OUT")]
    out: Option<PathBuf>,
    #[arg(
        long,
        env = "SPAN_REPORT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Spans
    )]
    output_format: OutputFormat,
    #[arg(long, default_value_t = AlignConfig::DEFAULT_SENTENCE_SCORE_THRESHOLD)]
    sentence_threshold: f64,
    #[arg(long, default_value_t = AlignConfig::DEFAULT_WINDOW_REFINE_THRESHOLD)]
    refine_threshold: f64,
    #[arg(long, default_value_t = AlignConfig::DEFAULT_MAX_WINDOW_EXTENSION)]
    max_extension: usize,
}

#[derive(Debug, Serialize)]
struct ReportDocument<'a> {
    schema_version: u32,
    meta: Meta,
    report: &'a AlignmentReport,
}

#[derive(Debug, Serialize)]
struct Meta {
    generated_at: String,
    phrase_count: usize,
    sentence_threshold: f64,
    word_count: usize,
}

fn main() {
    if let Err(message) = run() {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();

    let words = input::load_word_transcript(&args.words).map_err(|err| err.to_string())?;
    let phrases = input::load_summary_phrases(&args.summary).map_err(|err| err.to_string())?;
    let transcript = input::load_transcript_text(&args.transcript).map_err(|err| err.to_string())?;

    let config = AlignConfig {
        sentence_score_threshold: args.sentence_threshold,
        window_refine_threshold: args.refine_threshold,
        max_window_extension: args.max_extension,
    };
    let aligner = PhraseAlignerBuilder::new(config)
        .build()
        .map_err(|err| err.to_string())?;

    let alignment_input = AlignmentInput {
        summary_phrases: phrases,
        transcript_text: transcript,
        words,
    };

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    progress.set_message(format!(
        "aligning {} phrases against {} words",
        alignment_input.summary_phrases.len(),
        alignment_input.words.len()
    ));
    progress.enable_steady_tick(Duration::from_millis(120));

    let output = aligner
        .align(&alignment_input)
        .map_err(|err| err.to_string())?;
    progress.finish_and_clear();

    let rendered = match args.output_format {
        OutputFormat::Spans => serde_json::to_string_pretty(&output.spans),
        OutputFormat::Report => {
            let document = ReportDocument {
                schema_version: SCHEMA_VERSION,
                meta: Meta {
                    generated_at: Utc::now().to_rfc3339(),
                    phrase_count: alignment_input.summary_phrases.len(),
                    sentence_threshold: args.sentence_threshold,
                    word_count: alignment_input.words.len(),
                },
                report: &output.report,
            };
            serde_json::to_string_pretty(&document)
        }
    }
    .map_err(|err| format!("Failed to serialize output JSON: {err}"))?;

    match args.out.as_deref() {
        Some(path) => write_output(path, &rendered)?,
        None => println!("{rendered}"),
    }

    let counts = &output.report.counts;
    eprintln!(
        "aligned {}/{} phrases ({} exact, {} expanded, {} no sentence, {} no window)",
        counts.matched_exact + counts.matched_expanded,
        counts.total,
        counts.matched_exact,
        counts.matched_expanded,
        counts.skipped_no_sentence,
        counts.skipped_no_window
    );
    Ok(())
}

fn write_output(path: &Path, rendered: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }
    let mut file = File::create(path)
        .map_err(|err| format!("Failed to create output file '{}': {err}", path.display()))?;
    file.write_all(rendered.as_bytes())
        .map_err(|err| format!("Failed to write output file '{}': {err}", path.display()))?;
    file.write_all(b"\n")
        .map_err(|err| format!("Failed to finalize output file '{}': {err}", path.display()))?;
    Ok(())
}
