use std::path::PathBuf;

use clap::Args;

use super::parse::{parse_percent, parse_positive};

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Title to check
    #[arg(conflicts_with = "file")]
    pub title: Option<String>,

    /// Check every non-blank line of a file
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Number of similar titles to report
    #[arg(long, short = 'k', value_parser = parse_positive)]
    pub top_k: Option<usize>,

    /// Similarity percentage that flags a title on its own
    #[arg(long, short, value_parser = parse_percent)]
    pub threshold: Option<f64>,

    /// Write a Markdown report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Corpus file (overrides `[artifacts] corpus`)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Where to write the vectorizer (defaults to `[artifacts] vectorizer`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DuplicatesArgs {
    /// Similarity percentage at which two corpus titles count as duplicates
    #[arg(long, short, default_value = "90", value_parser = parse_percent)]
    pub threshold: f64,

    /// Maximum number of pairs to show
    #[arg(long, short, value_parser = parse_positive)]
    pub limit: Option<usize>,
}
