use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hashtags::render::stats::format_stats;
use hashtags::{load_documents, write_report, Config, MatchStrategy, ReadPolicy, ReportFormat, Strategy, WordAnalyzer};

/// Find the most common words in a set of text documents and the sentences
/// they appear in.
///
/// Example: hashtags -f doc1.txt doc2.txt -n 5 --html
#[derive(Parser, Debug)]
#[command(name = "hashtags", author, version, about, long_about = None)]
struct Args {
    /// Text documents to scan
    #[arg(short = 'f', long = "files", value_name = "FILE", num_args = 1.., required = true)]
    files: Vec<PathBuf>,

    /// Number of most common words to report (default 10)
    #[arg(short = 'n', long = "top", allow_negative_numbers = true)]
    top: Option<i64>,

    /// Write the report as an HTML table (the default format)
    #[arg(long, conflicts_with = "format")]
    html: bool,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Report path (default most_common_words.<format>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tokenization strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// How sentences are matched back to ranked words
    #[arg(long, value_enum)]
    matcher: Option<MatchStrategy>,

    /// Skip unreadable documents instead of aborting
    #[arg(long)]
    skip_unreadable: bool,

    /// TOML configuration file; command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<(Vec<PathBuf>, Config)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(n) = self.top {
            config.set_top_n(n)?;
        }
        if self.html {
            config.format = ReportFormat::Html;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(matcher) = self.matcher {
            config.matcher = matcher;
        }
        if self.skip_unreadable {
            config.read_policy = ReadPolicy::Skip;
        }
        config.validate()?;
        Ok((self.files, config))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hashtags=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let program_start = Instant::now();
    let (files, config) = Args::parse().into_config()?;

    let documents = load_documents(files.as_slice(), config.read_policy).context("loading documents")?;

    let mut analyzer = WordAnalyzer::new(config.strategy).with_match_strategy(config.matcher);
    for doc in documents {
        analyzer.add_document(doc);
    }
    let reports = analyzer.analyze(config.top_n).context("analyzing documents")?;

    print!("{}", format_stats(config.top_n, &reports));

    let output = config.output_path();
    info!(path = %output.display(), "generating report");
    write_report(&output, &reports, config.format, &config.title).context("writing report")?;

    info!(
        elapsed_ms = program_start.elapsed().as_millis() as u64,
        "done"
    );
    Ok(())
}
