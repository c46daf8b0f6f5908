pub mod html;
pub mod stats;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analyzer::report::WordReport;
use crate::error::{HashtagError, Result};

/// Output format of the report file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
    Cbor,
}

impl ReportFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportFormat::Html => "most_common_words.html",
            ReportFormat::Json => "most_common_words.json",
            ReportFormat::Cbor => "most_common_words.cbor",
        }
    }
}

/// Encode the reports in `format`
pub fn render(reports: &[WordReport], format: ReportFormat, title: &str) -> Result<Vec<u8>> {
    match format {
        ReportFormat::Html => Ok(html::render_html(title, reports)?.into_bytes()),
        ReportFormat::Json => Ok(serde_json::to_vec_pretty(reports)?),
        ReportFormat::Cbor => Ok(serde_cbor::to_vec(&reports)?),
    }
}

/// Render the reports and write them to `path`
pub fn write_report(path: &Path, reports: &[WordReport], format: ReportFormat, title: &str) -> Result<()> {
    let bytes = render(reports, format, title)?;
    let output_err = |source| HashtagError::Output {
        path: path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(output_err)?);
    out.write_all(&bytes).map_err(output_err)?;
    out.flush().map_err(output_err)?;
    info!(path = %path.display(), ?format, bytes = bytes.len(), "wrote report");
    Ok(())
}
