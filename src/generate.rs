use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::audit::{AuditReport, audit_catalog};
use crate::error::Result;
use crate::io::catalog_read::read_catalog;
use crate::io::csv_write::write_template;
use crate::template::build_rows;

/// Catalog read when no input path is given.
pub const DEFAULT_INPUT: &str = "strings.json";
/// Template written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "template.csv";

/// Paths used by a single [`generate`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

/// Converts the catalog at `options.input` into a translation template at
/// `options.output` and returns the number of data rows written.
///
/// Audit findings are logged as warnings and never fail the run.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %options.input.display(), output = %options.output.display())
)]
pub fn generate(options: &GenerateOptions) -> Result<usize> {
    let catalog = read_catalog(&options.input)?;
    info!(
        string_count = catalog.strings.len(),
        group_count = catalog.links.len(),
        "loaded catalog"
    );

    log_findings(&audit_catalog(&catalog));

    let rows = build_rows(&catalog);
    debug!(row_count = rows.len(), "template rows built");
    write_template(&options.output, &rows)?;
    info!(row_count = rows.len(), "template written");
    Ok(rows.len())
}

/// Loads the catalog at `input` and checks it for consistency problems.
#[instrument(level = "info", skip_all, fields(input = %input.display()))]
pub fn audit(input: &Path) -> Result<AuditReport> {
    let catalog = read_catalog(input)?;
    let report = audit_catalog(&catalog);
    info!(finding_count = report.finding_count(), "catalog audited");
    Ok(report)
}

fn log_findings(report: &AuditReport) {
    if report.is_clean() {
        debug!("catalog audit found no problems");
        return;
    }
    for line in report.lines() {
        warn!("{line}");
    }
}
