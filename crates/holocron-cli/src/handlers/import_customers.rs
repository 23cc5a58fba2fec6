//! Import-customers command handler.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::customers::{DomainReport, count_domains};

/// Execute the import-customers command.
///
/// Prints one `domain count` line per domain, sorted by domain.
pub fn execute(path: &Path) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
    let report = count_domains(BufReader::new(file))
        .with_context(|| format!("Failed to read {}", path.display()))?;

    for skipped in &report.skipped {
        tracing::warn!(line = skipped.line, reason = %skipped.reason, "Skipping customer line");
    }

    tracing::info!(
        domains = report.domains.len(),
        customers = report.total(),
        skipped = report.skipped.len(),
        "Imported customers"
    );

    let stdout = std::io::stdout();
    write_report(&report, &mut stdout.lock())?;
    Ok(())
}

fn write_report(report: &DomainReport, out: &mut impl Write) -> std::io::Result<()> {
    for (domain, count) in &report.domains {
        writeln!(out, "{domain} {count}")?;
    }
    Ok(())
}
