//! Customer list import: count email addresses per domain.
//!
//! Input is a CSV file read line by line, with the email address in the
//! third column. Lines are not quoted and fields never contain commas.

use std::collections::BTreeMap;
use std::io::{self, BufRead};

use thiserror::Error;

/// Zero-based column holding the email address.
const EMAIL_COLUMN: usize = 2;

/// Why a line was not counted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing email column")]
    MissingColumn,

    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}

/// A line that was skipped, with its one-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: LineError,
}

/// Domain counts for one import.
#[derive(Debug, Default)]
pub struct DomainReport {
    /// Customers per domain, sorted by domain.
    pub domains: BTreeMap<String, usize>,
    /// Lines that did not yield a valid address.
    pub skipped: Vec<SkippedLine>,
}

impl DomainReport {
    /// Number of customers counted across all domains.
    pub fn total(&self) -> usize {
        self.domains.values().sum()
    }
}

/// Extract the (lowercased) domain of an email address.
///
/// Accepts exactly one `@` with a non-empty local part and domain and no
/// whitespace anywhere in the address.
pub fn email_domain(email: &str) -> Option<String> {
    if email.chars().any(char::is_whitespace) {
        return None;
    }

    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }

    Some(domain.to_ascii_lowercase())
}

fn line_domain(line: &str) -> Result<String, LineError> {
    let email = line
        .split(',')
        .nth(EMAIL_COLUMN)
        .ok_or(LineError::MissingColumn)?
        .trim();

    email_domain(email).ok_or_else(|| LineError::InvalidEmail(email.to_string()))
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .nth(EMAIL_COLUMN)
        .is_some_and(|column| column.trim().eq_ignore_ascii_case("email"))
}

/// Count customers per email domain.
///
/// Only read failures are errors; bad lines are collected in
/// [`DomainReport::skipped`].
pub fn count_domains<R: BufRead>(reader: R) -> io::Result<DomainReport> {
    let mut report = DomainReport::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        if number == 1 && is_header(&line) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line_domain(&line) {
            Ok(domain) => *report.domains.entry(domain).or_insert(0) += 1,
            Err(reason) => report.skipped.push(SkippedLine {
                line: number,
                reason,
            }),
        }
    }

    Ok(report)
}
