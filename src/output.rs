//! Rendering of the ranked records.

use crate::driver::Report;
use crate::errors::{self, Result};
use crate::table::LexemeRecord;
use crate::tfidf::{DocumentScores, Score};
use clap::ValueEnum;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::{error, fs};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Tab-separated lines
    Tsv,
    /// JSON report with run statistics
    Json,
}

/// Rejects `--compact` unless the output is JSON.
pub fn check_format(format: Format, compact: bool) -> Result<()> {
    if compact && format != Format::Json {
        return Err(errors::invalid_argument_ref(
            "--compact only applies to --format json",
        ));
    }
    Ok(())
}

/// Printed instead of the table when there are no records at all.
pub const NOTHING_TO_PROCESS: &str = "There was no data to process.";

/// Identifier, word form, surface form and frequency, separated by tabs.
pub fn tsv_line(r: &LexemeRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        r.lexeme_id, r.word_form, r.surface_form, r.frequency
    )
}

/// One line per record, no header.
pub fn write_tsv<W: Write>(writer: &mut W, records: &[LexemeRecord]) -> io::Result<()> {
    for r in records {
        writeln!(writer, "{}", tsv_line(r))?;
    }
    Ok(())
}

/// Document name, identifier, word form, count, TF and TF-IDF, separated by tabs.
pub fn score_line(document: &str, s: &Score) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.4}\t{:.4}",
        document, s.lexeme_id, s.word_form, s.count, s.tf, s.tfidf
    )
}

/// One line per score, documents in order, at most `limit` scores per document.
pub fn write_scores<W: Write>(
    writer: &mut W,
    documents: &[DocumentScores],
    limit: Option<usize>,
) -> io::Result<()> {
    for d in documents {
        for s in limited(&d.scores, limit) {
            writeln!(writer, "{}", score_line(&d.name, s))?;
        }
    }
    Ok(())
}

/// The first `limit` items, or all of them.
pub fn limited<T>(items: &[T], limit: Option<usize>) -> &[T] {
    match limit {
        None => items,
        Some(n) => &items[..n.min(items.len())],
    }
}

#[derive(PartialEq, Eq, Debug, Deserialize, Serialize)]
pub struct OReport {
    pub lines: usize,
    pub rows: usize,
    pub malformed: usize,
    pub rejected: u64,
    pub distinct: usize,
    pub records: Vec<LexemeRecord>,
}

impl OReport {
    /// `shown` is the part of `report.records` that is actually written out.
    pub fn new(report: &Report, shown: &[LexemeRecord]) -> OReport {
        OReport {
            lines: report.stats.lines,
            rows: report.stats.rows,
            malformed: report.stats.malformed_lines.len(),
            rejected: report.stats.rejected,
            distinct: report.records.len(),
            records: shown.to_vec(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct OError {
    pub error: String,
}

/// Writes `e` as JSON to `error_file`.
pub fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file).map_err(|e2| errors::cannot_open(error_file, e2))?;
    serde_json::to_writer(io::BufWriter::new(file), &error)?;
    Ok(())
}

/// Logs a fatal error, and also stores it if there is an error file.
pub fn report_error(e: &dyn error::Error, error_file: Option<&str>) {
    error!(target: "lexfreq", "{e}");
    if let Some(filename) = error_file {
        match store_error(filename, e) {
            Ok(()) => info!(target: "lexfreq", "error reported: {filename}"),
            Err(e2) => error!(target: "lexfreq", "{e2}"),
        }
    }
}
