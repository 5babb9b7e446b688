//! Main entry point for aggregating an input file.

use crate::errors::{self, Result};
use crate::information;
use crate::input;
use crate::ranking;
use crate::table::{LexemeRecord, LexemeTable};
use log::{debug, warn};
use std::borrow::Cow;
use std::io::{self, BufRead};

/// How to aggregate?
#[derive(Clone, Copy, Debug, Default)]
pub struct DriverArgs {
    /// Maximum number of distinct lexemes.
    /// If not specified, the table grows as needed.
    /// If specified, new lexemes beyond this limit are dropped with a warning,
    /// while lexemes already in the table keep being counted.
    pub max_lexemes: Option<usize>,
}

/// What happened while reading the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Lines read, including the header.
    pub lines: usize,
    /// Well-formed data rows.
    pub rows: usize,
    /// Line numbers of the data rows that were skipped.
    pub malformed_lines: Vec<usize>,
    /// Well-formed rows dropped because of [DriverArgs::max_lexemes].
    pub rejected: u64,
}

pub struct Aggregation {
    pub table: LexemeTable,
    pub stats: Stats,
}

/// Ranked records, ready for rendering.
pub struct Report {
    pub records: Vec<LexemeRecord>,
    pub stats: Stats,
}

fn new_table(args: &DriverArgs) -> Result<LexemeTable> {
    match args.max_lexemes {
        None => Ok(LexemeTable::new()),
        Some(0) => Err(errors::invalid_argument_ref(
            "maximum number of lexemes must be positive",
        )),
        Some(limit) => Ok(LexemeTable::with_capacity_limit(limit)),
    }
}

/// Reads one raw line into `buf`, returns false at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    Ok(reader.read_until(b'\n', buf)? > 0)
}

/// Reads all rows and accumulates them in a [LexemeTable].
///
/// The first line is a header and is skipped without looking at it.
/// Malformed rows are reported as warnings and skipped.
pub fn aggregate<R: BufRead>(args: &DriverArgs, mut reader: R) -> Result<Aggregation> {
    let mut table = new_table(args)?;
    let mut stats = Stats::default();
    let mut buf = Vec::new();
    if !read_line(&mut reader, &mut buf)? {
        debug!(target: "lexfreq", "empty input, not even a header");
        return Ok(Aggregation { table, stats });
    }
    stats.lines = 1;
    while read_line(&mut reader, &mut buf)? {
        stats.lines += 1;
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            debug!(target: "lexfreq", "line {}: invalid UTF-8 replaced", stats.lines);
        }
        match input::parse_row(input::strip_line_ending(&line), stats.lines) {
            Ok(row) => {
                stats.rows += 1;
                table.record(row.lexeme_id, row.word_form, row.surface_form);
            }
            Err(malformed) => {
                warn!(target: "lexfreq", "{malformed}");
                stats.malformed_lines.push(malformed.line_number);
            }
        }
    }
    stats.rejected = table.rejected();
    if let Some(limit) = table.capacity_limit().filter(|_| stats.rejected > 0) {
        warn!(
            target: "lexfreq",
            "{} rows with new lexemes ignored after reaching the maximum of {} distinct lexemes",
            stats.rejected,
            limit
        );
    }
    information::statistics(&stats, &table);
    Ok(Aggregation { table, stats })
}

/// Aggregates and ranks everything.
///
/// This is the main entry point for the library.
pub fn calc<R: BufRead>(args: &DriverArgs, reader: R) -> Result<Report> {
    let Aggregation { table, stats } = aggregate(args, reader)?;
    let records = ranking::rank(table.into_records());
    debug_assert!(ranking::is_ranked(&records));
    Ok(Report { records, stats })
}
