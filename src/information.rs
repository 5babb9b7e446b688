use crate::driver::Stats;
use crate::table::LexemeTable;
use itertools::Itertools;
use log::{debug, info};

pub fn statistics(stats: &Stats, table: &LexemeTable) {
    let tokens: u64 = table.iter().map(|r| r.frequency).sum();
    let hapaxes = table.iter().filter(|r| r.frequency == 1).count();
    info!(target: "lexfreq", "lines: {}", stats.lines);
    info!(target: "lexfreq", "data rows: {}", stats.rows);
    info!(target: "lexfreq", "malformed rows: {}", stats.malformed_lines.len());
    info!(target: "lexfreq", "counted tokens: {}", tokens);
    info!(target: "lexfreq", "distinct lexemes: {}", table.len());
    debug!(target: "lexfreq", "lexemes seen once: {}", hapaxes);
    if !stats.malformed_lines.is_empty() {
        debug!(
            target: "lexfreq",
            "malformed lines: {}",
            stats.malformed_lines.iter().join(", ")
        );
    }
}
