//! TF-IDF scores of lexemes over a folder of documents.
//!
//! Every `.csv` file in the folder is one document, read with the same row
//! format as the single-file report. For a lexeme with `count` occurrences in a
//! document of `total` lexemes, found in `df` of the `n` documents:
//!
//! - `tf = count / total`
//! - `idf = ln(n / (df + 1))`
//! - `tfidf = tf * idf`
//!
//! With the `+ 1` in the denominator, a lexeme present in every document
//! gets a negative score.

use crate::driver::{self, DriverArgs};
use crate::errors::{self, Result};
use crate::ranking;
use crate::table::{LexemeRecord, LexemeTable};
use itertools::Itertools;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File name extension of the documents, compared case-insensitively.
pub const EXTENSION: &str = "csv";

/// Lexeme counts of one input file.
pub struct Document {
    pub name: String,
    pub table: LexemeTable,
}

impl Document {
    /// Number of lexeme tokens in the document.
    pub fn total(&self) -> u64 {
        self.table.iter().map(|r| r.frequency).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Score {
    pub lexeme_id: String,
    pub word_form: String,
    pub count: u64,
    pub tf: f64,
    pub tfidf: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct DocumentScores {
    pub name: String,
    pub total: u64,
    pub scores: Vec<Score>,
}

/// Everything computed for one folder.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TfIdf {
    /// Frequencies summed over all documents, ranked.
    pub global: Vec<LexemeRecord>,
    pub documents: Vec<DocumentScores>,
}

/// Reads one document; `None` if it has no well-formed rows.
pub fn read_document<R: BufRead>(name: &str, reader: R) -> Result<Option<Document>> {
    let aggregation = driver::aggregate(&DriverArgs::default(), reader)?;
    if aggregation.table.is_empty() {
        warn!(target: "lexfreq", "{name}: no valid lexemes, skipped");
        return Ok(None);
    }
    info!(target: "lexfreq", "{name}: {} lexemes", aggregation.stats.rows);
    Ok(Some(Document {
        name: name.to_owned(),
        table: aggregation.table,
    }))
}

/// The document files in `dir`, sorted by path.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(errors::invalid_argument(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(EXTENSION));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_path(path: &Path, name: &str) -> Result<Option<Document>> {
    let file = fs::File::open(path).map_err(|e| errors::cannot_open(&path.to_string_lossy(), e))?;
    read_document(name, BufReader::new(file))
}

/// Reads all documents of `dir`.
///
/// A file that cannot be read is skipped with a warning.
pub fn read_documents(dir: &Path) -> Result<Vec<Document>> {
    let files = csv_files(dir)?;
    if files.is_empty() {
        return Err(errors::invalid_input(format!(
            "no .{EXTENSION} files in {}",
            dir.display()
        )));
    }
    info!(target: "lexfreq", "files to process: {}", files.len());
    let mut documents = vec![];
    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match read_path(path, &name) {
            Ok(Some(document)) => documents.push(document),
            Ok(None) => (),
            Err(e) => warn!(target: "lexfreq", "{name}: {e}, skipped"),
        }
    }
    Ok(documents)
}

/// Frequencies summed over all documents, ranked.
///
/// Forms are taken from the first document that contains the lexeme.
pub fn global_frequencies(documents: &[Document]) -> Vec<LexemeRecord> {
    let mut table = LexemeTable::new();
    for document in documents {
        table.merge(&document.table);
    }
    ranking::rank(table.into_records())
}

/// Number of documents in which each lexeme occurs.
pub fn document_frequencies(documents: &[Document]) -> HashMap<&str, u64> {
    let mut df = HashMap::new();
    for document in documents {
        for r in document.table.iter() {
            *df.entry(r.lexeme_id.as_str()).or_insert(0) += 1;
        }
    }
    df
}

pub fn idf(documents: usize, df: u64) -> f64 {
    (documents as f64 / (df as f64 + 1.0)).ln()
}

/// Higher score first, then lexeme identifiers in byte order.
pub fn compare_scores(a: &Score, b: &Score) -> Ordering {
    b.tfidf
        .total_cmp(&a.tfidf)
        .then_with(|| a.lexeme_id.cmp(&b.lexeme_id))
}

pub fn scores(documents: &[Document]) -> Vec<DocumentScores> {
    let df = document_frequencies(documents);
    let n = documents.len();
    documents
        .iter()
        .map(|document| {
            let total = document.total();
            let scores = document
                .table
                .iter()
                .map(|r| {
                    let tf = r.frequency as f64 / total as f64;
                    Score {
                        lexeme_id: r.lexeme_id.clone(),
                        word_form: r.word_form.clone(),
                        count: r.frequency,
                        tf,
                        tfidf: tf * idf(n, df[r.lexeme_id.as_str()]),
                    }
                })
                .sorted_by(compare_scores)
                .collect_vec();
            debug!(target: "lexfreq", "{}: {} tokens, {} lexemes", document.name, total, scores.len());
            DocumentScores {
                name: document.name.clone(),
                total,
                scores,
            }
        })
        .collect_vec()
}

/// Reads a folder and computes everything.
///
/// This is the main entry point for the multi-document report.
pub fn calc(dir: &Path) -> Result<TfIdf> {
    let documents = read_documents(dir)?;
    if documents.is_empty() {
        return Err(errors::invalid_input_ref("no document contains valid lexemes"));
    }
    info!(target: "lexfreq", "documents: {}", documents.len());
    Ok(TfIdf {
        global: global_frequencies(&documents),
        documents: scores(&documents),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn doc(name: &str, data: &str) -> Document {
        read_document(name, Cursor::new(data)).unwrap().unwrap()
    }

    fn corpus() -> Vec<Document> {
        vec![
            doc("a", "h\nx,x,dog,x,x,DOG,1\nx,x,dog,x,x,DOG,1\nx,x,the,x,x,THE,9\nx,x,runs,x,x,RUN,2\n"),
            doc("b", "h\nx,x,cat,x,x,CAT,3\nx,x,The,x,x,the,9\n"),
            doc("c", "h\nx,x,the,x,x,THE,9\nx,x,bird,x,x,BIRD,4\n"),
        ]
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn read_document_without_rows() {
        assert!(read_document("e", Cursor::new("h\na,b\n")).unwrap().is_none());
        assert!(read_document("e", Cursor::new("")).unwrap().is_none());
    }

    #[test]
    fn document_total() {
        let docs = corpus();
        assert_eq!(docs.iter().map(Document::total).collect_vec(), [4, 2, 2]);
    }

    #[test]
    fn document_frequencies_basic() {
        let docs = corpus();
        let df = document_frequencies(&docs);
        assert_eq!(df["9"], 3);
        assert_eq!(df["1"], 1);
        assert_eq!(df.len(), 5);
    }

    #[test]
    fn idf_basic() {
        assert!(close(idf(3, 1), (1.5f64).ln()));
        assert!(close(idf(3, 2), 0.0));
        assert!(idf(3, 3) < 0.0);
    }

    #[test]
    fn scores_basic() {
        let docs = corpus();
        let s = scores(&docs);
        assert_eq!(s.iter().map(|d| d.name.as_str()).collect_vec(), ["a", "b", "c"]);
        let a = &s[0];
        assert_eq!(a.total, 4);
        assert_eq!(
            a.scores.iter().map(|x| x.lexeme_id.as_str()).collect_vec(),
            ["1", "2", "9"]
        );
        assert_eq!(a.scores[0].count, 2);
        assert!(close(a.scores[0].tf, 0.5));
        assert!(close(a.scores[0].tfidf, 0.5 * (1.5f64).ln()));
        assert!(close(a.scores[2].tfidf, 0.25 * (0.75f64).ln()));
    }

    #[test]
    fn scores_ties_by_identifier() {
        let docs = vec![
            doc("a", "h\nx,x,s,x,x,w,b\nx,x,s,x,x,w,a\n"),
            doc("b", "h\nx,x,s,x,x,w,c\n"),
        ];
        let s = scores(&docs);
        assert_eq!(
            s[0].scores.iter().map(|x| x.lexeme_id.as_str()).collect_vec(),
            ["a", "b"]
        );
    }

    #[test]
    fn global_frequencies_basic() {
        let docs = corpus();
        let global = global_frequencies(&docs);
        assert_eq!(
            global
                .iter()
                .map(|r| (r.lexeme_id.as_str(), r.word_form.as_str(), r.frequency))
                .collect_vec(),
            [
                ("9", "THE", 3),
                ("1", "DOG", 2),
                ("2", "RUN", 1),
                ("3", "CAT", 1),
                ("4", "BIRD", 1),
            ]
        );
    }
}
