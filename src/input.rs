//! Parsing of single input rows.
//!
//! The input is a restricted form of CSV: fields are separated by [DELIMITER]
//! and there is no support for quoting or escaping. A comma anywhere in a line
//! is always a field boundary, so a row is accepted exactly when splitting on
//! commas yields at least [EXPECTED_COLUMNS] fields.

use std::fmt;

/// Field separator.
pub const DELIMITER: char = ',';

/// Number of columns a usable row must have.
pub const EXPECTED_COLUMNS: usize = 7;

/// Column of the surface form (1-based).
pub const SURFACE_FORM_COLUMN: usize = 3;

/// Column of the word form (1-based).
pub const WORD_FORM_COLUMN: usize = 6;

/// Column of the lexeme identifier (1-based).
pub const LEXEME_ID_COLUMN: usize = 7;

/// The fields of interest of one well-formed row.
///
/// Borrows from the line it was parsed from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsedRow<'a> {
    pub surface_form: &'a str,
    pub word_form: &'a str,
    pub lexeme_id: &'a str,
    /// Number of columns processed; always [EXPECTED_COLUMNS].
    pub columns: usize,
}

/// A row that ended before the identifier column was reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MalformedRow {
    /// 1-based line number, the header being line 1.
    pub line_number: usize,
    /// Number of columns detected.
    pub columns: usize,
    /// Raw line content without the line ending.
    pub line: String,
}

impl fmt::Display for MalformedRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "line {}: expected {} columns, detected {}: {}",
            self.line_number, EXPECTED_COLUMNS, self.columns, self.line
        )
    }
}

/// Cuts the line at the first carriage return or newline.
pub fn strip_line_ending(line: &str) -> &str {
    match line.find(['\r', '\n']) {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Splits one line into fields and picks the surface form, word form and lexeme identifier.
///
/// Empty fields count as found fields. Fields after [EXPECTED_COLUMNS] are not looked at.
/// An empty line has no columns at all.
pub fn parse_row(line: &str, line_number: usize) -> Result<ParsedRow<'_>, MalformedRow> {
    let mut columns = 0;
    let mut surface_form = None;
    let mut word_form = None;
    let mut lexeme_id = None;
    if !line.is_empty() {
        for field in line.split(DELIMITER).take(EXPECTED_COLUMNS) {
            columns += 1;
            match columns {
                SURFACE_FORM_COLUMN => surface_form = Some(field),
                WORD_FORM_COLUMN => word_form = Some(field),
                LEXEME_ID_COLUMN => lexeme_id = Some(field),
                _ => (),
            }
        }
    }
    match (surface_form, word_form, lexeme_id) {
        (Some(surface_form), Some(word_form), Some(lexeme_id)) => Ok(ParsedRow {
            surface_form,
            word_form,
            lexeme_id,
            columns,
        }),
        _ => Err(MalformedRow {
            line_number,
            columns,
            line: line.to_owned(),
        }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_basic() {
        let row = parse_row("a,b,X,d,e,F1,L1", 2).unwrap();
        assert_eq!(row.surface_form, "X");
        assert_eq!(row.word_form, "F1");
        assert_eq!(row.lexeme_id, "L1");
        assert_eq!(row.columns, EXPECTED_COLUMNS);
    }

    #[test]
    fn parse_extra_columns_ignored() {
        let row = parse_row("a,b,X,d,e,F1,L1,extra,more", 2).unwrap();
        assert_eq!(row.lexeme_id, "L1");
        assert_eq!(row.columns, EXPECTED_COLUMNS);
    }

    #[test]
    fn parse_empty_fields() {
        let row = parse_row(",,,,,,", 3).unwrap();
        assert_eq!(row.surface_form, "");
        assert_eq!(row.word_form, "");
        assert_eq!(row.lexeme_id, "");
        let row = parse_row("a,,X,,,F,", 3).unwrap();
        assert_eq!(row.surface_form, "X");
        assert_eq!(row.word_form, "F");
        assert_eq!(row.lexeme_id, "");
    }

    #[test]
    fn parse_no_quoting() {
        let row = parse_row("a,\"b,c\",X,d,e,F,L", 2).unwrap();
        assert_eq!(row.surface_form, "c\"");
        assert_eq!(row.word_form, "e");
        assert_eq!(row.lexeme_id, "F");
    }

    #[test]
    fn parse_fields_not_trimmed() {
        let row = parse_row("a,b, X ,d,e,F ,L1 ", 2).unwrap();
        assert_eq!(row.surface_form, " X ");
        assert_eq!(row.word_form, "F ");
        assert_eq!(row.lexeme_id, "L1 ");
    }

    #[test]
    fn parse_too_few_columns() {
        let e = parse_row("a,b,c,d,e", 7).unwrap_err();
        assert_eq!(e.line_number, 7);
        assert_eq!(e.columns, 5);
        assert_eq!(e.line, "a,b,c,d,e");
        let e = parse_row("a,b,c,d,e,f", 8).unwrap_err();
        assert_eq!(e.columns, 6);
    }

    #[test]
    fn parse_empty_line() {
        let e = parse_row("", 4).unwrap_err();
        assert_eq!(e.columns, 0);
        assert_eq!(e.line, "");
    }

    #[test]
    fn malformed_display() {
        let e = parse_row("a,b,c,d,e", 12).unwrap_err();
        assert_eq!(
            format!("{e}"),
            "line 12: expected 7 columns, detected 5: a,b,c,d,e"
        );
    }

    #[test]
    fn strip_line_ending_basic() {
        assert_eq!(strip_line_ending("a,b\n"), "a,b");
        assert_eq!(strip_line_ending("a,b\r\n"), "a,b");
        assert_eq!(strip_line_ending("a,b"), "a,b");
        assert_eq!(strip_line_ending("\r\n"), "");
        assert_eq!(strip_line_ending(" a,b \n"), " a,b ");
    }

    #[test]
    fn strip_line_ending_stray_carriage_return() {
        assert_eq!(strip_line_ending("a,b,X,d,e,F,L\rjunk"), "a,b,X,d,e,F,L");
        assert_eq!(strip_line_ending("a,b\r\rc\n"), "a,b");
        let row = parse_row(strip_line_ending("a,b,X,d,e,F,L\rjunk\n"), 2).unwrap();
        assert_eq!(row.lexeme_id, "L");
    }

    #[test]
    fn parse_trailing_comma_gives_empty_identifier() {
        let row = parse_row("a,b,X,d,e,F,", 2).unwrap();
        assert_eq!(row.lexeme_id, "");
        assert_eq!(row.word_form, "F");
        assert_eq!(row.columns, EXPECTED_COLUMNS);
    }
}
