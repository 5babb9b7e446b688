//! Deterministic ordering of aggregated records.

use crate::table::LexemeRecord;
use itertools::Itertools;
use std::cmp::Ordering;

/// Higher frequency first, then lexeme identifiers in byte order.
///
/// Identifiers are unique within a table, so no two records compare equal.
pub fn compare(a: &LexemeRecord, b: &LexemeRecord) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.lexeme_id.cmp(&b.lexeme_id))
}

pub fn rank(mut records: Vec<LexemeRecord>) -> Vec<LexemeRecord> {
    records.sort_unstable_by(compare);
    records
}

pub fn is_ranked(records: &[LexemeRecord]) -> bool {
    records
        .iter()
        .tuple_windows()
        .all(|(a, b)| compare(a, b) == Ordering::Less)
}

#[cfg(test)]
mod test {
    use super::*;

    fn rec(lexeme_id: &str, frequency: u64) -> LexemeRecord {
        LexemeRecord {
            lexeme_id: lexeme_id.to_owned(),
            word_form: String::new(),
            surface_form: String::new(),
            frequency,
        }
    }

    fn ids(records: &[LexemeRecord]) -> Vec<&str> {
        records.iter().map(|r| r.lexeme_id.as_str()).collect_vec()
    }

    #[test]
    fn rank_by_frequency() {
        let r = rank(vec![rec("a", 1), rec("b", 3), rec("c", 2)]);
        assert_eq!(ids(&r), ["b", "c", "a"]);
        assert!(is_ranked(&r));
    }

    #[test]
    fn rank_ties_by_identifier() {
        let r = rank(vec![rec("b", 2), rec("c", 2), rec("a", 2), rec("z", 5)]);
        assert_eq!(ids(&r), ["z", "a", "b", "c"]);
    }

    #[test]
    fn rank_bytewise() {
        let r = rank(vec![
            rec("b", 1),
            rec("B", 1),
            rec("", 1),
            rec("語彙", 1),
            rec("10", 1),
            rec("9", 1),
        ]);
        assert_eq!(ids(&r), ["", "10", "9", "B", "b", "語彙"]);
    }

    #[test]
    fn rank_independent_of_input_order() {
        let records = vec![rec("x", 1), rec("y", 4), rec("w", 1), rec("v", 4)];
        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(rank(records), rank(reversed));
    }

    #[test]
    fn is_ranked_detects_disorder() {
        assert!(is_ranked(&[]));
        assert!(is_ranked(&[rec("a", 1)]));
        assert!(!is_ranked(&[rec("a", 1), rec("b", 2)]));
        assert!(!is_ranked(&[rec("b", 1), rec("a", 1)]));
        assert!(!is_ranked(&[rec("a", 1), rec("a", 1)]));
    }
}
