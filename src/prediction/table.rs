//! Static prediction table
//!
//! Keys are the wife's family pattern followed by the husband's family
//! pattern, one, two or three children each. Values give the predicted
//! gender of the couple's first and second child.

use std::collections::HashMap;

use super::gender::Gender;

const M: Gender = Gender::Male;
const F: Gender = Gender::Female;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub first: Gender,
    pub second: Gender,
}

type Row = (&'static [Gender], Gender, Gender);

const ROWS: [Row; 52] = [
    // wife (M, M, F)
    (&[M, M, F, M, M, F], M, M),
    (&[M, M, F, M, F, F], M, M),
    (&[M, M, F, F, M, F], M, F),
    (&[M, M, F, F, M, M], M, F),
    (&[M, M, F, F, F, M], M, F),
    (&[M, M, F, M, F, M], M, F),
    // wife (M, F, F)
    (&[M, F, F, M, F, F], M, F),
    (&[M, F, F, F, M, F], F, M),
    (&[M, F, F, F, M, M], M, F),
    (&[M, F, F, F, F, M], F, M),
    (&[M, F, F, M, F, M], M, F),
    (&[M, F, F, M, M, F], M, M),
    // wife (F, M, F)
    (&[F, M, F, M, M, F], M, F),
    (&[F, M, F, M, F, F], F, M),
    (&[F, M, F, F, M, F], F, M),
    (&[F, M, F, F, M, M], F, M),
    (&[F, M, F, F, F, M], F, F),
    (&[F, M, F, M, F, M], M, F),
    // wife (F, M, M)
    (&[F, M, M, M, M, F], M, F),
    (&[F, M, M, M, F, F], M, F),
    (&[F, M, M, F, M, F], F, M),
    (&[F, M, M, F, M, M], F, M),
    (&[F, M, M, F, F, M], F, M),
    (&[F, M, M, M, F, M], M, F),
    // wife (F, F, M)
    (&[F, F, M, M, M, F], M, F),
    (&[F, F, M, M, F, F], F, M),
    (&[F, F, M, F, M, F], F, M),
    (&[F, F, M, F, M, M], F, M),
    (&[F, F, M, F, F, M], F, F),
    (&[F, F, M, M, F, M], F, M),
    // wife (M, F, M)
    (&[M, F, M, M, M, F], M, M),
    (&[M, F, M, M, F, F], M, F),
    (&[M, F, M, F, M, F], M, F),
    (&[M, F, M, F, M, M], M, M),
    (&[M, F, M, F, F, M], F, M),
    (&[M, F, M, M, F, M], M, F),
    // one child per family
    (&[M, F], F, F),
    (&[F, M], M, M),
    (&[F, F], F, F),
    (&[M, M], M, M),
    // two children per family
    (&[M, M, M, M], M, M),
    (&[M, F, M, F], M, M),
    (&[F, F, F, F], F, F),
    (&[F, M, F, M], F, F),
    (&[F, F, M, F], F, F),
    (&[M, M, F, M], M, M),
    (&[M, F, M, M], M, M),
    (&[F, M, M, M], M, M),
    (&[M, F, F, F], F, F),
    (&[F, M, F, F], F, F),
    (&[M, M, M, F], M, M),
    (&[F, F, F, M], F, F),
];

lazy_static::lazy_static! {
    static ref PREDICTION_TABLE: HashMap<&'static [Gender], TableEntry> = ROWS
        .iter()
        .map(|(key, first, second)| (*key, TableEntry { first: *first, second: *second }))
        .collect();
}

/// Exact, order-sensitive lookup of a concatenated family pattern.
pub fn lookup(key: &[Gender]) -> Option<TableEntry> {
    PREDICTION_TABLE.get(key).copied()
}

/// Iterates over every `(key, entry)` pair in declaration order.
pub fn entries() -> impl Iterator<Item = (&'static [Gender], TableEntry)> {
    ROWS.iter()
        .map(|(key, first, second)| (*key, TableEntry { first: *first, second: *second }))
}

pub fn len() -> usize {
    PREDICTION_TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_duplicate_keys() {
        assert_eq!(len(), ROWS.len());
        assert_eq!(len(), 52);
    }

    #[test]
    fn test_key_length_distribution() {
        let count = |n: usize| entries().filter(|(k, _)| k.len() == n).count();
        assert_eq!(count(6), 36);
        assert_eq!(count(2), 4);
        assert_eq!(count(4), 12);
    }

    #[test]
    fn test_lookup_is_order_sensitive() {
        assert_eq!(lookup(&[M, F]), Some(TableEntry { first: F, second: F }));
        assert_eq!(lookup(&[F, M]), Some(TableEntry { first: M, second: M }));
        // (F, F, M, M) is not enumerated even though (M, M, F, F)-style rows exist
        assert_eq!(lookup(&[F, F, M, M]), None);
        assert_eq!(lookup(&[M]), None);
        assert_eq!(lookup(&[]), None);
    }
}
