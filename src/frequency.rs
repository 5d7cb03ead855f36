use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol in a piece of text.
///
/// Backed by a `BTreeMap` so iteration is in ascending symbol order, which
/// the tree builder relies on for its tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    pub fn from_symbols(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for symbol in text.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        FrequencyTable { counts }
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}

impl FromIterator<(char, u64)> for FrequencyTable {
    /// Builds a table from explicit counts. Zero counts are dropped and
    /// repeated symbols are summed.
    fn from_iter<I: IntoIterator<Item = (char, u64)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (symbol, count) in iter {
            if count > 0 {
                *counts.entry(symbol).or_insert(0) += count;
            }
        }
        FrequencyTable { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_distinct_symbol_once() {
        let table = FrequencyTable::from_symbols("abracadabra");
        assert_eq!(table.len(), 5);
        assert_eq!(table.get('a'), Some(5));
        assert_eq!(table.get('b'), Some(2));
        assert_eq!(table.get('r'), Some(2));
        assert_eq!(table.get('c'), Some(1));
        assert_eq!(table.get('d'), Some(1));
        assert_eq!(table.get('z'), None);
        assert_eq!(table.total(), 11);
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = FrequencyTable::from_symbols("");
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn iterates_in_symbol_order() {
        let table = FrequencyTable::from_symbols("zyxzy");
        let symbols: Vec<char> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['x', 'y', 'z']);
    }

    #[test]
    fn multibyte_chars_are_single_symbols() {
        let table = FrequencyTable::from_symbols("ö🌍ö");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get('ö'), Some(2));
        assert_eq!(table.get('🌍'), Some(1));
    }

    #[test]
    fn from_iter_skips_zero_counts() {
        let table: FrequencyTable = [('a', 0), ('b', 3), ('b', 1)].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get('b'), Some(4));
    }
}
