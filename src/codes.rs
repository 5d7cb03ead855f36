use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::frequency::FrequencyTable;
use crate::tree::{HuffNode, HuffmanTree};

/// Maps each symbol to its codeword, written as a string of `'0'` and `'1'`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Assigns each leaf the path from the root, `'0'` for left and `'1'` for
    /// right. A tree that is a single leaf gets the code `"0"`.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut stack: Vec<(&HuffNode, String)> = vec![(&tree.root, String::new())];

        while let Some((node, prefix)) = stack.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => {
                    let code = if prefix.is_empty() { "0".to_string() } else { prefix };
                    codes.insert(*symbol, code);
                }
                HuffNode::Internal { left, right, .. } => {
                    let mut right_code = prefix.clone();
                    right_code.push('1');
                    stack.push((&**right, right_code));

                    let mut left_code = prefix;
                    left_code.push('0');
                    stack.push((&**left, left_code));
                }
            }
        }

        CodeTable { codes }
    }

    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Sum of `frequency * code length` over all symbols in `frequencies`.
    /// Symbols missing from the table contribute nothing.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| count * code.len() as u64))
            .sum()
    }

    pub fn is_prefix_free(&self) -> bool {
        self.check_prefix_free().is_ok()
    }

    /// In lexicographic order, a code that prefixes any other code also
    /// prefixes its immediate successor, so only neighbours need comparing.
    fn check_prefix_free(&self) -> Result<(), DecodeError> {
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(DecodeError::DuplicateCode {
                    code: pair[0].to_string(),
                });
            }
            if pair[1].starts_with(pair[0]) {
                return Err(DecodeError::NotPrefixFree {
                    prefix: pair[0].to_string(),
                    code: pair[1].to_string(),
                });
            }
        }
        Ok(())
    }

    /// Checks a table that came from outside the encoder: every code must be
    /// a non-empty binary string and the set of codes must be prefix-free.
    pub fn validate(&self) -> Result<(), DecodeError> {
        for (&symbol, code) in &self.codes {
            if code.is_empty() {
                return Err(DecodeError::EmptyCode { symbol });
            }
            if !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(DecodeError::InvalidCodeDigit { symbol });
            }
        }
        self.check_prefix_free()
    }
}

impl FromIterator<(char, String)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}
