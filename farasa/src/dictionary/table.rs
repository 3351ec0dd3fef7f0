//! Read-only statistical tables.
use std::collections::{HashMap, HashSet};

use bincode::{Decode, Encode};

/// String-keyed numeric table.
#[derive(Default, Decode, Encode)]
pub struct ValueTable(HashMap<String, f64>);

impl ValueTable {
    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, f64)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Closed word list.
#[derive(Default, Decode, Encode)]
pub struct MemberSet(HashSet<String>);

impl MemberSet {
    #[inline(always)]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<String> for MemberSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Numeric table keyed by an ordered pair of strings.
///
/// It is the flattened form of a two-level `first -> second -> value` map.
#[derive(Default, Decode, Encode)]
pub struct PairTable(HashMap<(String, String), f64>);

impl PairTable {
    pub fn get(&self, first: &str, second: &str) -> Option<f64> {
        self.0
            .get(&(first.to_string(), second.to_string()))
            .copied()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Flattens a two-level map.
    pub fn from_nested<I, J>(nested: I) -> Self
    where
        I: IntoIterator<Item = (String, J)>,
        J: IntoIterator<Item = (String, f64)>,
    {
        let mut map = HashMap::new();
        for (first, inner) in nested {
            for (second, value) in inner {
                map.insert((first.clone(), second), value);
            }
        }
        Self(map)
    }
}
