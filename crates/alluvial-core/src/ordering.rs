//! Group ordering from a flat, user-supplied precedence list.
//!
//! Each group gets a [`RankKey`]: one digit per column, leftmost column most significant. Digit
//! `i` is the position of the group's column-`i` value in the precedence list restricted to that
//! column, or the length of that sublist when the value is not listed. Comparing keys
//! lexicographically is the same as comparing one positional number whose radix exceeds every
//! per-column rank, without any risk of overflow or float rounding.

use crate::group::Group;
use serde::{Deserialize, Serialize};

/// How `(column, value)` entries of a [`PreferredOrder`] are matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderScope {
    /// Entries only rank values of their own column.
    #[default]
    Column,
    /// Entry columns are ignored; the values form one list applied to every column.
    Global,
}

impl OrderScope {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "column" => Some(Self::Column),
            "global" => Some(Self::Global),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Global => "global",
        }
    }
}

/// Ordered `(column, value)` precedence list.
///
/// Entries naming an unknown column or a value absent from the data simply never match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferredOrder {
    entries: Vec<(String, String)>,
}

impl PreferredOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(column, value);
        self
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.entries.push((column.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    fn sublist(&self, column: &str, scope: OrderScope) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (c, v) in &self.entries {
            if scope == OrderScope::Column && c != column {
                continue;
            }
            if !out.contains(&v.as_str()) {
                out.push(v.as_str());
            }
        }
        out
    }
}

impl<C: Into<String>, V: Into<String>> FromIterator<(C, V)> for PreferredOrder {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut order = PreferredOrder::new();
        for (c, v) in iter {
            order.push(c, v);
        }
        order
    }
}

/// Multi-digit ordering key; most significant digit first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankKey(Vec<usize>);

impl RankKey {
    pub fn digits(&self) -> &[usize] {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct OrderingPolicy<'a> {
    sublists: Vec<Vec<&'a str>>,
    enabled: bool,
}

impl<'a> OrderingPolicy<'a> {
    pub fn new(columns: &[String], preferred: &'a PreferredOrder, scope: OrderScope) -> Self {
        Self {
            sublists: columns
                .iter()
                .map(|c| preferred.sublist(c, scope))
                .collect(),
            enabled: !preferred.is_empty(),
        }
    }

    /// Whether a precedence list was supplied at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn rank(&self, values: &[String]) -> RankKey {
        RankKey(
            self.sublists
                .iter()
                .enumerate()
                .map(|(i, sublist)| {
                    values
                        .get(i)
                        .and_then(|v| sublist.iter().position(|s| *s == v.as_str()))
                        .unwrap_or(sublist.len())
                })
                .collect(),
        )
    }

    /// Stable ascending sort by [`RankKey`]; a no-op without a precedence list.
    pub fn sort_groups(&self, groups: &mut [Group]) {
        if !self.enabled {
            return;
        }
        groups.sort_by_cached_key(|g| self.rank(&g.values));
    }

    /// Orders one column's distinct values: listed values first, in list order, then the rest
    /// in encounter order.
    pub fn order_values<'v>(
        &self,
        column_idx: usize,
        values: impl IntoIterator<Item = &'v str>,
    ) -> Vec<&'v str> {
        let values: Vec<&'v str> = values.into_iter().collect();
        let Some(sublist) = self.sublists.get(column_idx) else {
            return values;
        };

        let mut out: Vec<&'v str> = Vec::with_capacity(values.len());
        for listed in sublist {
            if let Some(v) = values.iter().find(|v| **v == *listed) {
                out.push(*v);
            }
        }
        for v in &values {
            if !sublist.iter().any(|s| s == v) {
                out.push(*v);
            }
        }
        out
    }
}
