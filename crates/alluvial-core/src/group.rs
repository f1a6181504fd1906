use crate::records::RecordSet;
use crate::{Error, Result};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One unique combination of values across the selected columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// `values[i]` belongs to `columns[i]`.
    pub values: Vec<String>,
    pub count: u64,
}

/// Records grouped by the full tuple of selected columns, in natural (lexicographic) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aggregate {
    pub columns: Vec<String>,
    pub groups: Vec<Group>,
    pub total_count: u64,
    /// Rows left out because they had no value for at least one selected column.
    pub dropped_rows: usize,
}

impl Aggregate {
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Distinct values of one column in encounter order over `groups`.
    pub fn distinct_values(&self, column_idx: usize) -> IndexSet<&str> {
        self.groups
            .iter()
            .filter_map(|g| g.values.get(column_idx).map(String::as_str))
            .collect()
    }

    /// Record count of every group holding `value` in `column_idx`.
    pub fn value_count(&self, column_idx: usize, value: &str) -> u64 {
        self.groups
            .iter()
            .filter(|g| g.values.get(column_idx).is_some_and(|v| v == value))
            .map(|g| g.count)
            .sum()
    }

    pub fn path<'a>(&'a self, group: &'a Group) -> FlowPath<'a> {
        FlowPath {
            columns: &self.columns,
            values: &group.values,
            count: group.count,
        }
    }
}

/// Borrowed view of one group's `(column, value)` path, handed to color callbacks.
#[derive(Debug, Clone, Copy)]
pub struct FlowPath<'a> {
    columns: &'a [String],
    values: &'a [String],
    count: u64,
}

impl<'a> FlowPath<'a> {
    pub fn new(columns: &'a [String], values: &'a [String], count: u64) -> Self {
        Self {
            columns,
            values,
            count,
        }
    }

    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.values.get(idx).map(String::as_str)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn values(&self) -> &'a [String] {
        self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        let columns = self.columns;
        let values = self.values;
        columns
            .iter()
            .zip(values.iter())
            .map(|(c, v)| (c.as_str(), v.as_str()))
    }
}

pub fn ensure_column_count(columns: &[String]) -> Result<()> {
    if columns.len() < 2 {
        return Err(Error::InvalidColumnCount {
            count: columns.len(),
        });
    }
    Ok(())
}

/// Groups `records` by the tuple of `columns` values and counts rows per group.
pub fn aggregate(records: &RecordSet, columns: &[String]) -> Result<Aggregate> {
    ensure_column_count(columns)?;

    if !records.is_empty() {
        for column in columns {
            if !records.rows().iter().any(|r| r.contains(column)) {
                return Err(Error::UnknownColumn {
                    column: column.clone(),
                });
            }
        }
    }

    let mut counts: FxHashMap<Vec<String>, u64> = FxHashMap::default();
    let mut dropped_rows = 0usize;
    for record in records.rows() {
        let key: Option<Vec<String>> = columns
            .iter()
            .map(|c| record.get(c).map(|v| v.to_string()))
            .collect();
        match key {
            Some(key) => *counts.entry(key).or_insert(0) += 1,
            None => dropped_rows += 1,
        }
    }

    let mut groups: Vec<Group> = counts
        .into_iter()
        .map(|(values, count)| Group { values, count })
        .collect();
    groups.sort_by(|a, b| a.values.cmp(&b.values));

    let total_count: u64 = groups.iter().map(|g| g.count).sum();
    tracing::debug!(
        groups = groups.len(),
        total_count,
        dropped_rows,
        "aggregated records"
    );
    if total_count == 0 {
        return Err(Error::EmptyInput);
    }

    Ok(Aggregate {
        columns: columns.to_vec(),
        groups,
        total_count,
        dropped_rows,
    })
}
