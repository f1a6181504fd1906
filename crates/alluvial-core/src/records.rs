use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of categorical fields, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    rows: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds rows positionally: `rows[i][j]` is the value of `columns[j]`.
    pub fn from_rows<R, S>(columns: &[&str], rows: &[R]) -> Self
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let rows = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row.as_ref().iter())
                    .map(|(c, v)| (c.to_string(), v.as_ref().to_string()))
                    .collect::<Record>()
            })
            .collect();
        Self { rows }
    }

    /// Reads a JSON array of objects. Strings, numbers and booleans become category labels;
    /// `null` cells are treated as missing.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Some(items) = value.as_array() else {
            return Err(Error::InvalidRecords {
                message: "expected a JSON array of objects".to_string(),
            });
        };

        let mut rows = Vec::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            let Some(obj) = item.as_object() else {
                return Err(Error::InvalidRecords {
                    message: format!("row {idx} is not an object"),
                });
            };
            let mut record = Record::new();
            for (column, cell) in obj {
                match cell {
                    Value::Null => {}
                    Value::String(s) => record.insert(column.as_str(), s.as_str()),
                    Value::Number(n) => record.insert(column.as_str(), n.to_string()),
                    Value::Bool(b) => record.insert(column.as_str(), b.to_string()),
                    Value::Array(_) | Value::Object(_) => {
                        return Err(Error::InvalidRecords {
                            message: format!("row {idx} column {column} is not a scalar"),
                        });
                    }
                }
            }
            rows.push(record);
        }
        Ok(Self { rows })
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    pub fn push(&mut self, record: Record) {
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
