//! Per-flow color policies.
//!
//! A [`ColorSpec`] is resolved once per draw into a [`ColorTable`] holding one color per group,
//! so every flow sharing a `color_by` value gets the identical string.

use crate::group::{Aggregate, FlowPath};
use crate::{Error, Result};
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_FLOW_COLOR: &str = "#444444aa";
pub const DEFAULT_PALETTE: &str = "Set2";

/// Alpha suffix appended to colors taken from named palettes.
const NAMED_PALETTE_ALPHA: &str = "aa";

const SET1: [&str; 9] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];
const SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];
const SET3: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];
const PASTEL1: [&str; 9] = [
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#f2f2f2",
];
const DARK2: [&str; 8] = [
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];
const PAIRED: [&str; 12] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];
const TAB10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];
const TABLEAU10: [&str; 10] = [
    "#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

const CSS_COLOR_NAMES: [&str; 24] = [
    "black", "white", "gray", "grey", "silver", "red", "maroon", "orange", "yellow", "olive",
    "lime", "green", "teal", "aqua", "cyan", "blue", "navy", "purple", "fuchsia", "magenta",
    "pink", "brown", "gold", "transparent",
];

fn named_palette(name: &str) -> Option<&'static [&'static str]> {
    match name.to_ascii_lowercase().as_str() {
        "set1" => Some(&SET1),
        "set2" => Some(&SET2),
        "set3" => Some(&SET3),
        "pastel1" => Some(&PASTEL1),
        "dark2" => Some(&DARK2),
        "paired" => Some(&PAIRED),
        "tab10" => Some(&TAB10),
        "tableau10" => Some(&TABLEAU10),
        _ => None,
    }
}

/// Whether `raw` reads as a single color rather than a palette name.
pub fn is_color_like(raw: &str) -> bool {
    let s = raw.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    let lower = s.to_ascii_lowercase();
    if ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|p| lower.starts_with(p))
    {
        return lower.ends_with(')');
    }
    CSS_COLOR_NAMES.contains(&lower.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Palette {
    /// A named scheme (`Set2`, `tab10`, ...) or a single color applied to every key.
    Named(String),
    Colors(Vec<String>),
}

impl Palette {
    fn colors(&self) -> Result<Vec<String>> {
        match self {
            Palette::Colors(colors) if colors.is_empty() => Err(Error::UnknownPalette {
                name: "<empty>".to_string(),
            }),
            Palette::Colors(colors) => Ok(colors.clone()),
            Palette::Named(name) => {
                if let Some(scheme) = named_palette(name) {
                    Ok(scheme
                        .iter()
                        .map(|c| format!("{c}{NAMED_PALETTE_ALPHA}"))
                        .collect())
                } else if is_color_like(name) {
                    Ok(vec![name.trim().to_string()])
                } else {
                    Err(Error::UnknownPalette { name: name.clone() })
                }
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Named(DEFAULT_PALETTE.to_string())
    }
}

pub type ColorFn = Arc<dyn Fn(&FlowPath<'_>) -> String + Send + Sync>;

#[derive(Clone, Default)]
pub enum ColorSpec {
    /// Fixed neutral translucent gray.
    #[default]
    Default,
    Constant(String),
    ByFunction(ColorFn),
    /// Distinct values of `column` (first column when `None`) cycle through `palette`.
    ByPalette {
        column: Option<String>,
        palette: Palette,
    },
}

impl ColorSpec {
    pub fn constant(color: impl Into<String>) -> Self {
        Self::Constant(color.into())
    }

    pub fn by_function<F>(f: F) -> Self
    where
        F: Fn(&FlowPath<'_>) -> String + Send + Sync + 'static,
    {
        Self::ByFunction(Arc::new(f))
    }

    pub fn by_palette(column: impl Into<String>, palette: Palette) -> Self {
        Self::ByPalette {
            column: Some(column.into()),
            palette,
        }
    }
}

impl fmt::Debug for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Default => f.write_str("Default"),
            ColorSpec::Constant(c) => f.debug_tuple("Constant").field(c).finish(),
            ColorSpec::ByFunction(_) => f.write_str("ByFunction(..)"),
            ColorSpec::ByPalette { column, palette } => f
                .debug_struct("ByPalette")
                .field("column", column)
                .field("palette", palette)
                .finish(),
        }
    }
}

/// `color_by` value -> color, built from the distinct values in natural group order.
#[derive(Debug, Clone)]
pub struct ColorMapping {
    column: String,
    column_idx: usize,
    colors: IndexMap<String, String>,
}

impl ColorMapping {
    pub fn build(aggregate: &Aggregate, column: &str, palette: &Palette) -> Result<Self> {
        let column_idx = aggregate
            .column_index(column)
            .ok_or_else(|| Error::UnknownColumn {
                column: column.to_string(),
            })?;
        let palette = palette.colors()?;
        let colors = aggregate
            .distinct_values(column_idx)
            .into_iter()
            .enumerate()
            .map(|(i, key)| (key.to_string(), palette[i % palette.len()].clone()))
            .collect();
        Ok(Self {
            column: column.to_string(),
            column_idx,
            colors,
        })
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn lookup(&self, values: &[String]) -> Result<&str> {
        let value = values.get(self.column_idx).map(String::as_str).unwrap_or("");
        self.colors
            .get(value)
            .map(String::as_str)
            .ok_or_else(|| Error::UnresolvedColorKey {
                column: self.column.clone(),
                value: value.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One resolved color per group, aligned with `Aggregate::groups`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<String>,
}

impl ColorTable {
    pub fn resolve(spec: &ColorSpec, aggregate: &Aggregate) -> Result<Self> {
        let colors = match spec {
            ColorSpec::Default => vec![DEFAULT_FLOW_COLOR.to_string(); aggregate.groups.len()],
            ColorSpec::Constant(c) => vec![c.clone(); aggregate.groups.len()],
            ColorSpec::ByFunction(f) => aggregate
                .groups
                .iter()
                .map(|g| f(&aggregate.path(g)))
                .collect(),
            ColorSpec::ByPalette { column, palette } => {
                let column = column
                    .as_deref()
                    .or_else(|| aggregate.columns.first().map(String::as_str))
                    .unwrap_or_default();
                let mapping = ColorMapping::build(aggregate, column, palette)?;
                aggregate
                    .groups
                    .iter()
                    .map(|g| mapping.lookup(&g.values).map(str::to_string))
                    .collect::<Result<Vec<_>>>()?
            }
        };
        Ok(Self { colors })
    }

    pub fn get(&self, group_idx: usize) -> Option<&str> {
        self.colors.get(group_idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
