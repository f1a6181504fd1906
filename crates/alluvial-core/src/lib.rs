#![forbid(unsafe_code)]

//! Records, grouping, ordering and color policies for alluvial diagrams (headless).
//!
//! Design goals:
//! - deterministic outputs: the same records and options always yield the same groups, ranks
//!   and colors
//! - no rendering concerns; geometry lives in `alluvial-render`

pub mod color;
pub mod config;
pub mod error;
pub mod geom;
pub mod group;
pub mod ordering;
pub mod records;

pub use color::{ColorMapping, ColorSpec, ColorTable, Palette};
pub use config::AlluvialConfig;
pub use error::{Error, Result};
pub use group::{Aggregate, FlowPath, Group, aggregate};
pub use ordering::{OrderScope, OrderingPolicy, PreferredOrder, RankKey};
pub use records::{Record, RecordSet};

#[cfg(test)]
mod tests;
