use crate::model::{AlluvialLayout, BandLayout, Bounds, FlowLayout, LayoutPoint};
use crate::options::DrawOptions;
use crate::{Error, Result};
use alluvial_core::group::ensure_column_count;
use alluvial_core::{Aggregate, ColorTable, OrderingPolicy, RecordSet};
use rustc_hash::FxHashMap;

/// Offset-table key: one `(column, value)` position on a column axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct OffsetKey<'a> {
    column: usize,
    value: &'a str,
}

fn column_x(column: usize, column_count: usize) -> f64 {
    column as f64 / (column_count as f64 - 1.0)
}

pub fn layout_alluvial(records: &RecordSet, options: &DrawOptions) -> Result<AlluvialLayout> {
    let aggregate = alluvial_core::aggregate(records, &options.columns)?;
    layout_aggregate(&aggregate, options)
}

/// Lays out already-aggregated groups.
///
/// Band tops are stacked per column with `options.margin` between neighbouring values. Flows
/// then walk the columns in resolved order, each one consuming `count / total` of the bands it
/// crosses, so flows through the same value stack without overlapping.
pub fn layout_aggregate(aggregate: &Aggregate, options: &DrawOptions) -> Result<AlluvialLayout> {
    let columns = &aggregate.columns;
    ensure_column_count(columns)?;
    if !options.margin.is_finite() || options.margin < 0.0 {
        return Err(Error::InvalidMargin {
            margin: options.margin,
        });
    }
    if aggregate.total_count == 0 {
        return Err(alluvial_core::Error::EmptyInput.into());
    }
    let total = aggregate.total_count as f64;
    let column_count = columns.len();

    let policy = OrderingPolicy::new(columns, &options.preferred_order, options.order_scope);
    let colors = ColorTable::resolve(&options.color, aggregate)?;

    let mut band_tops: FxHashMap<OffsetKey<'_>, f64> = FxHashMap::default();
    let mut bands: Vec<BandLayout> = Vec::new();
    for (ci, column) in columns.iter().enumerate() {
        let x = column_x(ci, column_count);
        let values = policy.order_values(ci, aggregate.distinct_values(ci));
        let value_count = values.len();

        let mut stacked = 0.0;
        for (position, value) in values.into_iter().enumerate() {
            let count = aggregate.value_count(ci, value);
            let height = count as f64 / total;
            band_tops.insert(OffsetKey { column: ci, value }, -stacked);
            bands.push(BandLayout {
                column: ci,
                column_name: column.clone(),
                value: value.to_string(),
                x,
                top: -stacked,
                height,
                count,
                position,
                is_first: position == 0,
                is_last: position + 1 == value_count,
            });
            stacked += height + options.margin;
        }
    }

    let mut order: Vec<usize> = (0..aggregate.groups.len()).collect();
    if policy.is_enabled() {
        order.sort_by_cached_key(|&gi| policy.rank(&aggregate.groups[gi].values));
    }

    // Consumption cursor, separate from the band tops it starts from.
    let mut cursor = band_tops.clone();
    let mut flows: Vec<FlowLayout> = Vec::with_capacity(order.len());
    for (index, &gi) in order.iter().enumerate() {
        let group = &aggregate.groups[gi];
        let height = group.count as f64 / total;

        let mut anchors = Vec::with_capacity(column_count);
        for (ci, value) in group.values.iter().enumerate() {
            let key = OffsetKey {
                column: ci,
                value: value.as_str(),
            };
            let slot = cursor
                .get_mut(&key)
                .ok_or_else(|| Error::InvalidLayout {
                    message: format!("no band for {}={}", columns[ci], value),
                })?;
            anchors.push(LayoutPoint {
                x: column_x(ci, column_count),
                y: *slot,
            });
            *slot -= height;
        }

        let color = colors
            .get(gi)
            .map(str::to_string)
            .ok_or_else(|| Error::InvalidLayout {
                message: format!("no color resolved for group {gi}"),
            })?;

        tracing::trace!(index, group = gi, height, ?anchors, "placed flow");
        flows.push(FlowLayout {
            index,
            group: gi,
            values: group.values.clone(),
            count: group.count,
            height,
            anchors,
            rank: policy.rank(&group.values),
            color,
        });
    }

    let bounds = Bounds::from_points(
        bands
            .iter()
            .flat_map(|b| [(b.x, b.top), (b.x, b.bottom())]),
    );
    tracing::debug!(
        columns = column_count,
        bands = bands.len(),
        flows = flows.len(),
        total_count = aggregate.total_count,
        "laid out alluvial diagram"
    );

    Ok(AlluvialLayout {
        bounds,
        columns: columns.clone(),
        total_count: aggregate.total_count,
        margin: options.margin,
        bands,
        flows,
    })
}
