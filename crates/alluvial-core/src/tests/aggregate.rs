use crate::*;

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn aggregate_counts_each_value_tuple_once() {
    let records = RecordSet::from_rows(
        &["src", "dst"],
        &[["A", "X"], ["B", "Y"], ["A", "X"], ["A", "Y"]],
    );
    let agg = aggregate(&records, &cols(&["src", "dst"])).unwrap();

    assert_eq!(agg.total_count, 4);
    assert_eq!(agg.groups.len(), 3);
    assert_eq!(agg.groups[0].values, cols(&["A", "X"]));
    assert_eq!(agg.groups[0].count, 2);
    assert_eq!(agg.groups[1].values, cols(&["A", "Y"]));
    assert_eq!(agg.groups[2].values, cols(&["B", "Y"]));
    assert_eq!(agg.value_count(0, "A"), 3);
    assert_eq!(agg.value_count(1, "Y"), 2);
}

#[test]
fn aggregate_rejects_fewer_than_two_columns() {
    let records = RecordSet::from_rows(&["only_one"], &[["A"]]);
    let err = aggregate(&records, &cols(&["only_one"])).unwrap_err();
    assert!(matches!(err, Error::InvalidColumnCount { count: 1 }));
}

#[test]
fn aggregate_rejects_empty_input() {
    let err = aggregate(&RecordSet::new(), &cols(&["src", "dst"])).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
}

#[test]
fn aggregate_rejects_column_missing_from_every_row() {
    let records = RecordSet::from_rows(&["src", "dst"], &[["A", "X"]]);
    let err = aggregate(&records, &cols(&["src", "nope"])).unwrap_err();
    assert!(matches!(err, Error::UnknownColumn { column } if column == "nope"));
}

#[test]
fn aggregate_drops_rows_with_missing_values() {
    let mut records = RecordSet::from_rows(&["src", "dst"], &[["A", "X"], ["B", "Y"]]);
    records.push(Record::new().with("src", "C"));
    let agg = aggregate(&records, &cols(&["src", "dst"])).unwrap();

    assert_eq!(agg.total_count, 2);
    assert_eq!(agg.dropped_rows, 1);
    assert_eq!(agg.distinct_values(0).into_iter().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[test]
fn aggregate_with_only_incomplete_rows_is_empty() {
    let mut records = RecordSet::new();
    records.push(Record::new().with("src", "A"));
    records.push(Record::new().with("dst", "X"));
    let err = aggregate(&records, &cols(&["src", "dst"])).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
}

#[test]
fn preferred_order_sorts_groups_stably() {
    let records = RecordSet::from_rows(
        &["src", "dst"],
        &[["A", "X"], ["A", "Y"], ["B", "X"], ["B", "Y"]],
    );
    let columns = cols(&["src", "dst"]);
    let mut agg = aggregate(&records, &columns).unwrap();
    let preferred = PreferredOrder::new().with("src", "B").with("dst", "Y");
    let policy = OrderingPolicy::new(&columns, &preferred, OrderScope::Column);
    policy.sort_groups(&mut agg.groups);

    let order: Vec<Vec<String>> = agg.groups.iter().map(|g| g.values.clone()).collect();
    assert_eq!(
        order,
        vec![
            cols(&["B", "Y"]),
            cols(&["B", "X"]),
            cols(&["A", "Y"]),
            cols(&["A", "X"]),
        ]
    );
}

#[test]
fn empty_preferred_order_keeps_natural_order() {
    let records = RecordSet::from_rows(&["src", "dst"], &[["B", "X"], ["A", "Y"]]);
    let columns = cols(&["src", "dst"]);
    let mut agg = aggregate(&records, &columns).unwrap();
    let preferred = PreferredOrder::new();
    let policy = OrderingPolicy::new(&columns, &preferred, OrderScope::Column);
    assert!(!policy.is_enabled());
    policy.sort_groups(&mut agg.groups);
    assert_eq!(agg.groups[0].values, cols(&["A", "Y"]));
}

#[test]
fn malformed_preferred_entries_never_match() {
    let columns = cols(&["src", "dst"]);
    let preferred = PreferredOrder::new()
        .with("missing", "A")
        .with("src", "not-in-data");
    let policy = OrderingPolicy::new(&columns, &preferred, OrderScope::Column);

    let a = policy.rank(&cols(&["A", "X"]));
    let b = policy.rank(&cols(&["B", "X"]));
    assert_eq!(a, b);
    assert_eq!(a.digits(), &[1, 0]);
}

#[test]
fn ranking_is_deterministic() {
    let columns = cols(&["a", "b", "c"]);
    let preferred: PreferredOrder = [("a", "2"), ("b", "y"), ("c", "q"), ("a", "1")]
        .into_iter()
        .collect();
    let policy = OrderingPolicy::new(&columns, &preferred, OrderScope::Column);
    let values = cols(&["1", "y", "r"]);
    assert_eq!(policy.rank(&values), policy.rank(&values));
    assert_eq!(policy.rank(&values).digits(), &[1, 0, 1]);
}
