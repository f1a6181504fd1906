use crate::color::{DEFAULT_FLOW_COLOR, is_color_like};
use crate::*;

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn sample() -> Aggregate {
    let records = RecordSet::from_rows(
        &["src", "dst"],
        &[["A", "X"], ["A", "Y"], ["B", "X"], ["B", "Y"], ["C", "X"]],
    );
    aggregate(&records, &cols(&["src", "dst"])).unwrap()
}

#[test]
fn default_spec_uses_translucent_gray() {
    let agg = sample();
    let table = ColorTable::resolve(&ColorSpec::Default, &agg).unwrap();
    assert_eq!(table.len(), agg.groups.len());
    assert!((0..table.len()).all(|i| table.get(i) == Some(DEFAULT_FLOW_COLOR)));
}

#[test]
fn constant_spec_colors_every_flow() {
    let agg = sample();
    let table = ColorTable::resolve(&ColorSpec::constant("#ff0000"), &agg).unwrap();
    assert!((0..table.len()).all(|i| table.get(i) == Some("#ff0000")));
}

#[test]
fn function_spec_sees_the_full_path() {
    let agg = sample();
    let spec = ColorSpec::by_function(|path| {
        if path.get("dst") == Some("X") {
            "#00ff00".to_string()
        } else {
            "#0000ff".to_string()
        }
    });
    let table = ColorTable::resolve(&spec, &agg).unwrap();
    for (i, g) in agg.groups.iter().enumerate() {
        let expected = if g.values[1] == "X" { "#00ff00" } else { "#0000ff" };
        assert_eq!(table.get(i), Some(expected));
    }
}

#[test]
fn palette_spec_is_stable_per_color_by_value() {
    let agg = sample();
    let spec = ColorSpec::by_palette("src", Palette::Named("Set2".to_string()));
    let table = ColorTable::resolve(&spec, &agg).unwrap();

    // A,X / A,Y share "A"; B,X / B,Y share "B".
    assert_eq!(table.get(0), table.get(1));
    assert_eq!(table.get(2), table.get(3));
    assert_ne!(table.get(0), table.get(2));
    assert_eq!(table.get(0), Some("#66c2a5aa"));
    assert_eq!(table.get(2), Some("#fc8d62aa"));
}

#[test]
fn palette_wraps_when_exhausted() {
    let agg = sample();
    let palette = Palette::Colors(vec!["#111111".to_string(), "#222222".to_string()]);
    let spec = ColorSpec::by_palette("src", palette);
    let table = ColorTable::resolve(&spec, &agg).unwrap();
    // A -> #111111, B -> #222222, C -> #111111
    assert_eq!(table.get(4), Some("#111111"));
}

#[test]
fn palette_column_defaults_to_first_column() {
    let agg = sample();
    let spec = ColorSpec::ByPalette {
        column: None,
        palette: Palette::default(),
    };
    let table = ColorTable::resolve(&spec, &agg).unwrap();
    assert_eq!(table.get(0), table.get(1));
}

#[test]
fn color_like_palette_name_is_a_constant() {
    let agg = sample();
    let spec = ColorSpec::by_palette("dst", Palette::Named("#abcdef".to_string()));
    let table = ColorTable::resolve(&spec, &agg).unwrap();
    assert!((0..table.len()).all(|i| table.get(i) == Some("#abcdef")));
}

#[test]
fn unknown_palette_and_column_are_errors() {
    let agg = sample();
    let err = ColorTable::resolve(
        &ColorSpec::by_palette("src", Palette::Named("NoSuchScheme".to_string())),
        &agg,
    )
    .unwrap_err();
    assert!(matches!(err, Error::UnknownPalette { .. }));

    let err = ColorTable::resolve(&ColorSpec::by_palette("nope", Palette::default()), &agg)
        .unwrap_err();
    assert!(matches!(err, Error::UnknownColumn { .. }));
}

#[test]
fn mapping_lookup_of_unknown_value_is_unresolved() {
    let agg = sample();
    let mapping = ColorMapping::build(&agg, "dst", &Palette::default()).unwrap();
    assert_eq!(mapping.column(), "dst");
    assert_eq!(mapping.iter().count(), 2);
    let err = mapping.lookup(&cols(&["A", "Z"])).unwrap_err();
    assert!(matches!(
        err,
        Error::UnresolvedColorKey { column, value } if column == "dst" && value == "Z"
    ));
}

#[test]
fn color_like_detection() {
    assert!(is_color_like("#fff"));
    assert!(is_color_like("#44444480"));
    assert!(is_color_like("rgba(0, 0, 0, 0.5)"));
    assert!(is_color_like("Navy"));
    assert!(!is_color_like("Set2"));
    assert!(!is_color_like("#12345"));
}
