//! Reads a JSON array of records from stdin and prints an alluvial SVG.
//!
//! Columns are taken from the command line, or from the first record when none are given:
//!
//! ```text
//! echo '[{"src":"A","dst":"X"},{"src":"B","dst":"X"}]' | cargo run -p alluvial-render --example svg_stdin -- src dst
//! ```

use alluvial_core::{ColorSpec, Palette, RecordSet};
use alluvial_render::{DrawOptions, SvgRenderOptions, draw_svg};
use std::io::Read;

fn main() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("read stdin");

    let records = RecordSet::from_json_str(&input).expect("parse records");
    let mut columns: Vec<String> = std::env::args().skip(1).collect();
    if columns.is_empty() {
        let first = records.rows().first().expect("at least one record");
        columns = first.iter().map(|(k, _)| k.to_string()).collect();
    }

    let options = DrawOptions::new(columns)
        .with_counts(true)
        .with_color(ColorSpec::ByPalette {
            column: None,
            palette: Palette::default(),
        });
    let svg = draw_svg(&records, &options, &SvgRenderOptions::default()).expect("render svg");

    print!("{svg}");
}
