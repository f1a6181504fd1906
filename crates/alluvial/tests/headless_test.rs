#![cfg(feature = "render")]

use alluvial::render::{HeadlessError, SvgRenderOptions, render_svg_from_json, sanitize_svg_id};
use serde_json::json;

fn src_dst_json() -> String {
    json!([
        {"src": "A", "dst": "X"},
        {"src": "A", "dst": "Y"},
        {"src": "B", "dst": "X"}
    ])
    .to_string()
}

#[test]
fn json_pipeline_renders_svg() {
    let config = json!({"color": {"palette": "Set2"}, "labels": {"showCounts": true}});
    let svg = render_svg_from_json(
        &src_dst_json(),
        &["src", "dst"],
        &config.to_string(),
        &SvgRenderOptions::default(),
    )
    .unwrap();

    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches(r#"<path class="flow""#).count(), 3);
    assert!(svg.contains(r##"fill="#66c2a5aa""##));
    assert!(svg.contains("A (2)"));
}

#[test]
fn empty_config_uses_defaults() {
    let svg = render_svg_from_json(
        &json!([{"a": "1", "b": "2"}]).to_string(),
        &["a", "b"],
        "",
        &SvgRenderOptions::default(),
    )
    .unwrap();
    assert!(svg.contains(r##"fill="#444444aa""##));
    assert_eq!(svg.matches("<text").count(), 2);
}

#[test]
fn partial_config_keeps_the_other_defaults() {
    let config = json!({"labels": {"show": false}, "ribbon": {"samples": 4}});
    let svg = render_svg_from_json(
        &src_dst_json(),
        &["src", "dst"],
        &config.to_string(),
        &SvgRenderOptions::default(),
    )
    .unwrap();

    assert_eq!(svg.matches("<text").count(), 0);
    assert!(svg.contains(r##"fill="#444444aa""##));
    // Four samples per edge: M + 3 L along the top, 4 L back along the bottom.
    let first_path = svg.split(r#" d=""#).nth(1).unwrap();
    let d = first_path.split('"').next().unwrap();
    assert_eq!(d.matches('L').count(), 7);
}

#[test]
fn diagram_id_is_sanitized() {
    let svg_options = SvgRenderOptions {
        diagram_id: Some("1 flows<x>".to_string()),
        ..Default::default()
    };
    let svg = render_svg_from_json(&src_dst_json(), &["src", "dst"], "", &svg_options).unwrap();
    assert!(svg.starts_with(r#"<svg id="a-1-flows-x""#));
}

#[test]
fn malformed_records_surface_core_errors() {
    let svg_options = SvgRenderOptions::default();
    let err = render_svg_from_json("{", &["a", "b"], "", &svg_options).unwrap_err();
    assert!(matches!(err, HeadlessError::Core(alluvial::Error::Json(_))));

    let err = render_svg_from_json("[]", &["a", "b"], "", &svg_options).unwrap_err();
    assert!(matches!(err, HeadlessError::Render(_)));
    assert_eq!(err.to_string(), "records aggregate to a total count of zero");
}

#[test]
fn sanitize_svg_id_produces_safe_tokens() {
    assert_eq!(sanitize_svg_id("  "), "a-untitled");
    assert_eq!(sanitize_svg_id("1 flows"), "a-1-flows");
    assert_eq!(sanitize_svg_id("diagram<1>"), "diagram-1");
}
