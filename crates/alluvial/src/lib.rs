#![forbid(unsafe_code)]

//! `alluvial` draws alluvial diagrams: categorical records flowing across ordered columns as
//! stacked, smoothly curved ribbons.
//!
//! # Features
//!
//! - `render`: enable layout, ribbon rendering and SVG output (`alluvial::render`)

pub use alluvial_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use alluvial_render::model::{AlluvialLayout, BandLayout, FlowLayout, LabelLayout};
    pub use alluvial_render::surface::{Halo, RecordingSurface, Surface, SurfaceOp, TextAnnotation};
    pub use alluvial_render::svg::{SvgRenderOptions, SvgSurface};
    pub use alluvial_render::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};
    pub use alluvial_render::{
        DrawOptions, RibbonStyle, draw, draw_svg, layout_aggregate, layout_alluvial,
        render_layout, render_ribbon,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] alluvial_core::Error),
        #[error(transparent)]
        Render(#[from] alluvial_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several diagrams can
    /// be inlined into one document.
    ///
    /// Unsupported characters become `-`, and ids not starting with an ASCII letter get an `a-`
    /// prefix.
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "a-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 2);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }

        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "a-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "a" {
            return "a-untitled".to_string();
        }
        out.to_string()
    }

    /// One-shot JSON pipeline: records and configuration as JSON text in, SVG out.
    ///
    /// `config_json` is merged over the default options, so it only needs the keys it changes;
    /// an empty string keeps every default. A `diagram_id` in `svg_options` goes through
    /// [`sanitize_svg_id`].
    pub fn render_svg_from_json(
        records_json: &str,
        columns: &[&str],
        config_json: &str,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let records = alluvial_core::RecordSet::from_json_str(records_json)?;

        let mut config = DrawOptions::new(columns.iter().copied()).to_config();
        if !config_json.trim().is_empty() {
            let overrides = alluvial_core::AlluvialConfig::from_json_str(config_json)?;
            config.deep_merge(overrides.as_value());
        }
        let options = DrawOptions::from_config(columns.iter().copied(), &config)?;

        let mut svg_options = svg_options.clone();
        svg_options.diagram_id = svg_options.diagram_id.as_deref().map(sanitize_svg_id);
        Ok(draw_svg(&records, &options, &svg_options)?)
    }
}
