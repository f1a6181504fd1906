use crate::model::{Bounds, HAlign, VAlign};
use crate::surface::{Surface, TextAnnotation};
use crate::text::{DeterministicTextMeasurer, TextMeasurer, TextStyle};
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Clone)]
pub struct SvgRenderOptions {
    /// Pixels per data unit along x (the full column span).
    pub width: f64,
    /// Pixels per data unit along y (the full stacked height at zero margin).
    pub height: f64,
    /// Adds extra space around the computed viewBox.
    pub viewbox_padding: f64,
    /// Optional root `<svg id>`.
    pub diagram_id: Option<String>,
    pub background: Option<String>,
    pub label_style: TextStyle,
    pub text_color: String,
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
            viewbox_padding: 8.0,
            diagram_id: None,
            background: None,
            label_style: TextStyle::default(),
            text_color: "#222222".to_string(),
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

/// SVG-backed [`Surface`]. Drawing calls accumulate; [`SvgSurface::finish`] wraps them in a root
/// element whose viewBox covers everything drawn.
pub struct SvgSurface {
    options: SvgRenderOptions,
    ribbons: String,
    labels: String,
    bounds: Option<Bounds>,
    axes: bool,
}

impl SvgSurface {
    pub fn new(options: SvgRenderOptions) -> Self {
        Self {
            options,
            ribbons: String::new(),
            labels: String::new(),
            bounds: None,
            axes: true,
        }
    }

    pub fn options(&self) -> &SvgRenderOptions {
        &self.options
    }

    pub fn axes_visible(&self) -> bool {
        self.axes
    }

    fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.options.width, -y * self.options.height)
    }

    fn include(&mut self, px: f64, py: f64) {
        match self.bounds.as_mut() {
            Some(b) => b.include(px, py),
            None => {
                self.bounds = Some(Bounds {
                    min_x: px,
                    min_y: py,
                    max_x: px,
                    max_y: py,
                });
            }
        }
    }

    pub fn finish(&self) -> String {
        let bounds = self.bounds.clone().unwrap_or(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: self.options.width.max(1.0),
            max_y: self.options.height.max(1.0),
        });
        let pad = self.options.viewbox_padding.max(0.0);
        let vb_min_x = bounds.min_x - pad;
        let vb_min_y = bounds.min_y - pad;
        let vb_w = (bounds.width() + pad * 2.0).max(1.0);
        let vb_h = (bounds.height() + pad * 2.0).max(1.0);

        let mut out = String::new();
        let id_attr = self
            .options
            .diagram_id
            .as_deref()
            .map(|id| format!(r#" id="{}""#, escape_xml(id)))
            .unwrap_or_default();
        let _ = write!(
            &mut out,
            r#"<svg{id} xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{x} {y} {w} {h}" role="graphics-document document" aria-roledescription="alluvial">"#,
            id = id_attr,
            x = fmt(vb_min_x),
            y = fmt(vb_min_y),
            w = fmt(vb_w),
            h = fmt(vb_h),
        );
        if let Some(bg) = self.options.background.as_deref() {
            let _ = write!(
                &mut out,
                r#"<rect class="background" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                fmt(vb_min_x),
                fmt(vb_min_y),
                fmt(vb_w),
                fmt(vb_h),
                escape_xml(bg)
            );
        }

        if self.axes {
            // Column span along the top, stack depth down the left edge.
            let _ = write!(
                &mut out,
                r#"<g class="axes" stroke="{c}" stroke-width="1" fill="none"><line x1="0" y1="0" x2="{w}" y2="0"/><line x1="0" y1="0" x2="0" y2="{h}"/></g>"#,
                c = escape_xml(&self.options.text_color),
                w = fmt(self.options.width),
                h = fmt(bounds.max_y.max(0.0)),
            );
        }

        out.push_str(r#"<g class="flows">"#);
        out.push_str(&self.ribbons);
        out.push_str("</g>");

        let style = &self.options.label_style;
        let _ = write!(
            &mut out,
            r#"<g class="labels" font-size="{}""#,
            fmt(style.font_size)
        );
        if let Some(family) = style.font_family.as_deref() {
            let _ = write!(&mut out, r#" font-family="{}""#, escape_xml(family));
        }
        if let Some(weight) = style.font_weight.as_deref() {
            let _ = write!(&mut out, r#" font-weight="{}""#, escape_xml(weight));
        }
        out.push('>');
        out.push_str(&self.labels);
        out.push_str("</g>");

        out.push_str("</svg>");
        out
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(SvgRenderOptions::default())
    }
}

impl Surface for SvgSurface {
    fn fill_between(&mut self, xs: &[f64], upper: &[f64], lower: &[f64], color: &str) {
        let n = xs.len().min(upper.len()).min(lower.len());
        if n == 0 {
            return;
        }

        let mut d = String::new();
        for i in 0..n {
            let (px, py) = self.to_px(xs[i], upper[i]);
            self.include(px, py);
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(&mut d, "{cmd}{},{}", fmt_path(px), fmt_path(py));
        }
        for i in (0..n).rev() {
            let (px, py) = self.to_px(xs[i], lower[i]);
            self.include(px, py);
            let _ = write!(&mut d, "L{},{}", fmt_path(px), fmt_path(py));
        }
        d.push('Z');

        let _ = write!(
            &mut self.ribbons,
            r#"<path class="flow" d="{}" fill="{}" stroke="none"/>"#,
            d,
            escape_xml(color)
        );
    }

    fn text(&mut self, annotation: &TextAnnotation) {
        let (px, py) = self.to_px(annotation.x, annotation.y);
        let metrics = self
            .options
            .text_measurer
            .measure(&annotation.text, &self.options.label_style);

        let (anchor, left) = match annotation.h_align {
            HAlign::Left => ("start", px),
            HAlign::Center => ("middle", px - metrics.width / 2.0),
            HAlign::Right => ("end", px - metrics.width),
        };
        let (baseline, top) = match annotation.v_align {
            VAlign::Top => ("hanging", py),
            VAlign::Center => ("central", py - metrics.height / 2.0),
            VAlign::Bottom => ("text-after-edge", py - metrics.height),
        };
        self.include(left, top);
        self.include(left + metrics.width, top + metrics.height);

        let _ = write!(
            &mut self.labels,
            r#"<text x="{}" y="{}" text-anchor="{}" dominant-baseline="{}" fill="{}""#,
            fmt(px),
            fmt(py),
            anchor,
            baseline,
            escape_xml(&self.options.text_color),
        );
        if let Some(halo) = &annotation.halo {
            let _ = write!(
                &mut self.labels,
                r#" stroke="{}" stroke-width="{}" stroke-linejoin="round" paint-order="stroke""#,
                escape_xml(&halo.color),
                fmt(halo.width),
            );
        }
        let _ = write!(&mut self.labels, ">{}</text>", escape_xml(&annotation.text));
    }

    fn hide_axes(&mut self) {
        self.axes = false;
    }
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal without `-0` and tiny float noise.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn fmt_path(v: f64) -> String {
    // 3 fractional digits, ties half-up.
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.abs() < 0.0005 {
        return "0".to_string();
    }

    let scaled = v * 1000.0;
    let mut r = (scaled + 0.5).floor() / 1000.0;
    if r.abs() < 0.0005 {
        r = 0.0;
    }

    let mut s = format!("{r:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_drops_float_noise() {
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(12.0000001), "12");
        assert_eq!(fmt(1.5), "1.5");
        assert_eq!(fmt(f64::NAN), "0");
    }

    #[test]
    fn fmt_path_keeps_three_digits() {
        assert_eq!(fmt_path(1.23456), "1.235");
        assert_eq!(fmt_path(2.0), "2");
        assert_eq!(fmt_path(-0.0001), "0");
        assert_eq!(fmt_path(-1.5), "-1.5");
    }

    #[test]
    fn escape_xml_escapes_markup() {
        assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
