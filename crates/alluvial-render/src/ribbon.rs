//! Filled Bezier ribbons through ordered anchor points.

use crate::bezier::{self, Curve};
use crate::surface::Surface;
use crate::{Error, Result};
use alluvial_core::geom::{Point, point, vector};

pub const DEFAULT_SMOOTHING: f64 = 0.3;
pub const DEFAULT_SAMPLES: usize = 100;
/// Upper bound on samples per curve; each sample is allocated up front.
pub const MAX_SAMPLES: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonStyle {
    /// Fraction of each gap between anchors over which the curve keeps the anchor's height.
    pub smoothing: f64,
    pub samples: usize,
}

impl Default for RibbonStyle {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Expands anchors into a control polygon: every anchor is flanked by flat handles at its own
/// height, `r` of the way towards its neighbours.
pub fn smoothed_control_points(anchors: &[Point], r: f64) -> Vec<Point> {
    let Some(first) = anchors.first() else {
        return Vec::new();
    };
    let last = anchors.len() - 1;

    let mut out = Vec::with_capacity(anchors.len() * 3);
    out.push(*first);
    for (i, a) in anchors.iter().enumerate() {
        if i != 0 {
            let prev = anchors[i - 1];
            out.push(point(a.x - (a.x - prev.x) * r, a.y));
            out.push(*a);
        }
        if i != last {
            let next = anchors[i + 1];
            out.push(point(a.x + (next.x - a.x) * r, a.y));
        }
    }
    out
}

/// Top and bottom edge of one ribbon piece, sampled at shared x positions.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbonSegment {
    pub xs: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

pub fn ribbon_segment(anchors: &[Point], thickness: f64, style: RibbonStyle) -> RibbonSegment {
    let top = smoothed_control_points(anchors, style.smoothing);
    let shift = vector(0.0, -thickness);
    let bottom: Vec<Point> = top.iter().map(|p| *p + shift).collect();

    let Curve { xs, ys: upper } = bezier::evaluate(&top, style.samples);
    let Curve { ys: lower, .. } = bezier::evaluate(&bottom, style.samples);
    RibbonSegment { xs, upper, lower }
}

/// Draws a ribbon of `thickness` whose top edge passes through `anchors`.
///
/// Each consecutive anchor pair is curved and filled on its own, so smoothing stays local to
/// that pair.
pub fn render_ribbon<S: Surface + ?Sized>(
    anchors: &[Point],
    thickness: f64,
    color: &str,
    style: RibbonStyle,
    surface: &mut S,
) -> Result<()> {
    if !thickness.is_finite() || thickness < 0.0 {
        return Err(Error::InvalidThickness { thickness });
    }

    let mut sorted = anchors.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    for pair in sorted.windows(2) {
        let segment = ribbon_segment(pair, thickness, style);
        surface.fill_between(&segment.xs, &segment.upper, &segment.lower, color);
    }
    Ok(())
}
