//! Drawing-surface abstraction.
//!
//! Coordinates are in data space: column axes at `x` in `[0, 1]`, bands stacked downwards from
//! `y = 0`. Surfaces map that space onto their own output.

use crate::model::{HAlign, VAlign};

/// Outline drawn behind label text for legibility.
#[derive(Debug, Clone, PartialEq)]
pub struct Halo {
    pub color: String,
    pub width: f64,
}

impl Default for Halo {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            width: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub halo: Option<Halo>,
}

pub trait Surface {
    /// Fills the region between `upper` and `lower`, both sampled at the shared `xs`.
    fn fill_between(&mut self, xs: &[f64], upper: &[f64], lower: &[f64], color: &str);

    fn text(&mut self, annotation: &TextAnnotation);

    fn hide_axes(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn fill_between(&mut self, xs: &[f64], upper: &[f64], lower: &[f64], color: &str) {
        (**self).fill_between(xs, upper, lower, color);
    }

    fn text(&mut self, annotation: &TextAnnotation) {
        (**self).text(annotation);
    }

    fn hide_axes(&mut self) {
        (**self).hide_axes();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    FillBetween {
        xs: Vec<f64>,
        upper: Vec<f64>,
        lower: Vec<f64>,
        color: String,
    },
    Text(TextAnnotation),
    HideAxes,
}

/// Keeps every call in order; useful for inspecting what a draw produced.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fills(&self) -> impl Iterator<Item = (&[f64], &[f64], &[f64], &str)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::FillBetween {
                xs,
                upper,
                lower,
                color,
            } => Some((xs.as_slice(), upper.as_slice(), lower.as_slice(), color.as_str())),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextAnnotation> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn axes_hidden(&self) -> bool {
        self.ops.iter().any(|op| matches!(op, SurfaceOp::HideAxes))
    }
}

impl Surface for RecordingSurface {
    fn fill_between(&mut self, xs: &[f64], upper: &[f64], lower: &[f64], color: &str) {
        self.ops.push(SurfaceOp::FillBetween {
            xs: xs.to_vec(),
            upper: upper.to_vec(),
            lower: lower.to_vec(),
            color: color.to_string(),
        });
    }

    fn text(&mut self, annotation: &TextAnnotation) {
        self.ops.push(SurfaceOp::Text(annotation.clone()));
    }

    fn hide_axes(&mut self) {
        self.ops.push(SurfaceOp::HideAxes);
    }
}
