use crate::model::{AlluvialLayout, BandLayout, HAlign, LabelLayout, LabelRole, VAlign};
use crate::surface::{Halo, TextAnnotation};

pub fn label_text(band: &BandLayout, show_counts: bool) -> String {
    if show_counts {
        format!("{} ({})", band.value, band.count)
    } else {
        band.value.clone()
    }
}

/// One label per band.
///
/// Outer columns are labelled beside the diagram. Interior columns put their topmost value above
/// the diagram, their bottommost value below it, and everything else just right of the axis.
/// "Above" and "below" are relative to the whole diagram, not to the band's own column.
pub fn place_labels(layout: &AlluvialLayout, show_counts: bool, pad: f64) -> Vec<LabelLayout> {
    let last_column = layout.columns.len().saturating_sub(1);
    let (diagram_top, diagram_bottom) = layout
        .bounds
        .as_ref()
        .map_or((0.0, 0.0), |b| (b.max_y, b.min_y));

    layout
        .bands
        .iter()
        .map(|band| {
            let (role, x, y, h_align, v_align) = if band.column == 0 {
                (
                    LabelRole::Leading,
                    band.x - pad,
                    band.center_y(),
                    HAlign::Right,
                    VAlign::Center,
                )
            } else if band.column == last_column {
                (
                    LabelRole::Trailing,
                    band.x + pad,
                    band.center_y(),
                    HAlign::Left,
                    VAlign::Center,
                )
            } else if band.is_first {
                (
                    LabelRole::Top,
                    band.x,
                    diagram_top + pad,
                    HAlign::Center,
                    VAlign::Bottom,
                )
            } else if band.is_last {
                (
                    LabelRole::Bottom,
                    band.x,
                    diagram_bottom - pad,
                    HAlign::Center,
                    VAlign::Top,
                )
            } else {
                (
                    LabelRole::Inline,
                    band.x + pad,
                    band.center_y(),
                    HAlign::Left,
                    VAlign::Center,
                )
            };

            LabelLayout {
                column: band.column,
                value: band.value.clone(),
                text: label_text(band, show_counts),
                x,
                y,
                h_align,
                v_align,
                role,
            }
        })
        .collect()
}

impl LabelLayout {
    pub fn to_annotation(&self) -> TextAnnotation {
        TextAnnotation {
            x: self.x,
            y: self.y,
            text: self.text.clone(),
            h_align: self.h_align,
            v_align: self.v_align,
            halo: Some(Halo::default()),
        }
    }
}
