use crate::Result;
use crate::label::place_labels;
use crate::layout::layout_alluvial;
use crate::model::{AlluvialLayout, LayoutPoint};
use crate::options::DrawOptions;
use crate::ribbon::render_ribbon;
use crate::surface::Surface;
use crate::svg::{SvgRenderOptions, SvgSurface};
use alluvial_core::RecordSet;
use alluvial_core::geom::Point;

/// Draws an alluvial diagram of `records` onto `surface` and hands the surface back.
///
/// On error the surface may already hold part of the drawing.
pub fn draw<'s, S: Surface + ?Sized>(
    records: &RecordSet,
    options: &DrawOptions,
    surface: &'s mut S,
) -> Result<&'s mut S> {
    let layout = layout_alluvial(records, options)?;
    render_layout(&layout, options, surface)?;
    Ok(surface)
}

/// Emits a precomputed layout: every flow ribbon in draw order, then labels, then hides axes.
pub fn render_layout<S: Surface + ?Sized>(
    layout: &AlluvialLayout,
    options: &DrawOptions,
    surface: &mut S,
) -> Result<()> {
    let style = options.ribbon_style();
    for flow in &layout.flows {
        let anchors: Vec<Point> = flow.anchors.iter().copied().map(LayoutPoint::to_point).collect();
        render_ribbon(&anchors, flow.height, &flow.color, style, surface)?;
    }

    if options.show_labels {
        for label in place_labels(layout, options.show_counts, options.label_pad) {
            surface.text(&label.to_annotation());
        }
    }

    surface.hide_axes();
    Ok(())
}

/// Draws onto a fresh [`SvgSurface`] and returns the finished document.
pub fn draw_svg(
    records: &RecordSet,
    options: &DrawOptions,
    svg_options: &SvgRenderOptions,
) -> Result<String> {
    let mut surface = SvgSurface::new(svg_options.clone());
    draw(records, options, &mut surface)?;
    Ok(surface.finish())
}
