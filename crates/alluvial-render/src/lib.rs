#![forbid(unsafe_code)]

//! Headless alluvial rendering.
//!
//! [`layout::layout_alluvial`] turns records into band and flow geometry, [`ribbon`] fills Bezier
//! ribbons through that geometry, and [`draw::draw`] emits everything onto a [`Surface`]. The
//! bundled [`svg::SvgSurface`] produces standalone SVG.

pub mod bezier;
pub mod draw;
pub mod label;
pub mod layout;
pub mod model;
pub mod options;
pub mod ribbon;
pub mod surface;
pub mod svg;
pub mod text;

pub use draw::{draw, draw_svg, render_layout};
pub use layout::{layout_aggregate, layout_alluvial};
pub use model::AlluvialLayout;
pub use options::DrawOptions;
pub use ribbon::{RibbonStyle, render_ribbon};
pub use surface::{RecordingSurface, Surface, SurfaceOp, TextAnnotation};
pub use svg::{SvgRenderOptions, SvgSurface};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] alluvial_core::Error),

    #[error("ribbon thickness must be finite and non-negative, got {thickness}")]
    InvalidThickness { thickness: f64 },

    #[error("band margin must be finite and non-negative, got {margin}")]
    InvalidMargin { margin: f64 },

    #[error("invalid layout: {message}")]
    InvalidLayout { message: String },

    #[error("invalid config value at {path}: {message}")]
    InvalidConfig { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
