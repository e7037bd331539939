//! Overlays a georeferenced floor plan on a tiled map view.
//!
//! Three coordinate systems meet here: the document space of the original
//! floor-plan page, the projected map-plane space of the host, and the
//! device pixels of the render target. Each draw call composes the asset's
//! precomputed document→map-plane transform with a freshly resolved
//! map-plane→device transform and paints the page (plus optional
//! calibration markers) through the result. The spaces are distinct euclid
//! units, so mixing them without an explicit transform does not compile.

pub mod asset;
pub mod color;
pub mod defs;
pub mod diagnostics;
pub mod error;
pub mod paint;
pub mod renderer;
pub mod viewport;

pub use asset::{AnchorPoint, GeoPoint, OverlayAsset, PageIndex};
pub use color::Color;
pub use diagnostics::DiagnosticStyle;
pub use error::DrawError;
pub use paint::{PaintContext, TransformScope};
pub use renderer::{DrawOverlay, DrawRequest, OverlayRenderer};
pub use viewport::resolve_viewport;
