use euclid::{point2, size2};

use crate::asset::OverlayAsset;
use crate::color::Color;
use crate::defs::*;
use crate::paint::PaintContext;

/// Fill colors for the calibration kit. Keep all four semi-transparent so
/// the page stays visible underneath.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiagnosticStyle {
    pub anchor_a: Color,
    pub anchor_b: Color,
    pub ruler_x: Color,
    pub ruler_y: Color,
}

impl Default for DiagnosticStyle {
    fn default() -> Self {
        Self {
            anchor_a: Color::CYAN.alpha(0.4),
            anchor_b: Color::MAGENTA.alpha(0.4),
            ruler_x: Color::YELLOW.alpha(0.4),
            ruler_y: Color::GREEN.alpha(0.4),
        }
    }
}

/// Paints the calibration kit, entirely in document coordinates.
///
/// The context must already carry the composed document→device transform;
/// no transform math happens here. Each anchor gets a square two meters on
/// a side centered on its document point, and a 10×1 plus a 1×10
/// document-unit ruler cross at the document origin so their overlap marks
/// the unit square. An operator can read the origin, the unit length and
/// the anchor placement straight off the rendered page.
pub fn paint_markers<C: PaintContext>(ctx: &mut C, asset: &OverlayAsset, style: &DiagnosticStyle) {
    let side = 2.0 * asset.units_per_meter();
    let [a, b] = asset.anchors();

    ctx.fill_rect(centered(a.document, size2(side, side)), style.anchor_a);
    ctx.fill_rect(centered(b.document, size2(side, side)), style.anchor_b);

    let origin = DocumentPoint::origin();
    ctx.fill_rect(centered(origin, size2(10.0, 1.0)), style.ruler_x);
    ctx.fill_rect(centered(origin, size2(1.0, 10.0)), style.ruler_y);
}

fn centered(center: DocumentPoint, size: DocumentSize) -> DocumentRect {
    DocumentRect::new(
        point2(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
        ),
        size,
    )
}
