use crate::asset::OverlayAsset;
use crate::defs::*;
use crate::diagnostics::{self, DiagnosticStyle};
use crate::error::DrawError;
use crate::paint::{PaintContext, TransformScope};
use crate::viewport::resolve_viewport;

/// Per-call description of the region being repainted. `device_rect` is the
/// pixel rectangle the host reports for `map_rect` under the current
/// pan/zoom state; both name the same region of the map. Stack-local to one
/// draw call, never persisted.
#[derive(Clone, Copy, Debug)]
pub struct DrawRequest {
    pub map_rect: MapPlaneRect,
    pub device_rect: DeviceRect,
}

/// The one capability a map host needs from an overlay. Hosts should invoke
/// drawing through this trait rather than the concrete renderer type.
pub trait DrawOverlay<C: PaintContext> {
    fn draw(
        &self,
        asset: &OverlayAsset,
        request: &DrawRequest,
        ctx: &mut C,
    ) -> Result<(), DrawError>;
}

/// Composes document→map-plane and map-plane→device into a single
/// document→device transform per draw call and paints through it.
///
/// Holds no per-call state; a single instance serves any number of assets
/// and regions. Draw calls run synchronously on the host's render thread.
pub struct OverlayRenderer {
    diagnostics: bool,
    style: DiagnosticStyle,
}

impl OverlayRenderer {
    pub fn new(enable_diagnostics: bool) -> Self {
        Self {
            diagnostics: enable_diagnostics,
            style: DiagnosticStyle::default(),
        }
    }

    /// Replaces the calibration marker colors.
    pub fn with_style(mut self, style: DiagnosticStyle) -> Self {
        self.style = style;
        self
    }

    /// Paints `asset` into the region described by `request`.
    ///
    /// Any failure aborts before the first paint command reaches the
    /// context, and the context's transform state is restored on every exit
    /// path, so one failed tile never affects the next draw.
    pub fn draw<C: PaintContext>(
        &self,
        asset: &OverlayAsset,
        request: &DrawRequest,
        ctx: &mut C,
    ) -> Result<(), DrawError> {
        asset.validate()?;

        let map_to_device = resolve_viewport(&request.map_rect, &request.device_rect)?;
        let document_to_device = asset.document_to_map().then(&map_to_device);

        log::trace!(
            "drawing page {:?} into {:?} via {:?}",
            asset.page(),
            request.device_rect,
            to_coeffs(document_to_device)
        );

        let mut scope = TransformScope::new(ctx);
        scope.concat(&document_to_device);
        scope.draw_page(asset.page());
        if self.diagnostics {
            diagnostics::paint_markers(&mut *scope, asset, &self.style);
        }

        Ok(())
    }
}

impl<C: PaintContext> DrawOverlay<C> for OverlayRenderer {
    fn draw(
        &self,
        asset: &OverlayAsset,
        request: &DrawRequest,
        ctx: &mut C,
    ) -> Result<(), DrawError> {
        OverlayRenderer::draw(self, asset, request, ctx)
    }
}
