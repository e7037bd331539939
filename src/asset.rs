use crate::defs::*;
use crate::error::DrawError;

/// A point on the globe in degrees, east- and north-positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// A document-space point with a known real-world location.
///
/// Pairs of these drive the external georeferencing solver; the renderer
/// only reads the document coordinate back when painting calibration
/// markers.
#[derive(Clone, Copy, Debug)]
pub struct AnchorPoint {
    pub document: DocumentPoint,
    pub geo: GeoPoint,
}

/// Opaque handle to one page of paintable content. Decoding happens in the
/// host; this crate only passes the handle through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageIndex(pub u32);

/// A floor plan registered with the map host, fully georeferenced.
///
/// Produced once by the external solver/loader and immutable afterwards.
/// The renderer borrows it for the duration of a single draw call.
#[derive(Clone, Debug)]
pub struct OverlayAsset {
    page: PageIndex,
    document_to_map: DocumentToMapPlane,
    map_bounds: MapPlaneRect,
    unit_size_meters: f64,
    anchors: [AnchorPoint; 2],
}

impl OverlayAsset {
    /// `unit_size_meters` is the real-world size of one document unit, e.g.
    /// 0.01 for a plan drawn at 100 units per meter.
    pub fn new(
        page: PageIndex,
        document_to_map: DocumentToMapPlane,
        map_bounds: MapPlaneRect,
        unit_size_meters: f64,
        anchors: [AnchorPoint; 2],
    ) -> Self {
        Self {
            page,
            document_to_map,
            map_bounds,
            unit_size_meters,
            anchors,
        }
    }

    pub fn page(&self) -> PageIndex {
        self.page
    }

    pub fn document_to_map(&self) -> DocumentToMapPlane {
        self.document_to_map
    }

    /// Smallest axis-aligned map-plane rectangle containing the projected
    /// overlay.
    pub fn map_bounds(&self) -> MapPlaneRect {
        self.map_bounds
    }

    pub fn unit_size_meters(&self) -> f64 {
        self.unit_size_meters
    }

    /// Document units covering one meter.
    pub fn units_per_meter(&self) -> f64 {
        1.0 / self.unit_size_meters
    }

    pub fn anchors(&self) -> [AnchorPoint; 2] {
        self.anchors
    }

    /// Checks the contract the renderer relies on. A degenerate bounding
    /// rectangle is not checked here; the viewport resolver rejects that
    /// per call.
    pub fn validate(&self) -> Result<(), DrawError> {
        if !(self.unit_size_meters.is_finite() && self.unit_size_meters > 0.0) {
            return Err(DrawError::InvalidOverlay(
                "unit size must be finite and positive",
            ));
        }
        if to_coeffs(self.document_to_map).iter().any(|c| !c.is_finite()) {
            return Err(DrawError::InvalidOverlay(
                "georeference transform has non-finite coefficients",
            ));
        }
        if self.document_to_map.inverse().is_none() {
            return Err(DrawError::InvalidOverlay(
                "georeference transform is singular",
            ));
        }
        Ok(())
    }
}
