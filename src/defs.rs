use euclid::*;

/// Fixed coordinate system of the floor-plan page, in document units
/// (e.g. PDF points). Vertical axis is up-positive.
pub struct DocumentSpace;
pub type DocumentPoint = Point2D<f64, DocumentSpace>;
pub type DocumentSize = Size2D<f64, DocumentSpace>;
pub type DocumentRect = Rect<f64, DocumentSpace>;
pub type DocumentVector = Vector2D<f64, DocumentSpace>;

/// Projected plane the map host renders in (Mercator-like). Axis
/// orientation is whatever the host defines.
pub struct MapPlaneSpace;
pub type MapPlanePoint = Point2D<f64, MapPlaneSpace>;
pub type MapPlaneSize = Size2D<f64, MapPlaneSpace>;
pub type MapPlaneRect = Rect<f64, MapPlaneSpace>;
pub type MapPlaneVector = Vector2D<f64, MapPlaneSpace>;

/// Pixels of the render target for the current viewport and zoom level.
pub struct DeviceSpace;
pub type DevicePoint = Point2D<f64, DeviceSpace>;
pub type DeviceSize = Size2D<f64, DeviceSpace>;
pub type DeviceRect = Rect<f64, DeviceSpace>;
pub type DeviceVector = Vector2D<f64, DeviceSpace>;

pub type DocumentToMapPlane = Transform2D<f64, DocumentSpace, MapPlaneSpace>;
pub type MapPlaneToDevice = Transform2D<f64, MapPlaneSpace, DeviceSpace>;
pub type DocumentToDevice = Transform2D<f64, DocumentSpace, DeviceSpace>;

/// Affine coefficients [m11, m12, m21, m22, m31, m32] in euclid's
/// row-vector convention (m31, m32 carry the translation).
pub fn to_coeffs<A, B>(xform: Transform2D<f64, A, B>) -> [f64; 6] {
    [
        xform.m11, xform.m12, xform.m21, xform.m22, xform.m31, xform.m32,
    ]
}
