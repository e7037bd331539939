use euclid::Transform2D;

use crate::defs::*;
use crate::error::DrawError;

fn usable_extent(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Derives the map-plane→device transform for one draw call.
///
/// `device_rect` is the pixel rectangle the host currently reports for
/// `map_rect`, the overlay's bounding rectangle in the projected plane. The
/// result shifts the map-plane center to the origin, stretches each axis by
/// the ratio of device to map-plane extent, and recenters on the device
/// rectangle, so centers and corners of the two rectangles correspond
/// exactly. Both rectangles are axis aligned; rotation, if the host supports
/// it, is absorbed upstream.
pub fn resolve_viewport(
    map_rect: &MapPlaneRect,
    device_rect: &DeviceRect,
) -> Result<MapPlaneToDevice, DrawError> {
    if !usable_extent(map_rect.size.width) || !usable_extent(map_rect.size.height) {
        return Err(DrawError::DegenerateRegion("map-plane"));
    }
    if !usable_extent(device_rect.size.width) || !usable_extent(device_rect.size.height) {
        return Err(DrawError::DegenerateRegion("device"));
    }

    let map_center = map_rect.center();
    let device_center = device_rect.center();
    let sx = device_rect.size.width / map_rect.size.width;
    let sy = device_rect.size.height / map_rect.size.height;

    Ok(
        Transform2D::<f64, MapPlaneSpace, MapPlaneSpace>::translation(
            -map_center.x,
            -map_center.y,
        )
        .then(&Transform2D::scale(sx, sy))
        .then_translate(device_center.to_vector()),
    )
}
