//! Planar geometry on latitude/longitude pairs
//!
//! Latitude is treated as the y axis and longitude as the x axis. No
//! geodesic correction is applied; field boundaries are small enough
//! that the planar approximation holds.

use rust_decimal::Decimal;

use crate::types::GpsCoordinates;

/// Half-width in degrees of the square boundary synthesized for a map click
pub const DEFAULT_FIELD_OFFSET: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Even-odd ray casting containment test.
///
/// A horizontal ray is cast from `point` towards positive longitude and the
/// boundary crossings are counted; the point is inside iff the count is odd.
/// The ring is implicitly closed. Rings with fewer than three vertices
/// contain nothing.
pub fn point_in_polygon(point: &GpsCoordinates, ring: &[GpsCoordinates]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let (x, y) = (point.longitude, point.latitude);
    let mut inside = false;
    let mut j = ring.len() - 1;

    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].longitude, ring[i].latitude);
        let (xj, yj) = (ring[j].longitude, ring[j].latitude);

        // (yi > y) != (yj > y) also guarantees yj != yi below
        if (yi > y) != (yj > y) {
            let crossing_x = (xj - xi) * (y - yi) / (yj - yi) + xi;
            if x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }

    inside
}

/// Square ring of half-width `offset` centered on `center`.
///
/// Vertices run north-west, north-east, south-east, south-west.
pub fn square_around(center: &GpsCoordinates, offset: Decimal) -> Vec<GpsCoordinates> {
    vec![
        center.offset(offset, -offset),
        center.offset(offset, offset),
        center.offset(-offset, offset),
        center.offset(-offset, -offset),
    ]
}
