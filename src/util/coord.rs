use crate::core::constants::{EARTH_RADIUS, MAX_LAT};
use crate::util::error::GdaError;
use geo_types::Point;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Normalizes a longitude into [-180, 180) degrees.
///
/// Both +180 and -180 map to -180, so the antimeridian has a single
/// representation.
pub fn normalize_lon(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped == 180.0 { -180.0 } else { wrapped }
}

/// Clamps a latitude to the Web Mercator limit of ±85.05112878 degrees.
pub fn clamp_lat(lat: f64) -> f64 {
    lat.clamp(-MAX_LAT, MAX_LAT)
}

/// Projects a WGS84 lat/lon (degrees) to Web Mercator meters.
///
/// The latitude is clamped and the longitude normalized before projection.
/// Non-finite input is rejected.
pub fn to_mercator(lat: f64, lon: f64) -> Result<Point<f64>, GdaError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(GdaError::InvalidCoordinate { lat, lon });
    }

    let phi = clamp_lat(lat).to_radians();
    let x = EARTH_RADIUS * normalize_lon(lon).to_radians();
    let y = EARTH_RADIUS * (FRAC_PI_4 + phi / 2.0).tan().ln();

    Ok(Point::new(x, y))
}

/// Converts a Web Mercator point (meters) back to WGS84 degrees.
///
/// Returns a point with x = longitude and y = latitude.
pub fn from_mercator(point: &Point<f64>) -> Point<f64> {
    let lat = (2.0 * (point.y() / EARTH_RADIUS).exp().atan() - FRAC_PI_2).to_degrees();
    let lon = normalize_lon((point.x() / EARTH_RADIUS).to_degrees());

    Point::new(lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_equator_prime_meridian_is_origin() -> Result<(), GdaError> {
        let merc = to_mercator(0.0, 0.0)?;
        assert!(merc.x().abs() < 1e-9);
        assert!(merc.y().abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), GdaError> {
        let lat = 53.48082746395233;
        let lon = -2.2479699500757597;

        let merc = to_mercator(lat, lon)?;
        let back = from_mercator(&merc);

        assert!((back.y() - lat).abs() < 1e-9);
        assert!((back.x() - lon).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_latitude_clamped_to_mercator_limit() -> Result<(), GdaError> {
        let at_pole = to_mercator(90.0, 0.0)?;
        let at_limit = to_mercator(MAX_LAT, 0.0)?;
        assert_eq!(at_pole, at_limit);
        Ok(())
    }

    #[test]
    fn test_normalize_lon_wraps() {
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_eq!(normalize_lon(180.0), -180.0);
        assert_eq!(normalize_lon(-180.0), -180.0);
        assert_eq!(normalize_lon(540.0), -180.0);
        assert!((normalize_lon(190.0) - (-170.0)).abs() < 1e-9);
        assert!((normalize_lon(-190.0) - 170.0).abs() < 1e-9);
        assert!((normalize_lon(360.0 + 77.209) - 77.209).abs() < 1e-9);
    }

    #[test]
    fn test_x_bounded_by_pi_r() -> Result<(), GdaError> {
        let merc = to_mercator(0.0, -180.0)?;
        assert!((merc.x() - (-PI * EARTH_RADIUS)).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            to_mercator(f64::NAN, 0.0),
            Err(GdaError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            to_mercator(0.0, f64::INFINITY),
            Err(GdaError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            to_mercator(f64::NEG_INFINITY, f64::NAN),
            Err(GdaError::InvalidCoordinate { .. })
        ));
    }
}
