#![allow(non_snake_case)]
//! Universal Transverse Mercator, forward only, following the series
//! expansion of [Snyder (1987)](crate::Bibliography::Sny87), pp. 60-64.
use crate::Ellipsoid;
use log::trace;

/// Scale factor on the central meridian
const K_0: f64 = 0.9996;
const FALSE_EASTING: f64 = 500_000.;
/// Added to the northing on the southern hemisphere
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.;

// ----- F O R W A R D -----------------------------------------------------------------

/// WGS84 latitude and longitude (degrees) to UTM (easting, northing) in the
/// given zone, on the default ellipsoid. The zone is taken as given, even
/// when the point is far outside it.
#[must_use]
pub fn fwd(latitude: f64, longitude: f64, zone: i32) -> (f64, f64) {
    let ellps = Ellipsoid::default_datum();
    let a = ellps.semimajor_axis();
    let es = ellps.eccentricity_squared();
    let eps = ellps.second_eccentricity_squared();

    // +3 puts the origin in the middle of the zone
    let lon_0 = ((f64::from(zone) - 1.) * 6. - 180. + 3.).to_radians();
    let lat = latitude.to_radians();
    let lon = longitude.to_radians();
    let (s, c) = lat.sin_cos();
    let t = lat.tan();

    let N = a / (1. - es * s * s).sqrt();
    let T = t * t;
    let C = eps * c * c;
    let A = c * (lon - lon_0);

    // Meridian distance
    let es2 = es * es;
    let es3 = es2 * es;
    let M = a
        * ((1. - es / 4. - 3. * es2 / 64. - 5. * es3 / 256.) * lat
            - (3. * es / 8. + 3. * es2 / 32. + 45. * es3 / 1024.) * (2. * lat).sin()
            + (15. * es2 / 256. + 45. * es3 / 1024.) * (4. * lat).sin()
            - (35. * es3 / 3072.) * (6. * lat).sin());

    let easting = FALSE_EASTING
        + K_0
            * N
            * (A + (1. - T + C) * A.powi(3) / 6.
                + (5. - 18. * T + T * T + 72. * C - 58. * eps) * A.powi(5) / 120.);

    let mut northing = K_0
        * (M + N
            * t
            * (A * A / 2.
                + (5. - T + 9. * C + 4. * C * C) * A.powi(4) / 24.
                + (61. - 58. * T + T * T + 600. * C - 330. * eps) * A.powi(6) / 720.));
    if latitude < 0. {
        northing += FALSE_NORTHING_SOUTH;
    }

    trace!("UTM fwd, zone {zone}: ({easting}, {northing})");
    (easting, northing)
}

// ----- Z O N E S ---------------------------------------------------------------------

/// The UTM zone number of a point, including the exceptions for south
/// western Norway and for Svalbard. The longitude is normalized to
/// [-180, 180) before the regular 6° zones are counted.
#[must_use]
pub fn zone_number(latitude: f64, longitude: f64) -> i32 {
    if (8.0..=13.0).contains(&longitude) && latitude > 54.5 && latitude < 58.0 {
        return 32;
    }

    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }

    if (72.0..84.0).contains(&latitude) {
        if (0.0..9.0).contains(&longitude) {
            return 31;
        }
        if (9.0..21.0).contains(&longitude) {
            return 33;
        }
        if (21.0..33.0).contains(&longitude) {
            return 35;
        }
        if (33.0..42.0).contains(&longitude) {
            return 37;
        }
    }

    let lon = (longitude + 180.).rem_euclid(360.);
    (lon / 6.) as i32 + 1
}

/// The UTM latitude band letter, `'Z'` outside the 80°S to 84°N range
#[must_use]
pub fn zone_letter(latitude: f64) -> char {
    const BANDS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";
    if !(-80.0..=84.0).contains(&latitude) {
        return 'Z';
    }
    // Band X is 12° tall, and includes 84°N
    if latitude >= 72. {
        return 'X';
    }
    let band = ((latitude + 80.) / 8.).floor() as usize;
    char::from(BANDS[band])
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn forward() {
        // Prague
        let (e, n) = fwd(50.0755, 14.4378, 33);
        assert_float_eq!(e, 459_772.016, abs <= 1e-3);
        assert_float_eq!(n, 5_547_176.552, abs <= 1e-3);

        // Brno
        let (e, n) = fwd(49.1951, 16.6068, 33);
        assert_float_eq!(e, 617_063.466, abs <= 1e-3);
        assert_float_eq!(n, 5_450_387.129, abs <= 1e-3);

        // The zone origin
        let (e, n) = fwd(0., 3., 31);
        assert_float_eq!(e, 500_000., abs <= 1e-9);
        assert_float_eq!(n, 0., abs <= 1e-9);

        // Sydney, southern hemisphere
        let (e, n) = fwd(-33.8688, 151.2093, 56);
        assert_float_eq!(e, 334_368.634, abs <= 1e-3);
        assert_float_eq!(n, 6_250_948.345, abs <= 1e-3);

        // Absurd zones give absurd numbers, but no integer overflow
        for zone in [i32::MIN, i32::MAX] {
            let (e, n) = fwd(50., 15., zone);
            assert!(e.is_finite() && n.is_finite());
        }
    }

    #[test]
    fn zone_numbers() {
        assert_eq!(zone_number(50.0755, 14.4378), 33);
        assert_eq!(zone_number(49.1951, 18.5), 34);
        assert_eq!(zone_number(0., -179.9), 1);
        assert_eq!(zone_number(0., 179.9), 60);
        assert_eq!(zone_number(0., 180.), 1);

        // Norway
        assert_eq!(zone_number(60.5, 6.), 32);
        assert_eq!(zone_number(56., 10.), 32);

        // Svalbard
        assert_eq!(zone_number(78., 5.), 31);
        assert_eq!(zone_number(78., 10.), 33);
        assert_eq!(zone_number(78., 25.), 35);
        assert_eq!(zone_number(78., 40.), 37);
        assert_eq!(zone_number(78., 45.), 38);
    }

    #[test]
    fn zone_letters() {
        assert_eq!(zone_letter(50.0755), 'U');
        assert_eq!(zone_letter(0.), 'N');
        assert_eq!(zone_letter(-0.1), 'M');
        assert_eq!(zone_letter(-80.), 'C');
        assert_eq!(zone_letter(72.), 'X');
        assert_eq!(zone_letter(84.), 'X');
        assert_eq!(zone_letter(84.1), 'Z');
        assert_eq!(zone_letter(-80.1), 'Z');
    }
}
