#![allow(non_snake_case)]
//! S-42 Gauss-Krüger, on the Krassovsky ellipsoid.
//!
//! The forward projection is the Transverse Mercator series (Snyder
//! [1987](crate::Bibliography::Sny87)) in zone 3 (central meridian 15°E),
//! with the ellipsoid constants folded in, and the datum shift from WGS84
//! approximated by constant offsets in the plane.
//!
//! The inverse follows the footpoint latitude series of Kuska
//! ([1960](crate::Bibliography::Kus60)), as compiled by G. Timár, followed
//! by a Molodensky style datum shift to WGS84. It handles any zone, read
//! from the millions digit of the easting.

// ----- Krassovsky ellipsoid ---------------------------------------------------------

/// Semimajor axis
const SEMIMAJOR_AXIS: f64 = 6_378_245.;
/// Squared eccentricity
const ES: f64 = 0.006_693_421_622_965_951_1;
/// Squared second eccentricity
const EPS: f64 = 0.006_738_525_414_683_498_9;

/// Meridian arc series coefficients
const M0: f64 = 6_367_558.497_012_303_2;
const M2: f64 = 16_036.479_939_776_922;
const M4: f64 = 16.827_654_579_200_246;
const M6: f64 = 0.021_791_773_552_927_61;

// ----- Forward ----------------------------------------------------------------------

/// Central meridian of zone 3, 15°E, in radians
const CENTRAL_MERIDIAN: f64 = 0.261_799_387_799_149_41;
/// Zone 3 false easting, plus the easting part of the datum shift
const FALSE_EASTING: f64 = 3_500_123.286_240_2;
/// The northing part of the datum shift
const FALSE_NORTHING: f64 = 42.935_304_95;

/// WGS84 latitude and longitude (degrees) to S-42 zone 3 (x, y), in meters
#[must_use]
pub fn fwd(latitude: f64, longitude: f64) -> (f64, f64) {
    let lat = latitude.to_radians();
    let lon = longitude.to_radians();
    let (sinlat, coslat, tanlat) = (lat.sin(), lat.cos(), lat.tan());

    let N = SEMIMAJOR_AXIS / (1. - ES * sinlat * sinlat).sqrt();
    let T = tanlat * tanlat;
    let C = EPS * coslat * coslat;
    let A = (lon - CENTRAL_MERIDIAN) * coslat;
    let M = M0 * lat - M2 * (2. * lat).sin() + M4 * (4. * lat).sin() - M6 * (6. * lat).sin();

    // 58·e'² and 330·e'², folded
    let x = FALSE_EASTING
        + N * (A
            + (1. - T + C) * A.powi(3) / 6.
            + (5. - 18. * T + T * T + 72. * C - 0.572_774_660_248_097_42) * A.powi(5) / 120.);
    let y = FALSE_NORTHING
        + (M + N
            * tanlat
            * (A * A / 2.
                + (5. - T + 9. * C + 4. * C * C) * A.powi(4) / 24.
                + (58.776_286_613_154_447 - 58. * T + T * T + 600. * C) * A.powi(6) / 720.));
    (x, y)
}

// ----- Inverse ----------------------------------------------------------------------

/// Squared eccentricity of the Krassovsky ellipsoid, as used in the datum shift
const ES_SHIFT: f64 = 0.006_693_421_622_965_932_9;

/// S-42 (x, y), in meters, to WGS84 latitude and longitude, in degrees
#[must_use]
pub fn inv(x: f64, y: f64) -> (f64, f64) {
    // Footpoint latitude, from the rectifying latitude series
    let R2 = y / M0
        + 0.002_518_464_777_523_759_6 * (y / 3_183_779.248_506_151_6).sin()
        + 0.000_003_699_885_896_206_876_8 * (y / 1_591_889.624_253_075_8).sin()
        + 0.000_000_007_444_604_783_195_198_4 * (y / 1_061_259.749_502_050_5).sin()
        + 0.000_000_000_017_026_207_045_302_084 * (y / 795_944.812_126_537_9).sin();
    let (sinR2, cosR2, tanR2) = (R2.sin(), R2.cos(), R2.tan());

    let C1 = EPS * cosR2 * cosR2;
    let T1 = tanR2 * tanR2;
    let N1 = SEMIMAJOR_AXIS / (1. - ES * sinR2 * sinR2).sqrt();

    // The zone number is the millions digit of the easting
    let zone = (x / 1_000_000.).trunc();
    let D = (x - (500_000. + zone * 1_000_000.)) / N1;

    let lat = R2
        - N1 * tanR2 / 6_335_552.717_000_425_8
            * (1. - ES * sinR2 * sinR2).powf(1.5)
            * (0.5 * D * D
                - (4.939_353_271_267_848_7 + 3. * T1 + 10. * C1 - 4. * C1 * C1) * D.powi(4) / 24.
                + (61. + 90. * T1 + 298. * C1 + 45. * T1 * T1 - 1.698_108_404_500_241_7
                    - 3. * C1 * C1)
                    * D.powi(6)
                    / 720.);

    // Zone central meridian: 21°E for zone 4, 6° per zone
    let central_meridian = 0.366_519_142_918_809_22 + 0.104_719_755_119_659_77 * (zone - 4.);
    let lon = central_meridian
        + (D - (1. + 2. * T1 + C1) * D.powi(3) / 6.
            + (5. - 2. * C1 + 28. * T1 - 3. * C1 * C1 + 0.053_908_203_317_467_991 + 24. * T1 * T1)
                * D.powi(5)
                / 120.)
            / cosR2;

    // Datum shift, Krassovsky to WGS84, in degrees
    let (sinlat, coslat) = (lat.sin(), lat.cos());
    let (sinlon, coslon) = (lon.sin(), lon.cos());
    let dlat = (-26. * sinlat * coslon + 121. * sinlat * sinlon - 78. * coslat
        + 2.704_579_793_710_042_4 * (2. * lat).sin())
        / 110_576.254_844_896_77
        * (1. - ES_SHIFT * sinlat * sinlat).powf(1.5);
    let dlon = (-26. * sinlon - 121. * coslon) / 111_321.375_748_429_62
        * (1. - ES_SHIFT * sinlat * sinlat).sqrt()
        / coslat;

    (lat.to_degrees() + dlat, lon.to_degrees() + dlon)
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn forward() {
        // Prague
        let (x, y) = fwd(50.0755, 14.4378);
        assert_float_eq!(x, 3_459_878.535, abs <= 1e-2);
        assert_float_eq!(y, 5_549_536.817, abs <= 1e-2);

        // Brno
        let (x, y) = fwd(49.1951, 16.6068);
        assert_float_eq!(x, 3_617_235.547, abs <= 1e-2);
        assert_float_eq!(y, 5_452_707.011, abs <= 1e-2);
    }

    #[test]
    fn inverse() {
        // The forward datum shift is a constant offset, so the roundtrip is
        // only good to a few meters
        let (lat, lon) = inv(3_459_878.535, 5_549_536.817);
        assert_float_eq!(lat, 50.0755, abs <= 5e-5);
        assert_float_eq!(lon, 14.4378, abs <= 5e-5);
    }
}
