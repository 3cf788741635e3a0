#![allow(non_snake_case)]
//! The S-JTSK pipeline: WGS84 geographical coordinates to and from the
//! Krovak double conformal conic projection on the Bessel ellipsoid.
//!
//! The projection follows the formulation by Hrdina
//! ([2002](crate::Bibliography::Hrd02)), where the ellipsoid, the
//! Gaussian sphere and the oblique cone parameters are folded into a
//! handful of numerical constants.

use super::helmert::JTSK_TO_WGS84;
use crate::{Coor3D, Ellipsoid};
use log::{debug, trace, warn};
use std::f64::consts::FRAC_PI_2;

// ----- Projection constants ---------------------------------------------------------

/// Eccentricity of the Bessel ellipsoid
const E: f64 = 0.081_696_831_215_303;
/// Cone constant
const N: f64 = 0.979_924_704_620_83;
/// sin and cos of the longitude of the cartographic pole on the Gaussian sphere
const SIN_VQ: f64 = 0.420_215_144_586_493;
const COS_VQ: f64 = 0.907_424_504_992_097;
/// Ratio of longitudes on the Gaussian sphere and on the ellipsoid
const ALFA: f64 = 1.000_597_498_371_542;
/// Latitude constant of the conformal mapping to the Gaussian sphere
const K: f64 = 1.006_850_018_615_38;
/// sin and cos of the latitude of the cartographic pole
const SIN_UQ: f64 = 0.863_499_969_506_341;
const COS_UQ: f64 = 0.504_348_889_819_882;
/// Radius of the reference parallel in the projection plane
const RO0: f64 = 12_310_230.127_970_36;

/// The ellipsoidal height assumed for points computed from plane coordinates
const HEIGHT: f64 = 45.;

/// Stop criterion and iteration budget for the latitude refinement
const TOLERANCE: f64 = 1e-15;
const MAX_ITERATIONS: usize = 100;

const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 1. / 298.257_223_563);
const BESSEL: Ellipsoid = Ellipsoid::new(6_377_397.155_08, 1. / 299.152_812_8);

// ----- F O R W A R D ----------------------------------------------------------------

/// WGS84 latitude and longitude (degrees) to S-JTSK EPSG:2065 (x, y),
/// in meters
#[must_use]
pub fn fwd(latitude: f64, longitude: f64) -> (f64, f64) {
    // WGS84 geographical -> cartesian -> S-JTSK cartesian -> Bessel geographical
    let cart = WGS84.cartesian(&Coor3D::geo(latitude, longitude, 0.));
    let cart = JTSK_TO_WGS84.reversed().apply(&cart);
    let geo = BESSEL.geographic(&cart);
    let B = geo[1];
    let L = geo[0];
    trace!("Krovak fwd: Bessel B={B}, L={L}");

    // Bessel ellipsoid -> Gaussian sphere
    let sinB = B.sin();
    let t = K
        * (ALFA
            * ((1. + sinB).powi(2) / (1. - sinB * sinB)
                * (E * ((1. - E * sinB) / (1. + E * sinB)).ln()).exp())
            .ln())
        .exp();
    let sinU = (t - 1.) / (t + 1.);
    let cosU = (1. - sinU * sinU).sqrt();
    let V = ALFA * L;

    // Gaussian sphere -> oblique cartographic coordinates
    let sinS = SIN_UQ * sinU + COS_UQ * cosU * (COS_VQ * V.cos() + SIN_VQ * V.sin());
    let cosS = (1. - sinS * sinS).sqrt();
    let sinD = (SIN_VQ * V.cos() - COS_VQ * V.sin()) * cosU / cosS;
    let D = sinD.asin();

    // Cone -> plane
    let ro = RO0 * (-N * ((1. + sinS) / cosS).ln()).exp();
    (ro * (N * D).cos(), ro * (N * D).sin())
}

// ----- I N V E R S E ----------------------------------------------------------------

/// S-JTSK EPSG:2065 (x, y), in meters, to WGS84 latitude and longitude,
/// in degrees
#[must_use]
pub fn inv(x: f64, y: f64) -> (f64, f64) {
    // Plane -> cone
    let ro = x.hypot(y);
    let D = 2. * (y / (ro + x)).atan() / N;
    let S = 2. * ((1. / N * (RO0 / ro).ln()).exp()).atan() - FRAC_PI_2;

    // Oblique cartographic coordinates -> Gaussian sphere
    let sinU = SIN_UQ * S.sin() - COS_UQ * S.cos() * D.cos();
    let cosU = (1. - sinU * sinU).sqrt();
    let sinDV = D.sin() * S.cos() / cosU;
    let cosDV = (1. - sinDV * sinDV).sqrt();
    let L = 2. * ((SIN_VQ * cosDV - COS_VQ * sinDV) / (1. + COS_VQ * cosDV + SIN_VQ * sinDV)).atan()
        / ALFA;

    // Gaussian sphere -> Bessel ellipsoid: fixed point iteration for sin(B)
    let t = (2. / ALFA * ((1. + sinU) / cosU / K.sqrt()).ln()).exp();
    let sinB = latitude_refinement(t);
    let B = sinB.asin();
    trace!("Krovak inv: Bessel B={B}, L={L}");

    // Bessel geographical -> cartesian -> WGS84 cartesian -> WGS84 geographical
    let cart = BESSEL.cartesian(&Coor3D::raw(L, B, HEIGHT));
    let cart = JTSK_TO_WGS84.apply(&cart);
    let geo = WGS84.geographic(&cart);

    (geo[1].to_degrees(), geo[0].to_degrees())
}

/// Solve the isometric latitude relation for sin(B), given the Gaussian
/// sphere term `t`. Converges in a handful of iterations everywhere in the
/// projection area. If the budget is exhausted, the latest estimate is
/// returned.
fn latitude_refinement(t: f64) -> f64 {
    let mut pom = (t - 1.) / (t + 1.);
    for i in 1..=MAX_ITERATIONS {
        let sinB = pom;
        pom = t * (E * ((1. + E * sinB) / (1. - E * sinB)).ln()).exp();
        pom = (pom - 1.) / (pom + 1.);
        if (pom - sinB).abs() <= TOLERANCE {
            debug!("Krovak latitude refinement converged after {i} iterations");
            return pom;
        }
    }
    warn!("Krovak latitude refinement not converged after {MAX_ITERATIONS} iterations");
    pom
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn constants() {
        // The folded constants are consistent with the Bessel ellipsoid
        assert_float_eq!(BESSEL.eccentricity(), E, abs <= 1e-10);
        assert_float_eq!(K.sqrt(), 1.003_419_163_966_575, abs <= 1e-14);
        assert_float_eq!(SIN_UQ.hypot(COS_UQ), 1., abs <= 1e-14);
        assert_float_eq!(SIN_VQ.hypot(COS_VQ), 1., abs <= 1e-14);
    }

    #[test]
    fn forward() {
        // Prague
        let (x, y) = fwd(50.0755, 14.4378);
        assert_float_eq!(x, 1_044_492.650, abs <= 1e-2);
        assert_float_eq!(y, 741_817.854, abs <= 1e-2);

        // Brno
        let (x, y) = fwd(49.1951, 16.6068);
        assert_float_eq!(x, 1_160_744.796, abs <= 1e-2);
        assert_float_eq!(y, 598_248.847, abs <= 1e-2);
    }

    #[test]
    fn inverse() {
        let (lat, lon) = inv(1_068_738., 820_800.6);
        assert_float_eq!(lat, 49.758_185, abs <= 1e-6);
        assert_float_eq!(lon, 13.397_530, abs <= 1e-6);

        let (lat, lon) = inv(1_044_492.650_4, 741_817.853_8);
        assert_float_eq!(lat, 50.0755, abs <= 1e-6);
        assert_float_eq!(lon, 14.4378, abs <= 1e-6);
    }

    #[test]
    fn refinement() {
        // The sin(B) iteration has a fixed point for t = 1 at B = 0
        assert_eq!(latitude_refinement(1.), 0.);
        let s = latitude_refinement(3.);
        assert!(s > 0. && s < 1.);
    }
}
