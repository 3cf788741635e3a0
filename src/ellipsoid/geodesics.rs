use crate::ellipsoid::Ellipsoid;
use crate::Coor3D;
use log::warn;
use std::f64::consts::TAU;

/// Stop criterion for the λ iteration of the inverse geodesic
const LAMBDA_TOLERANCE: f64 = 1e-12;

/// The λ iteration is given up after this many rounds, minus one
const ITERATION_LIMIT: u32 = 20;

/// Radius of the sphere used for the law of cosines distance
const SPHERICAL_RADIUS: f64 = 6_378_137.;

/// Mean earth radius used for the haversine distance
const MEAN_RADIUS: f64 = 6_371_008.8;

/// The ellipsoid of the WGS84 distances. The flattening is the WGS84
/// flattening, 1/298.257223563, as tabulated.
const WGS84: Ellipsoid = Ellipsoid {
    name: "WGS 84",
    a: 6_378_137.,
    f: 0.003_352_810_664_747_480_5,
};

/// The outcome of an inverse geodesic computation. When the iteration
/// does not converge, the distance is the best estimate available after
/// the last iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicSolution {
    /// The length of the geodesic, in meters
    pub distance: f64,
    /// The number of λ iterations carried out
    pub iterations: u32,
    /// True if the λ iteration reached its stop criterion
    pub converged: bool,
}

// ----- Geodesics -------------------------------------------------------------
impl Ellipsoid {
    /// The length of the geodesic between two points, given as
    /// longitude/latitude in radians (the height is ignored).
    ///
    /// We use the inverse algorithm by Vincenty
    /// ([1975](crate::Bibliography::Vin75)), with the original A/B series.
    /// The Vincenty algorithm is relatively simple to implement, but for
    /// near-antipodal cases, it suffers from lack of convergence and loss
    /// of accuracy: in that case the solution is flagged as not converged.
    #[must_use]
    #[allow(non_snake_case)] // allow math-like notation
    pub(crate) fn geodesic_inv(&self, from: &Coor3D, to: &Coor3D) -> GeodesicSolution {
        let B1 = from[1];
        let B2 = to[1];
        let L = to[0] - from[0];

        // Reduced latitudes
        let U1 = ((1. - self.f) * B1.tan()).atan();
        let U2 = ((1. - self.f) * B2.tan()).atan();
        let U1cos = U1.cos();
        let U2cos = U2.cos();
        let U1sin = U1.sin();
        let U2sin = U2.sin();

        // Initial estimate for λ, the longitude on the auxiliary sphere
        let mut ll = L;
        let mut ll_prev = TAU;

        let mut aacos2 = 0.;
        let mut ssmx2cos = 0.;
        let mut sscos = 0.;
        let mut sssin = 0.;
        let mut ss = 0.;

        let mut iterations = 0;
        let mut remaining = ITERATION_LIMIT;

        while (ll - ll_prev).abs() > LAMBDA_TOLERANCE {
            remaining -= 1;
            if remaining == 0 {
                break;
            }
            iterations += 1;

            // σ, the angular separation between the points
            let llsin = ll.sin();
            let llcos = ll.cos();
            let t1 = U2cos * llsin;
            let t2 = U1cos * U2sin - U1sin * U2cos * llcos;
            sssin = (t1 * t1 + t2 * t2).sqrt();

            // Coincident points
            if sssin == 0. {
                return GeodesicSolution {
                    distance: 0.,
                    iterations,
                    converged: true,
                };
            }

            sscos = U1sin * U2sin + U1cos * U2cos * llcos;
            ss = sssin.atan2(sscos);

            // α, the forward azimuth of the geodesic at equator
            let aasin = U1cos * U2cos * llsin / sssin;
            aacos2 = 1. - aasin * aasin;

            // cosine of 2 times σ_m, the angular separation from the midpoint
            // to the equator. Zero for equatorial lines.
            ssmx2cos = if aacos2 == 0. {
                0.
            } else {
                sscos - 2. * U1sin * U2sin / aacos2
            };

            let C = self.f / 16. * aacos2 * (4. + self.f * (4. - 3. * aacos2));
            ll_prev = ll;
            ll = L
                + (1. - C)
                    * self.f
                    * aasin
                    * (ss + C * sssin * (ssmx2cos + C * sscos * (-1. + 2. * ssmx2cos * ssmx2cos)));
        }

        let converged = (ll - ll_prev).abs() <= LAMBDA_TOLERANCE;

        // A and B according to Vincenty's original series
        let a = self.a;
        let b = self.semiminor_axis();
        let us = aacos2 * (a * a - b * b) / (b * b);
        let A = 1. + us / 16384. * (4096. + us * (-768. + us * (320. - 175. * us)));
        let B = us / 1024. * (256. + us * (-128. + us * (74. - 47. * us)));

        // The difference between the dist on the aux sphere and on the ellipsoid.
        let t1 = -1. + 2. * ssmx2cos * ssmx2cos;
        let t2 = -3. + 4. * sssin * sssin;
        let t3 = -3. + 4. * ssmx2cos * ssmx2cos;
        let dss = B * sssin * (ssmx2cos + B / 4. * (sscos * t1 - B / 6. * ssmx2cos * t2 * t3));

        GeodesicSolution {
            distance: b * A * (ss - dss),
            iterations,
            converged,
        }
    }
}

// ----- Distances between WGS84 points ------------------------------------------

/// Geodesic distance, in meters, between two WGS84 points given as
/// latitude/longitude in degrees, following Vincenty's inverse solution.
///
/// If the iteration does not converge (near-antipodal points), the best
/// estimate is returned, and a warning is logged.
///
/// # Examples
///
/// ```rust
/// // Compute the distance between Copenhagen and Paris
/// let d = coordconv::distance(55., 12., 49., 2.);
/// assert!((d - 956_066.232).abs() < 1e-3);
/// ```
#[must_use]
pub fn distance(latitude1: f64, longitude1: f64, latitude2: f64, longitude2: f64) -> f64 {
    let solution = geodesic(latitude1, longitude1, latitude2, longitude2);
    if !solution.converged {
        warn!(
            "Vincenty iteration not converged after {} rounds: ({latitude1}, {longitude1}) -> ({latitude2}, {longitude2})",
            solution.iterations
        );
    }
    solution.distance
}

/// Like [`distance`], but returning the full [`GeodesicSolution`],
/// including the convergence status.
#[must_use]
pub fn geodesic(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> GeodesicSolution {
    let from = Coor3D::geo(latitude1, longitude1, 0.);
    let to = Coor3D::geo(latitude2, longitude2, 0.);
    WGS84.geodesic_inv(&from, &to)
}

/// Distance, in meters, along a great circle of a sphere with the
/// WGS84 semimajor axis as radius, by the spherical law of cosines.
/// Within 900 m of the geodesic distance for distances up to a few
/// hundred kilometers.
#[must_use]
pub fn distance_spherical(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> f64 {
    let lat1 = latitude1.to_radians();
    let lat2 = latitude2.to_radians();
    let dlon = (longitude2 - longitude1).to_radians();

    // Rounding may take identical points slightly outside the domain of acos
    let cos_distance = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    SPHERICAL_RADIUS * cos_distance.clamp(-1., 1.).acos()
}

/// Great circle distance, in meters, on a sphere with the mean earth
/// radius, by the haversine formula. Better conditioned than the law of
/// cosines for short distances.
#[must_use]
pub fn distance_haversine(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> f64 {
    let lat1 = latitude1.to_radians();
    let lat2 = latitude2.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (longitude2 - longitude1).to_radians();

    let h = (dlat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.).sin().powi(2);
    2. * MEAN_RADIUS * h.sqrt().min(1.).asin()
}

// ----- Tests ---------------------------------------------------------------------
