use super::*;
use crate::Coor3D;

use std::f64::consts::FRAC_PI_2;

impl Ellipsoid {
    /// Geographic (longitude, latitude in radians, height) to earth
    /// centered cartesian coordinates
    #[must_use]
    #[allow(non_snake_case)]
    pub(crate) fn cartesian(&self, geographic: &Coor3D) -> Coor3D {
        let (lam, phi, h) = (geographic[0], geographic[1], geographic[2]);
        let N = self.prime_vertical_radius_of_curvature(phi);
        let (sinphi, cosphi) = phi.sin_cos();
        let (sinlam, coslam) = lam.sin_cos();

        Coor3D::raw(
            (N + h) * cosphi * coslam,
            (N + h) * cosphi * sinlam,
            (N * (1. - self.eccentricity_squared()) + h) * sinphi,
        )
    }

    /// Earth centered cartesian coordinates to geographic (longitude,
    /// latitude in radians, height), non-iteratively, following Bowring
    /// ([1976](crate::Bibliography::Bow76), [1985](crate::Bibliography::Bow85))
    #[must_use]
    #[allow(non_snake_case)]
    pub(crate) fn geographic(&self, cartesian: &Coor3D) -> Coor3D {
        let (X, Y, Z) = (cartesian[0], cartesian[1], cartesian[2]);
        let b = self.semiminor_axis();
        let es = self.eccentricity_squared();
        let eps = self.second_eccentricity_squared();

        let lam = Y.atan2(X);
        let p = X.hypot(Y);

        // On the polar axis
        if p < 1e-12 {
            return Coor3D::raw(lam, FRAC_PI_2.copysign(Z), Z.abs() - b);
        }

        // Parametric latitude, as a unit vector (c, s)
        let T = (Z * self.a) / (p * b);
        let c = 1. / (1. + T * T).sqrt();
        let s = c * T;

        let num = Z + eps * b * s.powi(3);
        let denom = p - es * self.a * c.powi(3);
        let phi = num.atan2(denom);
        let len = num.hypot(denom);
        let (sinphi, cosphi) = (num / len, denom / len);

        let N = self.a / (1. - sinphi * sinphi * es).sqrt();
        let h = p * cosphi + Z * sinphi - self.a * self.a / N;
        Coor3D::raw(lam, phi, h)
    }
}
