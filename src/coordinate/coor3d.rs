use std::ops::Index;

/// Internal 3D coordinate tuple.
///
/// Holds earth centered cartesian coordinates (X, Y, Z), or geographical
/// coordinates in longitude/latitude/height order with the angles in radians.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub(crate) struct Coor3D(pub [f64; 3]);

impl Coor3D {
    /// From latitude/longitude/height, with the angular input in degrees
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64, height: f64) -> Coor3D {
        Coor3D([longitude.to_radians(), latitude.to_radians(), height])
    }

    /// From three elements, taken as is
    #[must_use]
    pub fn raw(first: f64, second: f64, third: f64) -> Coor3D {
        Coor3D([first, second, third])
    }
}

impl Index<usize> for Coor3D {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_order() {
        // Longitude first, in radians; the height passes through
        let c = Coor3D::geo(49.5, 15., 45.);
        assert_eq!(c[0], 15_f64.to_radians());
        assert_eq!(c[1], 49.5_f64.to_radians());
        assert_eq!(c[2], 45.);
        assert_eq!(Coor3D::raw(1., 2., 3.), Coor3D([1., 2., 3.]));
    }
}
