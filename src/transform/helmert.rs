#![allow(non_snake_case)]
//! The Helmert transform performs reference frame shifts. It operates in the 3D cartesian
//! space, transforming earth centered cartesian coordinates between datums, here between
//! WGS84 and the Bessel based S-JTSK datum.
//!
//! The rotations are small, so the rotation matrix is linearized, and given in the
//! coordinate frame convention.

use crate::Coor3D;

/// A 7 parameter similarity transform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Helmert {
    /// Translation, in meters
    pub T: [f64; 3],
    /// Rotation around the X, Y and Z axes, in radians
    pub R: [f64; 3],
    /// Scale factor, 1 + the scale difference
    pub S: f64,
}

/// S-JTSK (Bessel) to WGS84
pub const JTSK_TO_WGS84: Helmert = Helmert {
    T: [570.69, 85.69, 462.84],
    R: [
        -0.000_024_232_005_890_584_94,
        -0.000_007_692_829_566_373_672_1,
        -0.000_025_506_532_576_853_8,
    ],
    S: 1.000_003_543,
};

impl Helmert {
    /// Apply the transform: rotate, scale, then translate
    #[must_use]
    pub(crate) fn apply(&self, c: &Coor3D) -> Coor3D {
        let [wx, wy, wz] = self.R;
        let ROT = [[1., wz, -wy], [-wz, 1., wx], [wy, -wx, 1.]];

        let x = c[0] * ROT[0][0] + c[1] * ROT[0][1] + c[2] * ROT[0][2];
        let y = c[0] * ROT[1][0] + c[1] * ROT[1][1] + c[2] * ROT[1][2];
        let z = c[0] * ROT[2][0] + c[1] * ROT[2][1] + c[2] * ROT[2][2];

        Coor3D::raw(
            self.T[0] + self.S * x,
            self.T[1] + self.S * y,
            self.T[2] + self.S * z,
        )
    }

    /// The first order inverse: all parameters negated, the scale
    /// difference included. For S-JTSK, this is how the WGS84 to S-JTSK
    /// parameters are published.
    #[must_use]
    pub fn reversed(&self) -> Helmert {
        Helmert {
            T: [-self.T[0], -self.T[1], -self.T[2]],
            R: [-self.R[0], -self.R[1], -self.R[2]],
            S: 2. - self.S,
        }
    }
}

// ----- T E S T S ------------------------------------------------------------------
