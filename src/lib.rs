//! *Point coordinate conversions for Central European geodesy and
//! atmospheric-monitoring grids*.
//!
//! Supported systems
//! =================
//!
//! - WGS84 geographical coordinates ([`Wgs84`]), the interchange format
//!   every other system is converted through
//! - S-JTSK in the Krovak projection, in both the "positive" EPSG:2065
//!   ([`Jtsk2065`]) and the "negative" EPSG:5514 ([`Jtsk5514`]) axis
//!   conventions
//! - S-42 / Pulkovo 1942 Gauss-Krüger ([`S42`])
//! - The EMEP 50×50 km polar stereographic grid ([`EmepGrid50x50`]) and
//!   the EMEP 0.1°×0.1° geographical grid ([`EmepGrid01x01`])
//! - UTM, with the standard zone rules ([`Utm`]) or a caller-selected
//!   fixed zone ([`UtmZone`])
//!
//! Additionally, free-text coordinates in four regional notations can be
//! parsed into [`Wgs84`] values ([`parse`]), and geodesic distances
//! between WGS84 points can be computed ([`distance`]).
//!
//! ```rust
//! use coordconv::prelude::*;
//! let brno = parse("N 49°11.706', E 16°36.408'")?;
//! let jtsk = brno.jtsk5514();
//! let back = jtsk.wgs84();
//! assert!((back.latitude() - brno.latitude()).abs() < 1e-6);
//! # Ok::<(), coordconv::Error>(())
//! ```

mod coordinate;
mod ellipsoid;
mod math;
mod parser;
mod transform;

pub(crate) use coordinate::coor3d::Coor3D;
pub use coordinate::emep::gridable;
pub use coordinate::emep::is_gridable;
pub use coordinate::emep::EmepGrid01x01;
pub use coordinate::emep::EmepGrid50x50;
pub use coordinate::jtsk::Jtsk2065;
pub use coordinate::jtsk::Jtsk5514;
pub use coordinate::s42::S42;
pub use coordinate::utm::Utm;
pub use coordinate::utm::UtmZone;
pub use coordinate::parse_number;
pub use coordinate::wgs84::Wgs84;

pub use ellipsoid::geodesics::distance;
pub use ellipsoid::geodesics::distance_haversine;
pub use ellipsoid::geodesics::distance_spherical;
pub use ellipsoid::geodesics::geodesic;
pub use ellipsoid::geodesics::GeodesicSolution;
pub use ellipsoid::Ellipsoid;
pub use ellipsoid::DEFAULT_DATUM;

pub use math::angular;
pub use math::angular::Angle;

pub use parser::parse;
pub use parser::Grammar;
pub use parser::GRAMMARS;

pub use transform::utm_zone_letter;
pub use transform::utm_zone_number;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::angular::format_angle;
    pub use crate::angular::format_lat_lon;
    pub use crate::distance;
    pub use crate::parse;
    pub use crate::Angle;
    pub use crate::Ellipsoid;
    pub use crate::EmepGrid01x01;
    pub use crate::EmepGrid50x50;
    pub use crate::Error;
    pub use crate::Jtsk2065;
    pub use crate::Jtsk5514;
    pub use crate::Utm;
    pub use crate::UtmZone;
    pub use crate::Wgs84;
    pub use crate::S42;
}

/// The transformation functions, for callers preferring free functions
/// over the accessor methods on the coordinate types
pub mod transformations {
    pub use crate::transform::emep01x01_from_wgs84;
    pub use crate::transform::emep50x50_from_wgs84;
    pub use crate::transform::jtsk2065_from_jtsk5514;
    pub use crate::transform::jtsk2065_from_wgs84;
    pub use crate::transform::jtsk5514_from_jtsk2065;
    pub use crate::transform::jtsk5514_from_wgs84;
    pub use crate::transform::s42_from_wgs84;
    pub use crate::transform::utm_from_wgs84;
    pub use crate::transform::utm_zone_from_wgs84;
    pub use crate::transform::wgs84_from_emep50x50;
    pub use crate::transform::wgs84_from_jtsk2065;
    pub use crate::transform::wgs84_from_jtsk5514;
    pub use crate::transform::wgs84_from_s42;
}

use thiserror::Error;

/// The error type of the crate.
///
/// Note that non-convergence of the iterative algorithms is not an error:
/// the best estimate is returned, cf. [`GeodesicSolution`].
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("unknown datum: {0}")]
    UnknownDatum(String),

    #[error("no coordinate format matches: {0:?}")]
    ParseNoMatch(String),

    #[error("malformed number: {0:?}")]
    BadNumber(String),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B.R. Bowring (1976): *Transformation from spatial to geographical coordinates*.
    /// Survey Review 23(181), pp. 323–327.
    Bow76,

    /// B.R. Bowring (1985): *The accuracy of geodetic latitude and height equations*.
    /// Survey Review, 28(218), pp.202-206,
    /// [DOI](https://doi.org/10.1179/sre.1985.28.218.202)
    Bow85,

    /// Z. Hrdina (2002): *Přepočet z S-JTSK do WGS-84*.
    /// The folded-constant formulation of the Krovak projection used for S-JTSK.
    Hrd02,

    /// John P. Snyder (1987): *Map projections - a working manual*.
    /// USGS Professional Paper 1395.
    Sny87,

    /// František Kuska (1960): *Matematická kartografia*.
    /// Slovenské Vydavateľstvo Technickej Literatúry, Bratislava.
    /// Basis of the S-42 inverse series, as compiled by Gábor Timár.
    Kus60,

    /// T. Vincenty (1975) Direct and Inverse Solutions of Geodesics on the Ellipsoid
    /// with application of nested equations.
    /// Survey Review, 23(176): 88-93.
    /// [pdf](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
    /// (See also Wikipedia: [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty's_formulae)).
    Vin75,

    /// EMEP/MSC-W (2012): *Note on the EMEP grid scale, projection and reporting*.
    /// Definition of the 50×50 km polar stereographic grid and the 0.1° grid.
    Eme12,
}
