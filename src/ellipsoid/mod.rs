pub(crate) mod cartesians;
pub(crate) mod geodesics;

use crate::Error;
use once_cell::sync::OnceCell;

/// The name of the datum used when none is given.
pub const DEFAULT_DATUM: &str = "WGS 84";

// Name, semimajor axis, squared eccentricity. Note that these are the
// rounded values tabulated for UTM work, not the full defining parameters
// of the datums.
const DATUMS: [(&str, f64, f64); 26] = [
    ("Airy", 6_377_563., 0.006_670_54),
    ("Australian National", 6_378_160., 0.006_694_542),
    ("Bessel 1841", 6_377_397., 0.006_674_372),
    ("Bessel 1841 Nambia", 6_377_484., 0.006_674_372),
    ("Clarke 1866", 6_378_206., 0.006_768_658),
    ("Clarke 1880", 6_378_249., 0.006_803_511),
    ("Everest", 6_377_276., 0.006_637_847),
    ("Fischer 1960 Mercury", 6_378_166., 0.006_693_422),
    ("Fischer 1968", 6_378_150., 0.006_693_422),
    ("GRS 1967", 6_378_160., 0.006_694_605),
    ("GRS 1980", 6_378_137., 0.006_694_38),
    ("Helmert 1906", 6_378_200., 0.006_693_422),
    ("Hough", 6_378_270., 0.006_722_67),
    ("International", 6_378_388., 0.006_722_67),
    ("Krassovsky", 6_378_245., 0.006_693_422),
    ("Modified Airy", 6_377_340., 0.006_670_54),
    ("Modified Everest", 6_377_304., 0.006_637_847),
    ("Modified Fischer 1960", 6_378_155., 0.006_693_422),
    ("South American 1969", 6_378_160., 0.006_694_542),
    ("WGS 60", 6_378_165., 0.006_693_422),
    ("WGS 66", 6_378_145., 0.006_694_542),
    ("WGS 72", 6_378_135., 0.006_694_318),
    ("ED50", 6_378_388., 0.006_722_67),
    ("WGS 84", 6_378_137., 0.006_694_38),
    ("EUREF89", 6_378_137., 0.006_694_38),
    ("ETRS89", 6_378_137., 0.006_694_38),
];

/// Representation of a named (or user defined) biaxial ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    name: &'static str,
    a: f64,
    f: f64,
}

/// The registry entry for WGS 84 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        *Ellipsoid::default_datum()
    }
}

impl Ellipsoid {
    /// User defined ellipsoid
    #[must_use]
    pub const fn new(semimajor_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            name: "user defined",
            a: semimajor_axis,
            f: flattening,
        }
    }

    /// User defined ellipsoid, from the semimajor axis and the squared eccentricity
    #[must_use]
    pub fn from_eccentricity_squared(semimajor_axis: f64, eccentricity_squared: f64) -> Ellipsoid {
        Ellipsoid::new(semimajor_axis, 1. - (1. - eccentricity_squared).sqrt())
    }

    /// Predefined ellipsoid from the datum registry. The lookup is
    /// case insensitive, so "wgs 84" and "WGS 84" are the same, but
    /// otherwise exact: surrounding blanks are part of the name.
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        for (datum, a, es) in DATUMS {
            if datum.eq_ignore_ascii_case(name) {
                let mut ellps = Ellipsoid::from_eccentricity_squared(a, es);
                ellps.name = datum;
                return Ok(ellps);
            }
        }
        Err(Error::UnknownDatum(String::from(name)))
    }

    /// The names of all datums in the registry, in registry order
    pub fn datums() -> impl Iterator<Item = &'static str> {
        DATUMS.iter().map(|d| d.0)
    }

    /// The default datum, i.e. the registry entry for [`DEFAULT_DATUM`].
    /// The lookup is done once, and the result shared between all callers.
    #[must_use]
    pub fn default_datum() -> &'static Ellipsoid {
        static DEFAULT: OnceCell<Ellipsoid> = OnceCell::new();
        DEFAULT.get_or_init(|| {
            Ellipsoid::named(DEFAULT_DATUM).unwrap_or_else(|_| {
                log::warn!("Default datum {DEFAULT_DATUM} not in registry, using WGS84 defining parameters");
                Ellipsoid::new(6_378_137.0, 1. / 298.257_223_563)
            })
        })
    }

    /// The registry name, or "user defined"
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.f * (2_f64 - self.f)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        let es = self.eccentricity_squared();
        es / (1.0 - es)
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N*
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        if self.f == 0.0 {
            return self.a;
        }
        self.a / (1.0 - latitude.sin().powi(2) * self.eccentricity_squared()).sqrt()
    }
}

// ----- Tests ---------------------------------------------------------------------
