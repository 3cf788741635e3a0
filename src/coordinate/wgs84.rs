use crate::angular::{self, Angle};
use crate::transform;
use crate::{EmepGrid01x01, EmepGrid50x50, Error, Jtsk2065, Jtsk5514, Utm, UtmZone, S42};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Geographical coordinates on the WGS84 ellipsoid, in decimal degrees.
///
/// The interchange format of the crate: every other coordinate type is
/// defined through its conversion to or from `Wgs84`. The projections are
/// computed on access, not cached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Wgs84 {
    latitude: f64,
    longitude: f64,
}

impl Wgs84 {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Wgs84 {
        Wgs84 {
            latitude,
            longitude,
        }
    }

    /// From degrees, minutes and seconds of latitude and longitude, with
    /// the sign carried by the degrees (cf. [`Angle`])
    #[must_use]
    pub fn from_dms(
        latitude_degrees: i32,
        latitude_minutes: i32,
        latitude_seconds: f64,
        longitude_degrees: i32,
        longitude_minutes: i32,
        longitude_seconds: f64,
    ) -> Wgs84 {
        Wgs84 {
            latitude: angular::degrees_to_dec(
                latitude_degrees,
                latitude_minutes,
                latitude_seconds,
            ),
            longitude: angular::degrees_to_dec(
                longitude_degrees,
                longitude_minutes,
                longitude_seconds,
            ),
        }
    }

    /// From a pair of [`Angle`]s
    #[must_use]
    pub fn from_angles(latitude: Angle, longitude: Angle) -> Wgs84 {
        Wgs84::new(latitude.to_decimal(), longitude.to_decimal())
    }

    // ----- Latitude --------------------------------------------------------------

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn latitude_rad(&self) -> f64 {
        self.latitude.to_radians()
    }

    #[must_use]
    pub fn latitude_angle(&self) -> Angle {
        Angle::from_decimal(self.latitude)
    }

    #[must_use]
    pub fn latitude_degrees(&self) -> i32 {
        angular::dec_to_degrees(self.latitude)
    }

    #[must_use]
    pub fn latitude_minutes(&self) -> i32 {
        angular::dec_to_minutes(self.latitude)
    }

    #[must_use]
    pub fn latitude_seconds(&self) -> f64 {
        angular::dec_to_seconds(self.latitude)
    }

    // ----- Longitude -------------------------------------------------------------

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn longitude_rad(&self) -> f64 {
        self.longitude.to_radians()
    }

    #[must_use]
    pub fn longitude_angle(&self) -> Angle {
        Angle::from_decimal(self.longitude)
    }

    #[must_use]
    pub fn longitude_degrees(&self) -> i32 {
        angular::dec_to_degrees(self.longitude)
    }

    #[must_use]
    pub fn longitude_minutes(&self) -> i32 {
        angular::dec_to_minutes(self.longitude)
    }

    #[must_use]
    pub fn longitude_seconds(&self) -> f64 {
        angular::dec_to_seconds(self.longitude)
    }

    // ----- Projections -----------------------------------------------------------

    #[must_use]
    pub fn s42(&self) -> S42 {
        transform::s42_from_wgs84(self)
    }

    #[must_use]
    pub fn jtsk2065(&self) -> Jtsk2065 {
        transform::jtsk2065_from_wgs84(self)
    }

    #[must_use]
    pub fn jtsk5514(&self) -> Jtsk5514 {
        transform::jtsk5514_from_wgs84(self)
    }

    #[must_use]
    pub fn emep50x50(&self) -> EmepGrid50x50 {
        transform::emep50x50_from_wgs84(self)
    }

    #[must_use]
    pub fn emep01x01(&self) -> EmepGrid01x01 {
        transform::emep01x01_from_wgs84(self)
    }

    /// UTM, in the zone given by the standard zone rules
    #[must_use]
    pub fn utm(&self) -> Utm {
        transform::utm_from_wgs84(self)
    }

    /// UTM, forced into the given zone
    #[must_use]
    pub fn utm_zone(&self, zone_number: i32) -> UtmZone {
        transform::utm_zone_from_wgs84(self, zone_number)
    }

    /// UTM, forced into zone 33, i.e. the zone covering most of the
    /// Czech Republic
    #[must_use]
    pub fn utm33n(&self) -> UtmZone {
        self.utm_zone(33)
    }

    // ----- Distances and formatting ----------------------------------------------

    /// The geodesic distance to `other`, in meters
    #[must_use]
    pub fn distance_to(&self, other: &Wgs84) -> f64 {
        crate::distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// Latitude and longitude in the canonical `D° M' S.SSSS"` form,
    /// separated by a space
    #[must_use]
    pub fn to_deg_string(&self) -> String {
        format!(
            "{} {}",
            angular::format_angle(Some(self.latitude)),
            angular::format_angle(Some(self.longitude))
        )
    }
}

impl Hash for Wgs84 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.latitude + 0.).to_bits().hash(state);
        (self.longitude + 0.).to_bits().hash(state);
    }
}

impl fmt::Display for Wgs84 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}°", self.latitude, self.longitude)
    }
}

/// Parse any of the text notations recognized by [`parse`](crate::parse)
impl FromStr for Wgs84 {
    type Err = Error;
    fn from_str(text: &str) -> Result<Wgs84, Error> {
        crate::parse(text)
    }
}

// ----- Tests ---------------------------------------------------------------------
