use crate::transform;
use crate::Wgs84;
use std::fmt;
use std::hash::{Hash, Hasher};

/// UTM coordinates, in the zone given by the standard UTM zone rules
/// (including the exceptions around Norway and Svalbard).
///
/// Southern hemisphere northings include the 10 000 km false northing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Utm {
    easting: f64,
    northing: f64,
    zone_number: i32,
    zone_letter: char,
}

impl Utm {
    #[must_use]
    pub fn new(easting: f64, northing: f64, zone_number: i32, zone_letter: char) -> Utm {
        Utm {
            easting,
            northing,
            zone_number,
            zone_letter,
        }
    }

    #[must_use]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    #[must_use]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    #[must_use]
    pub fn zone_number(&self) -> i32 {
        self.zone_number
    }

    /// The latitude band letter, `'Z'` outside the UTM latitude range
    #[must_use]
    pub fn zone_letter(&self) -> char {
        self.zone_letter
    }

    /// Zone number and latitude band, e.g. "33U"
    #[must_use]
    pub fn zone(&self) -> String {
        format!("{}{}", self.zone_number, self.zone_letter)
    }

    /// The UTM zone number for a point
    #[must_use]
    pub fn zone_number_of(wgs84: &Wgs84) -> i32 {
        transform::utm_zone_number(wgs84.latitude(), wgs84.longitude())
    }
}

impl Hash for Utm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.easting + 0.).to_bits().hash(state);
        (self.northing + 0.).to_bits().hash(state);
        self.zone_number.hash(state);
        self.zone_letter.hash(state);
    }
}

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}; {}", self.zone(), self.easting, self.northing)
    }
}

// ----- Fixed zone ------------------------------------------------------------------

/// UTM coordinates forced into a caller-selected zone, regardless of the
/// zone the point actually falls in. Used to keep a country straddling two
/// zones in one coordinate system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UtmZone {
    x: f64,
    y: f64,
    zone_number: i32,
}

impl UtmZone {
    #[must_use]
    pub fn new(x: f64, y: f64, zone_number: i32) -> UtmZone {
        UtmZone { x, y, zone_number }
    }

    /// Easting
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Northing
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn zone_number(&self) -> i32 {
        self.zone_number
    }
}

impl Hash for UtmZone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x + 0.).to_bits().hash(state);
        (self.y + 0.).to_bits().hash(state);
        self.zone_number.hash(state);
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; {}; zone: {}", self.x, self.y, self.zone_number)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_and_text() {
        let u = Utm::new(459_772.5, 5_547_176.25, 33, 'U');
        assert_eq!(u.zone(), "33U");
        assert_eq!(u.to_string(), "33U 459772.5; 5547176.25");
        assert_eq!(u.zone_letter(), 'U');

        let z = UtmZone::new(459_772.5, 5_547_176.25, 33);
        assert_eq!(z.to_string(), "459772.5; 5547176.25; zone: 33");
        assert_eq!(z.zone_number(), 33);

        assert_eq!(Utm::zone_number_of(&Wgs84::new(60.5, 6.)), 32);
        assert_eq!(Utm::zone_number_of(&Wgs84::new(50.0755, 14.4378)), 33);
    }
}
