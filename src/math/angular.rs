use super::round_to;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An angle given as integral degrees and minutes, and seconds-with-decimals.
///
/// When built from decimal degrees, the degrees are the floor of the value,
/// so negative angles carry their sign in the degree component only:
/// -49.5° is represented as -50° 30' 0".
///
/// Equality is structural. The hash is derived from the decimal-degree value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    degrees: i32,
    minutes: i32,
    seconds: f64,
}

impl Angle {
    /// An angle from its components, taken as is.
    #[must_use]
    pub fn new(degrees: i32, minutes: i32, seconds: f64) -> Angle {
        Angle {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Decompose decimal degrees into degrees, minutes and seconds.
    ///
    /// The minutes are rounded to 10 decimals before truncation, and the
    /// seconds to 8 decimals. Both roundings are needed: without them,
    /// values sitting exactly on a minute or second boundary come out as
    /// e.g. 59.9999999' instead of the next full minute.
    #[must_use]
    pub fn from_decimal(angle: f64) -> Angle {
        let mut degrees = angle.floor();
        let mut minutes = round_to((angle - degrees) * 60., 10);
        let mut seconds = round_to((minutes - minutes.floor()) * 60., 8);
        minutes = minutes.floor();

        // The rounding of the minutes may carry all the way to the degrees
        if seconds >= 60. {
            seconds -= 60.;
            minutes += 1.;
        }
        if minutes >= 60. {
            minutes -= 60.;
            degrees += 1.;
        }

        Angle {
            degrees: degrees as i32,
            minutes: minutes as i32,
            seconds,
        }
    }

    /// The angle in decimal degrees
    #[must_use]
    pub fn to_decimal(&self) -> f64 {
        f64::from(self.degrees) + (f64::from(self.minutes) * 60. + self.seconds) / 3600.
    }

    #[must_use]
    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    #[must_use]
    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Component-wise comparison, i.e. the same as `==`, but spelled out
    #[must_use]
    pub fn same_as(&self, other: &Angle) -> bool {
        self.degrees == other.degrees
            && self.minutes == other.minutes
            && self.seconds == other.seconds
    }

    /// The canonical `D° M' S.SSSS"` text, using `separator` as the decimal
    /// separator of the seconds.
    #[must_use]
    pub fn to_string_with(&self, separator: char) -> String {
        let seconds = format!("{:.4}", self.seconds);
        let seconds = if separator == '.' {
            seconds
        } else {
            seconds.replace('.', &separator.to_string())
        };
        format!("{}° {}' {}\"", self.degrees, self.minutes, seconds)
    }
}

impl From<f64> for Angle {
    fn from(angle: f64) -> Angle {
        Angle::from_decimal(angle)
    }
}

impl Hash for Angle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_decimal().to_bits().hash(state);
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}' {:.4}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

// ----- Free functions ------------------------------------------------------------

/// The integral degrees of a decimal degree value
#[must_use]
pub fn dec_to_degrees(angle: f64) -> i32 {
    Angle::from_decimal(angle).degrees
}

/// The integral minutes of a decimal degree value
#[must_use]
pub fn dec_to_minutes(angle: f64) -> i32 {
    Angle::from_decimal(angle).minutes
}

/// The seconds-with-decimals of a decimal degree value
#[must_use]
pub fn dec_to_seconds(angle: f64) -> f64 {
    Angle::from_decimal(angle).seconds
}

/// Degrees, minutes and seconds to decimal degrees, following the
/// floor-of-degrees convention of [`Angle`], i.e. the sign is carried by
/// the degrees only, and minutes and seconds are always added.
#[must_use]
pub fn degrees_to_dec(degrees: i32, minutes: i32, seconds: f64) -> f64 {
    Angle::new(degrees, minutes, seconds).to_decimal()
}

/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// minutes forced to unsigned by u16 type, but passing a negative value for
/// seconds leads to undefined behaviour.
#[must_use]
pub fn dms_to_dd(d: i32, m: u16, s: f64) -> f64 {
    let sign = if d < 0 { -1. } else { 1. };
    sign * (f64::from(d.abs()) + (f64::from(m) + s / 60.) / 60.)
}

/// Simplistic transformation from degrees and minutes-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from
/// degree-component, but passing a negative value for minutes leads
/// to undefined behaviour.
#[must_use]
pub fn dm_to_dd(d: i32, m: f64) -> f64 {
    let sign = if d < 0 { -1. } else { 1. };
    sign * (f64::from(d.abs()) + (m / 60.))
}

/// The canonical angle text for a possibly absent value: an absent value
/// renders as `?° ?' ?"`.
#[must_use]
pub fn format_angle(angle: Option<f64>) -> String {
    match angle {
        Some(angle) => Angle::from_decimal(angle).to_string(),
        None => String::from("?° ?' ?\""),
    }
}

/// Latitude and longitude as canonical angle texts, each followed by its
/// hemisphere letter (N/S, E/W). The letter is left out for absent values.
#[must_use]
pub fn format_lat_lon(latitude: Option<f64>, longitude: Option<f64>) -> String {
    let lat_hemisphere = match latitude {
        Some(lat) if lat >= 0. => "N",
        Some(_) => "S",
        None => "",
    };
    let lon_hemisphere = match longitude {
        Some(lon) if lon >= 0. => "E",
        Some(_) => "W",
        None => "",
    };
    format!(
        "{} {}; {} {}",
        format_angle(latitude),
        lat_hemisphere,
        format_angle(longitude),
        lon_hemisphere
    )
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::collections::hash_map::DefaultHasher;

    #[test]
    fn decomposition() {
        let a = Angle::from_decimal(60.41);
        assert_eq!(a.degrees(), 60);
        assert_eq!(a.minutes(), 24);
        assert_eq!(a.seconds(), 36.);

        // Exactly on a minute boundary: no 59.99999' artifacts
        let a = Angle::from_decimal(49. + 27. / 60.);
        assert_eq!(a.degrees(), 49);
        assert_eq!(a.minutes(), 27);
        assert_eq!(a.seconds(), 0.);

        // Negative angles: floor on degrees, positive minutes and seconds
        let a = Angle::from_decimal(-49.5);
        assert_eq!(a.degrees(), -50);
        assert_eq!(a.minutes(), 30);
        assert_eq!(a.seconds(), 0.);
        assert_eq!(a.to_decimal(), -49.5);

        // Rounding carrying into the degrees
        let a = Angle::from_decimal(10.999_999_999_999_9);
        assert_eq!(a.degrees(), 11);
        assert_eq!(a.minutes(), 0);
        assert_eq!(a.seconds(), 0.);
    }

    #[test]
    fn roundtrip() {
        // A deterministic stand-in for random sampling over [-180, 180)
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..10_000 {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let d = (state >> 11) as f64 / (1u64 << 53) as f64 * 360. - 180.;
            let a = Angle::from_decimal(d);
            assert!(a.minutes() < 60);
            assert!(a.seconds() < 60.);
            assert!((a.to_decimal() - d).abs() < 1e-8, "{d} -> {a}");
        }
    }

    #[test]
    fn equality_and_hash() {
        let a = Angle::new(49, 27, 33.726);
        let b = Angle::from_decimal(a.to_decimal());
        assert!(a.same_as(&a));
        assert_eq!(a, Angle::new(49, 27, 33.726));
        assert_ne!(a, Angle::new(49, 27, 33.727));
        assert_eq!(b.degrees(), 49);
        assert_eq!(b.minutes(), 27);

        let hash = |angle: &Angle| {
            let mut hasher = DefaultHasher::new();
            angle.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&Angle::new(49, 27, 33.726)));
    }

    #[test]
    fn formatting() {
        let a = Angle::new(49, 27, 33.726);
        assert_eq!(a.to_string(), "49° 27' 33.7260\"");
        assert_eq!(a.to_string_with(','), "49° 27' 33,7260\"");
        assert_eq!(format_angle(None), "?° ?' ?\"");
        assert_eq!(format_angle(Some(60.41)), "60° 24' 36.0000\"");
        assert_eq!(
            format_lat_lon(Some(60.41), Some(-0.5)),
            "60° 24' 36.0000\" N; -1° 30' 0.0000\" W"
        );
        assert_eq!(format_lat_lon(None, Some(1.)), "?° ?' ?\" ; 1° 0' 0.0000\" E");
    }

    #[test]
    fn helpers() {
        assert_eq!(dec_to_degrees(60.41), 60);
        assert_eq!(dec_to_minutes(60.41), 24);
        assert_eq!(dec_to_seconds(60.41), 36.);
        assert_float_eq!(degrees_to_dec(60, 24, 36.), 60.41, abs <= 1e-12);
        assert_float_eq!(degrees_to_dec(-50, 30, 0.), -49.5, abs <= 1e-12);
        assert_float_eq!(dms_to_dd(55, 30, 36.), 55.51, abs <= 1e-12);
        assert_float_eq!(dm_to_dd(55, 30.60), 55.51, abs <= 1e-12);
        assert_float_eq!(dms_to_dd(-55, 30, 36.), -55.51, abs <= 1e-12);
    }
}
