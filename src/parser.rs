//! Free text coordinates, in the notations used by the common web maps.
//!
//! Four notations are recognized, tried in this order:
//!
//! | Name                | Example                              |
//! |---------------------|--------------------------------------|
//! | decimal             | `49.4593683, 18.3572658`             |
//! | decimal hemisphere  | `49.4593683N, 18.3572658E`           |
//! | degrees minutes     | `N 49°27.56210', E 18°21.43595'`     |
//! | degrees minutes sec | `49°27'33.726"N, 18°21'26.157"E`     |
//!
//! The first notation matching the entire (trimmed) input wins. Hemisphere
//! letters are case insensitive, and `S` and `W` negate the value.

use crate::angular::{dm_to_dd, dms_to_dd};
use crate::{Error, Wgs84};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A grammar recognizes one coordinate notation, and returns `None` for
/// anything else
pub type Grammar = fn(&str) -> Option<Wgs84>;

/// The grammars tried by [`parse`], in priority order
pub const GRAMMARS: [(&str, Grammar); 4] = [
    ("decimal", decimal),
    ("decimal hemisphere", decimal_hemisphere),
    ("degrees minutes", degrees_minutes),
    ("degrees minutes seconds", degrees_minutes_seconds),
];

/// Parse a coordinate pair in any of the [`GRAMMARS`]
pub fn parse(text: &str) -> Result<Wgs84, Error> {
    let text = text.trim();
    for (name, grammar) in GRAMMARS {
        if let Some(wgs84) = grammar(text) {
            debug!("Parsed {text:?} as {name}");
            return Ok(wgs84);
        }
    }
    Err(Error::ParseNoMatch(String::from(text)))
}

// ----- The grammars ------------------------------------------------------------------

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^([+-]?[0-9]{1,3}(?:\.[0-9]+)?)     # latitude
        \s*,\s*
        ([+-]?[0-9]{1,3}(?:\.[0-9]+)?)$     # longitude
        ",
    )
    .expect("decimal grammar")
});

static DECIMAL_HEMISPHERE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        ^([0-9]{1,3}(?:\.[0-9]*)?)\s*([NS])  # latitude
        \s*,\s*
        ([0-9]{1,3}(?:\.[0-9]*)?)\s*([EW])$  # longitude
        ",
    )
    .expect("decimal hemisphere grammar")
});

static DEGREES_MINUTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        ^([NS])\s*([0-9]{1,3})°\s*([0-9]{1,2}(?:\.[0-9]*)?)'   # latitude
        \s*,\s*
        ([EW])\s*([0-9]{1,3})°\s*([0-9]{1,2}(?:\.[0-9]*)?)'$   # longitude
        ",
    )
    .expect("degrees minutes grammar")
});

static DEGREES_MINUTES_SECONDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^([0-9]{1,3})°\s*([0-9]{1,2})'\s*([0-9]{1,2}(?:\.[0-9]*)?)"\s*([NS])   # latitude
        \s*,\s*
        ([0-9]{1,3})°\s*([0-9]{1,2})'\s*([0-9]{1,2}(?:\.[0-9]*)?)"\s*([EW])$   # longitude
        "#,
    )
    .expect("degrees minutes seconds grammar")
});

/// Signed decimal degrees: `49.4593683, 18.3572658`
#[must_use]
pub fn decimal(text: &str) -> Option<Wgs84> {
    let caps = DECIMAL.captures(text)?;
    Some(Wgs84::new(number(&caps, 1)?, number(&caps, 2)?))
}

/// Unsigned decimal degrees with hemisphere suffix: `49.4593683N, 18.3572658E`
#[must_use]
pub fn decimal_hemisphere(text: &str) -> Option<Wgs84> {
    let caps = DECIMAL_HEMISPHERE.captures(text)?;
    let lat = hemisphere(&caps, 2) * number(&caps, 1)?;
    let lon = hemisphere(&caps, 4) * number(&caps, 3)?;
    Some(Wgs84::new(lat, lon))
}

/// Hemisphere prefix, degrees and decimal minutes: `N 49°27.56210', E 18°21.43595'`
#[must_use]
pub fn degrees_minutes(text: &str) -> Option<Wgs84> {
    let caps = DEGREES_MINUTES.captures(text)?;
    let lat = dm_to_dd(integer(&caps, 2)?, number(&caps, 3)?);
    let lon = dm_to_dd(integer(&caps, 5)?, number(&caps, 6)?);
    Some(Wgs84::new(
        hemisphere(&caps, 1) * lat,
        hemisphere(&caps, 4) * lon,
    ))
}

/// Degrees, minutes and decimal seconds with hemisphere suffix:
/// `49°27'33.726"N, 18°21'26.157"E`
#[must_use]
pub fn degrees_minutes_seconds(text: &str) -> Option<Wgs84> {
    let caps = DEGREES_MINUTES_SECONDS.captures(text)?;
    let lat = dms_to_dd(integer(&caps, 1)?, minutes(&caps, 2)?, number(&caps, 3)?);
    let lon = dms_to_dd(integer(&caps, 5)?, minutes(&caps, 6)?, number(&caps, 7)?);
    Some(Wgs84::new(
        hemisphere(&caps, 4) * lat,
        hemisphere(&caps, 8) * lon,
    ))
}

// ----- Capture group helpers ---------------------------------------------------------

fn number(caps: &Captures, i: usize) -> Option<f64> {
    caps.get(i)?.as_str().parse().ok()
}

fn integer(caps: &Captures, i: usize) -> Option<i32> {
    caps.get(i)?.as_str().parse().ok()
}

fn minutes(caps: &Captures, i: usize) -> Option<u16> {
    caps.get(i)?.as_str().parse().ok()
}

/// -1 for the southern and western hemispheres, otherwise 1
fn hemisphere(caps: &Captures, i: usize) -> f64 {
    match caps.get(i).map(|m| m.as_str()) {
        Some("S" | "s" | "W" | "w") => -1.,
        _ => 1.,
    }
}

// ----- T E S T S ---------------------------------------------------------------------
