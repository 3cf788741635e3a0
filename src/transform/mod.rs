//! The transformations between the coordinate types.
//!
//! All functions are pure: they depend on nothing but their arguments and
//! a set of fixed constants. The projection arithmetic lives in the
//! submodules, which work on plain numbers. The functions here wrap them
//! in the coordinate value types.

mod gauss_kruger;
mod helmert;
mod krovak;
mod stereographic;
mod tmerc;

use crate::coordinate::emep::gridable;
use crate::{EmepGrid01x01, EmepGrid50x50, Jtsk2065, Jtsk5514, Utm, UtmZone, Wgs84, S42};

pub use tmerc::zone_letter as utm_zone_letter;
pub use tmerc::zone_number as utm_zone_number;

// ----- S-42 --------------------------------------------------------------------------

/// WGS84 to S-42, zone 3
#[must_use]
pub fn s42_from_wgs84(wgs84: &Wgs84) -> S42 {
    let (x, y) = gauss_kruger::fwd(wgs84.latitude(), wgs84.longitude());
    S42::new(x, y)
}

/// S-42, any zone, to WGS84
#[must_use]
pub fn wgs84_from_s42(s42: &S42) -> Wgs84 {
    let (lat, lon) = gauss_kruger::inv(s42.x(), s42.y());
    Wgs84::new(lat, lon)
}

// ----- S-JTSK ------------------------------------------------------------------------

#[must_use]
pub fn jtsk2065_from_wgs84(wgs84: &Wgs84) -> Jtsk2065 {
    let (x, y) = krovak::fwd(wgs84.latitude(), wgs84.longitude());
    Jtsk2065::new(x, y)
}

#[must_use]
pub fn jtsk5514_from_wgs84(wgs84: &Wgs84) -> Jtsk5514 {
    jtsk5514_from_jtsk2065(&jtsk2065_from_wgs84(wgs84))
}

#[must_use]
pub fn wgs84_from_jtsk2065(jtsk: &Jtsk2065) -> Wgs84 {
    let (lat, lon) = krovak::inv(jtsk.x(), jtsk.y());
    Wgs84::new(lat, lon)
}

#[must_use]
pub fn wgs84_from_jtsk5514(jtsk: &Jtsk5514) -> Wgs84 {
    wgs84_from_jtsk2065(&jtsk2065_from_jtsk5514(jtsk))
}

/// The axis reflection between the two S-JTSK conventions. Exact: no
/// arithmetic beyond sign changes.
#[must_use]
pub fn jtsk5514_from_jtsk2065(jtsk: &Jtsk2065) -> Jtsk5514 {
    Jtsk5514::new(-jtsk.y(), -jtsk.x())
}

/// The inverse of [`jtsk5514_from_jtsk2065`], which is also its own inverse
#[must_use]
pub fn jtsk2065_from_jtsk5514(jtsk: &Jtsk5514) -> Jtsk2065 {
    Jtsk2065::new(-jtsk.y(), -jtsk.x())
}

// ----- EMEP grids --------------------------------------------------------------------

#[must_use]
pub fn emep50x50_from_wgs84(wgs84: &Wgs84) -> EmepGrid50x50 {
    let (x, y) = stereographic::fwd(wgs84.latitude(), wgs84.longitude());
    EmepGrid50x50::new(x, y)
}

#[must_use]
pub fn wgs84_from_emep50x50(emep: &EmepGrid50x50) -> Wgs84 {
    let (lat, lon) = stereographic::inv(emep.x(), emep.y());
    Wgs84::new(lat, lon)
}

/// Snap a point to the centre of its 0.1° cell
#[must_use]
pub fn emep01x01_from_wgs84(wgs84: &Wgs84) -> EmepGrid01x01 {
    EmepGrid01x01::new(gridable(wgs84.latitude()), gridable(wgs84.longitude()))
}

// ----- UTM ---------------------------------------------------------------------------

/// WGS84 to UTM, in the zone the point belongs to
#[must_use]
pub fn utm_from_wgs84(wgs84: &Wgs84) -> Utm {
    let (lat, lon) = (wgs84.latitude(), wgs84.longitude());
    let zone = utm_zone_number(lat, lon);
    let (easting, northing) = tmerc::fwd(lat, lon, zone);
    Utm::new(easting, northing, zone, utm_zone_letter(lat))
}

/// WGS84 to UTM, in a fixed zone
#[must_use]
pub fn utm_zone_from_wgs84(wgs84: &Wgs84, zone_number: i32) -> UtmZone {
    let (x, y) = tmerc::fwd(wgs84.latitude(), wgs84.longitude(), zone_number);
    UtmZone::new(x, y, zone_number)
}

// ----- T E S T S ---------------------------------------------------------------------
