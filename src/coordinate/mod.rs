//! The coordinate value types. One immutable type per coordinate system;
//! every system converts to and from [`Wgs84`](wgs84::Wgs84), directly or
//! indirectly.

use crate::Error;

pub mod coor3d;
pub mod emep;
pub mod jtsk;
pub mod s42;
pub mod utm;
pub mod wgs84;

/// Parse a single number, accepting both `,` and `.` as decimal separator,
/// as found in Czech survey data: `-820800,60` is the same as `-820800.60`.
pub fn parse_number(text: &str) -> Result<f64, Error> {
    let normalized = text.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| Error::BadNumber(String::from(text.trim())))
}

/// Parse a pair of numbers, separated by `;` or by whitespace. Since `,`
/// may be a decimal separator, it is never a pair separator.
pub(crate) fn parse_pair(text: &str) -> Result<(f64, f64), Error> {
    let fields: Vec<&str> = if text.contains(';') {
        text.split(';').collect()
    } else {
        text.split_whitespace().collect()
    };
    if fields.len() != 2 {
        return Err(Error::BadNumber(String::from(text.trim())));
    }
    Ok((parse_number(fields[0])?, parse_number(fields[1])?))
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() -> Result<(), Error> {
        assert_eq!(parse_number("-820800,60")?, -820_800.6);
        assert_eq!(parse_number(" 1068738.00 ")?, 1_068_738.);
        assert_eq!(parse_number("12")?, 12.);
        assert_eq!(
            parse_number("12a"),
            Err(Error::BadNumber(String::from("12a")))
        );
        assert!(parse_number("").is_err());
        Ok(())
    }

    #[test]
    fn pairs() -> Result<(), Error> {
        assert_eq!(parse_pair("-820800,60; -1068738,00")?, (-820_800.6, -1_068_738.));
        assert_eq!(parse_pair("1 2")?, (1., 2.));
        assert!(parse_pair("1,5").is_err());
        assert!(parse_pair("1; 2; 3").is_err());
        Ok(())
    }
}
