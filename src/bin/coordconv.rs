//! Convert a projected coordinate pair to WGS84, and optionally show the
//! address of the point on a web map.
//!
//! ```sh
//! coordconv jtsk5514 -820800,60 -1068738,00 o
//! ```
use anyhow::Context;
use clap::{Parser, ValueEnum};
use coordconv::prelude::*;
use log::debug;

#[derive(Parser, Debug)]
#[clap(name = "coordconv")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The coordinate system of X and Y
    #[clap(value_enum, ignore_case = true)]
    source: Source,

    /// First coordinate. Both ',' and '.' are accepted as decimal separator
    #[clap(allow_hyphen_values = true)]
    x: String,

    /// Second coordinate
    #[clap(allow_hyphen_values = true)]
    y: String,

    /// Web map to show the result on: B(ing), G(oogle), O(penStreetMap) or S(eznam)
    map: Option<String>,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Source {
    Jtsk2065,
    Jtsk5514,
    S42,
}

impl Source {
    fn name(self) -> &'static str {
        match self {
            Source::Jtsk2065 => "JTSK2065",
            Source::Jtsk5514 => "JTSK5514",
            Source::S42 => "S42",
        }
    }

    fn wgs84(self, x: f64, y: f64) -> Wgs84 {
        match self {
            Source::Jtsk2065 => Jtsk2065::new(x, y).wgs84(),
            Source::Jtsk5514 => Jtsk5514::new(x, y).wgs84(),
            Source::S42 => S42::new(x, y).wgs84(),
        }
    }
}

/// The address of the point on the web map selected by the single letter
/// `provider`, or `None` for anything else
fn map_url(provider: &str, wgs84: &Wgs84) -> Option<String> {
    let lat = wgs84.latitude();
    let lon = wgs84.longitude();
    let url = match provider.trim().to_ascii_uppercase().as_str() {
        "B" => format!("https://bing.com/maps/default.aspx?sp=point.{lat}_{lon}"),
        "G" => format!("https://maps.google.com/maps?q={lat},{lon}"),
        "O" => format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map=16/{lat}/{lon}"),
        "S" => format!(
            "https://mapy.cz/zakladni?x={lon}&y={lat}&z=16&source=coor&id={lon}%2C{lat}"
        ),
        _ => return None,
    };
    Some(url)
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{options:#?}");

    let x = coordconv::parse_number(&options.x).context("Bad X coordinate")?;
    let y = coordconv::parse_number(&options.y).context("Bad Y coordinate")?;
    let wgs84 = options.source.wgs84(x, y);

    println!(" IN ({}): x={x}; y={y}", options.source.name());
    println!(
        " OUT: Lat: {:.6}; Lng: {:.6}",
        wgs84.latitude(),
        wgs84.longitude()
    );

    if let Some(provider) = &options.map {
        match map_url(provider, &wgs84) {
            Some(url) => println!("{url}"),
            None => println!(" Unknown map server."),
        }
    }
    Ok(())
}

// ----- Tests ---------------------------------------------------------------------
