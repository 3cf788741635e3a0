use coordconv::prelude::*;
use coordconv::transformations::*;
use float_eq::assert_float_eq;

// ----- A grid over the Czech Republic ----------------------------------------------

/// Latitude 48.5°N to 51.1°N, longitude 12°E to 19°E
fn czech_grid() -> impl Iterator<Item = Wgs84> {
    (0..11).flat_map(|i| (0..15).map(move |j| Wgs84::new(48.5 + 0.26 * i as f64, 12. + 0.5 * j as f64)))
}

#[test]
fn jtsk_roundtrip() {
    for p in czech_grid() {
        let q = p.jtsk2065().wgs84();
        assert_float_eq!(q.latitude(), p.latitude(), abs <= 1e-6);
        assert_float_eq!(q.longitude(), p.longitude(), abs <= 1e-6);

        let q = p.jtsk5514().wgs84();
        assert_float_eq!(q.latitude(), p.latitude(), abs <= 1e-6);
        assert_float_eq!(q.longitude(), p.longitude(), abs <= 1e-6);

        // Inside the country, the EPSG:2065 ordering holds
        let j = p.jtsk2065();
        assert!(j.x() > j.y() && j.y() > 0.);
    }
}

#[test]
fn s42_roundtrip() {
    // The forward datum shift is a plane offset, so the roundtrip is only
    // good to a few meters
    for p in czech_grid() {
        let s = p.s42();
        assert_eq!(s.zone(), 3);
        let q = s.wgs84();
        assert_float_eq!(q.latitude(), p.latitude(), abs <= 5e-5);
        assert_float_eq!(q.longitude(), p.longitude(), abs <= 5e-5);
    }
}

#[test]
fn reflection_law() {
    let samples = [
        (1_068_738., 820_800.6),
        (1_044_492.650_4, 741_817.853_8),
        (-3.25, 1e7),
        (0., -0.),
    ];
    for (x, y) in samples {
        let a = Jtsk2065::new(x, y);
        let b = jtsk5514_from_jtsk2065(&a);
        assert_eq!(b.x(), -y);
        assert_eq!(b.y(), -x);
        assert_eq!(jtsk2065_from_jtsk5514(&b), a);
    }
}

#[test]
fn known_points() {
    let p = Jtsk2065::new(1_068_738., 820_800.6).wgs84();
    assert_float_eq!(p.latitude(), 49.758_185, abs <= 1e-6);
    assert_float_eq!(p.longitude(), 13.397_530, abs <= 1e-6);

    let prague = Wgs84::new(50.0755, 14.4378);
    let s = s42_from_wgs84(&prague);
    assert_float_eq!(s.x(), 3_459_878.535, abs <= 1e-2);
    assert_float_eq!(s.y(), 5_549_536.817, abs <= 1e-2);

    let u = prague.utm();
    assert_eq!(u.zone(), "33U");
    assert_float_eq!(u.easting(), 459_772.016, abs <= 1e-3);
    assert_float_eq!(u.northing(), 5_547_176.552, abs <= 1e-3);

    // Zone 33 is the zone of Prague anyway
    let z = prague.utm33n();
    assert_eq!((z.x(), z.y()), (u.easting(), u.northing()));

    assert_eq!(prague.emep50x50(), EmepGrid50x50::new(70, 50));
    let g = wgs84_from_emep50x50(&EmepGrid50x50::new(70, 50));
    assert_float_eq!(g.latitude(), 50.105_857, abs <= 1e-6);
}

#[test]
fn parsing() -> Result<(), Error> {
    assert_eq!(
        parse("49.4593683, 18.3572658")?,
        Wgs84::new(49.459_368_3, 18.357_265_8)
    );
    assert_eq!(
        parse("49.4593683N, 18.3572658W")?,
        Wgs84::new(49.459_368_3, -18.357_265_8)
    );

    let p = parse("N 49°27.56210', E 18°21.43595'")?;
    assert_float_eq!(p.latitude(), 49.459_368, abs <= 1e-6);
    assert_float_eq!(p.longitude(), 18.357_266, abs <= 1e-6);

    let q: Wgs84 = r#"49°27'33.726"N, 18°21'26.157"E"#.parse()?;
    assert_float_eq!(q.latitude(), p.latitude(), abs <= 1e-6);
    assert_float_eq!(q.longitude(), p.longitude(), abs <= 1e-6);

    assert!(matches!(parse("somewhere"), Err(Error::ParseNoMatch(_))));
    assert_eq!(coordconv::GRAMMARS.len(), 4);

    let j: Jtsk5514 = "-820800,60; -1068738,00".parse()?;
    assert_float_eq!(j.wgs84().latitude(), 49.758_185, abs <= 1e-6);
    assert!(matches!("-820800,60".parse::<S42>(), Err(Error::BadNumber(_))));
    Ok(())
}

#[test]
fn distances() {
    let (lat1, lon1, lat2, lon2) = (50.0755, 14.4378, 49.1951, 16.6068);
    let d = distance(lat1, lon1, lat2, lon2);
    assert_float_eq!(d, 184_751.53, abs <= 0.1);

    let s = coordconv::distance_spherical(lat1, lon1, lat2, lon2);
    assert!((d - s).abs() < 900.);
    let h = coordconv::distance_haversine(lat1, lon1, lat2, lon2);
    assert!((d - h).abs() < 900.);

    let solution = coordconv::geodesic(lat1, lon1, lat2, lon2);
    assert!(solution.converged);
    assert_eq!(solution.distance, d);

    assert_eq!(distance(lat1, lon1, lat1, lon1), 0.);

    // Near-antipodal points: no convergence, but the last estimate is returned
    let solution = coordconv::geodesic(0., 0., 0.5, 179.7);
    assert!(!solution.converged);
    let d = distance(0., 0., 0.5, 179.7);
    assert!(d.is_finite());
    assert_eq!(d, solution.distance);
    assert_float_eq!(d, 19_923_974.6, abs <= 1.);
}

#[test]
fn utm_zones() {
    assert_eq!(coordconv::utm_zone_number(60.5, 6.), 32);
    assert_eq!(coordconv::utm_zone_number(0., -179.9), 1);
    assert_eq!(coordconv::utm_zone_number(0., 179.9), 60);
    assert_eq!(coordconv::utm_zone_letter(50.), 'U');
    assert_eq!(coordconv::utm_zone_letter(85.), 'Z');
    assert_eq!(Utm::zone_number_of(&Wgs84::new(78., 10.)), 33);
}

#[test]
fn emep_grid() {
    assert_eq!(coordconv::gridable(18.15), 18.15);
    assert!(EmepGrid01x01::new(18.15, 49.05).is_valid());
    assert!(!EmepGrid01x01::new(18.17, 49.05).is_valid());

    for p in czech_grid() {
        assert!(p.emep01x01().is_valid());
        let cell = EmepGrid01x01::from(p);
        assert!((cell.latitude() - p.latitude()).abs() <= 0.1);
        assert!((cell.longitude() - p.longitude()).abs() <= 0.1);
    }
}

#[test]
fn angles() {
    // A deterministic spread of samples over [-180, 180]
    let mut state: u64 = 42;
    for _ in 0..10_000 {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let d = (state >> 11) as f64 / (1_u64 << 53) as f64 * 360. - 180.;
        let a = Angle::from_decimal(d);
        assert!(a.minutes() < 60);
        assert!(a.seconds() < 60.);
        assert_float_eq!(a.to_decimal(), d, abs <= 1e-8);
    }
    assert_eq!(format_angle(None), "?° ?' ?\"");
}

#[test]
fn ellipsoids() -> Result<(), Error> {
    let bessel = Ellipsoid::named("bessel 1841")?;
    assert_eq!(bessel.semimajor_axis(), 6_377_397.);
    assert_eq!(
        Ellipsoid::named("Bessel 1842"),
        Err(Error::UnknownDatum(String::from("Bessel 1842")))
    );
    assert_eq!(Ellipsoid::default().name(), coordconv::DEFAULT_DATUM);
    Ok(())
}
