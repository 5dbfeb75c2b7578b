use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use qtty::{Days, Degrees, Hours};
use skyclock::{
    calendar_from_julian_date, day_offset_since_epoch_2010, gst_from_lst, gst_from_utc,
    horizon_from_equatorial, hour_angle_from_right_ascension, julian_date_from_calendar,
    lst_from_gst, Angle, Error, HoursMinutesSeconds, JulianDate, ModifiedJulianDate, Observer, MJD,
};

fn textbook_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 51).unwrap() + Duration::milliseconds(670)
}

#[test]
fn julian_date_known_value_and_roundtrip() {
    let instant = Utc.with_ymd_and_hms(2009, 6, 19, 18, 0, 0).unwrap();
    let jd = julian_date_from_calendar(&instant);
    assert!((jd.value() - 2_455_002.25).abs() < 1e-9);

    let back = calendar_from_julian_date(jd).expect("representable");
    assert!((back - instant).num_milliseconds().abs() <= 1);
}

#[test]
fn calendar_roundtrip_within_a_millisecond() {
    let mut instant = Utc.with_ymd_and_hms(1582, 10, 15, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2500, 1, 1, 0, 0, 0).unwrap();
    let step = Duration::milliseconds(1_234_567_890_123);
    while instant < end {
        let back = calendar_from_julian_date(julian_date_from_calendar(&instant)).unwrap();
        let delta = (back - instant).num_microseconds().unwrap();
        assert!(delta.abs() < 1_000, "{instant}: off by {delta} µs");
        instant += step;
    }
}

#[test]
fn local_time_is_normalised_before_conversion() {
    let cest = FixedOffset::east_opt(2 * 3600).unwrap();
    let local = cest.with_ymd_and_hms(2009, 6, 19, 20, 0, 0).unwrap();
    let jd = julian_date_from_calendar(&local);
    assert!((jd.value() - 2_455_002.25).abs() < 1e-9);

    let utc = calendar_from_julian_date(jd).unwrap();
    assert_eq!(utc, local.with_timezone(&Utc));
}

#[test]
fn epoch_offset_and_mjd_agree() {
    let instant = Utc.with_ymd_and_hms(2015, 3, 20, 9, 45, 0).unwrap();
    let offset = day_offset_since_epoch_2010(&instant);

    let mjd = ModifiedJulianDate::from_utc(&instant);
    let epoch_mjd = JulianDate::EPOCH_2010.to::<MJD>();
    assert!((offset - (mjd - epoch_mjd)).abs() < Days::new(1e-8));
}

#[test]
fn sidereal_textbook_chain() {
    let gst = gst_from_utc(&textbook_instant());
    assert!((gst.value() - 4.668_119).abs() < 1e-5);

    let hms = HoursMinutesSeconds::from_hours(gst);
    assert_eq!((hms.hours(), hms.minutes()), (4.0, 40.0));
    assert!((hms.seconds() - 5.23).abs() < 0.01);

    let lst = lst_from_gst(gst, Degrees::new(-64.0));
    assert!((lst.value() - 0.401_452).abs() < 1e-5);

    let back = gst_from_lst(lst, Degrees::new(-64.0));
    assert!((back.value() - gst.value()).abs() < 1e-9);
}

#[test]
fn horizon_textbook_chain() {
    let hour_angle = hour_angle_from_right_ascension(Hours::new(18.539_167), Hours::new(0.401_453));
    assert!((hour_angle.value() - 5.862_286).abs() < 1e-6);

    let horizon = horizon_from_equatorial(
        Hours::new(5.862_222),
        Degrees::new(23.219_444),
        Degrees::new(52.0),
    )
    .expect("well-defined geometry");
    assert!((horizon.altitude().degrees().value() - 19.334).abs() < 1e-3);
    assert!((horizon.azimuth().degrees().value() - 283.271).abs() < 1e-3);

    let rendered = horizon.to_string();
    assert!(rendered.starts_with("Altitude: 19° 20ʹ"), "{rendered}");
    assert!(rendered.contains("Azimuth: 283° 16ʹ"), "{rendered}");
}

#[test]
fn pole_observer_gets_domain_error() {
    for latitude in [90.0, -90.0] {
        let result =
            horizon_from_equatorial(Hours::new(2.5), Degrees::new(30.0), Degrees::new(latitude));
        assert!(
            matches!(result, Err(Error::UndefinedAzimuth { .. })),
            "latitude {latitude}: {result:?}"
        );
    }
}

#[test]
fn observer_pipeline_over_a_night() {
    let site = Observer::new(Degrees::new(52.0), Degrees::new(-64.0));
    let mut instant = textbook_instant();
    for _ in 0..48 {
        let lst = site.local_sidereal_time(&instant);
        assert!((0.0..24.0).contains(&lst.value()));

        let hour_angle = site.hour_angle(&instant, Hours::new(18.539_167));
        assert!((0.0..24.0).contains(&hour_angle.value()));

        let horizon = site
            .horizon_of(&instant, Hours::new(18.539_167), Degrees::new(23.219_444))
            .expect("mid-latitude site");
        let alt = horizon.altitude().degrees().value();
        let az = horizon.azimuth().degrees().value();
        assert!((-90.0..=90.0).contains(&alt));
        assert!((0.0..=360.0).contains(&az));

        instant += Duration::minutes(30);
    }
}

#[test]
fn angle_views_are_consistent() {
    let angle = Angle::from_hours(Hours::new(6.0));
    assert!((angle.degrees().value() - 90.0).abs() < 1e-12);
    assert!((angle.radians().value() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((angle.dms().to_degrees().value() - 90.0).abs() < 1e-9);
}

#[cfg(feature = "serde")]
#[test]
fn serde_observer_and_horizon() {
    let site = Observer::new(Degrees::new(52.0), Degrees::new(-64.0));
    let json = serde_json::to_string(&site).unwrap();
    let back: Observer = serde_json::from_str(&json).unwrap();
    assert_eq!(back, site);

    let horizon = horizon_from_equatorial(
        Hours::new(5.862_222),
        Degrees::new(23.219_444),
        Degrees::new(52.0),
    )
    .unwrap();
    let json = serde_json::to_string(&horizon).unwrap();
    assert!(json.contains("altitude"));
    assert!(json.contains("azimuth"));
    let back: skyclock::HorizonCoordinates = serde_json::from_str(&json).unwrap();
    assert_eq!(back, horizon);
}
