// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Greenwich and local sidereal time.
//!
//! Sidereal times are [`Hours`] in `[0, 24)`.  The Greenwich value follows
//! the low-precision expression of Duffett-Smith, *Practical Astronomy with
//! your Calculator* §12: the sidereal time at 0h UT from the Julian century
//! count, plus the elapsed UT scaled by the sidereal/solar rate ratio.
//! Longitudes are east-positive.
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use qtty::Degrees;
//! use skyclock::{gst_from_lst, gst_from_utc, lst_from_gst};
//!
//! let instant = Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 51).unwrap()
//!     + Duration::milliseconds(670);
//! let gst = gst_from_utc(&instant);
//! assert!((gst.value() - 4.668_119).abs() < 1e-5);
//!
//! let lst = lst_from_gst(gst, Degrees::new(-64.0));
//! let back = gst_from_lst(lst, Degrees::new(-64.0));
//! assert!((back.value() - gst.value()).abs() < 1e-9);
//! ```

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use log::trace;
use qtty::{Degrees, Hours};

use crate::angle::DEGREES_PER_HOUR;
use crate::calendar::{day_fraction, julian_date_from_calendar};

/// Hours in one sidereal (or solar) day cycle.
const HOURS_PER_DAY: f64 = 24.0;

/// Greenwich sidereal time at 0h UT on J2000.0, in hours.
const GST_AT_J2000_HOURS: f64 = 6.697_374_558;

/// Sidereal hours gained per Julian century at 0h UT.
const GST_HOURS_PER_CENTURY: f64 = 2_400.051_336;

/// Sidereal hours elapsed per solar hour.
const SIDEREAL_RATE: f64 = 1.002_737_909;

/// Wraps a decimal hour count into `[0, 24)`.
#[inline]
pub(crate) fn normalize_hours(hours: f64) -> Hours {
    let wrapped = hours - HOURS_PER_DAY * (hours / HOURS_PER_DAY).floor();
    // A tiny negative input rounds up to exactly 24.0 above.
    if wrapped >= HOURS_PER_DAY {
        Hours::new(0.0)
    } else {
        Hours::new(wrapped)
    }
}

/// Greenwich Sidereal Time of an instant, normalised to UTC first.
pub fn gst_from_utc<Tz: TimeZone>(instant: &DateTime<Tz>) -> Hours {
    let utc = instant.with_timezone(&Utc);
    let midnight = utc.date_naive().and_time(NaiveTime::MIN).and_utc();

    let jd0 = julian_date_from_calendar(&midnight);
    let centuries = jd0.julian_centuries().value();
    let t0 = normalize_hours(GST_AT_J2000_HOURS + GST_HOURS_PER_CENTURY * centuries);

    let ut_hours = day_fraction(&utc) * HOURS_PER_DAY;
    let gst = normalize_hours(t0.value() + ut_hours * SIDEREAL_RATE);

    trace!(
        "gst_from_utc: jd0={} T={centuries} T0={}h UT={ut_hours}h -> {}h",
        jd0.value(),
        t0.value(),
        gst.value()
    );
    gst
}

/// Local Sidereal Time from Greenwich Sidereal Time at an east-positive longitude.
pub fn lst_from_gst(gst: Hours, longitude: Degrees) -> Hours {
    normalize_hours(gst.value() + longitude.value() / DEGREES_PER_HOUR)
}

/// Greenwich Sidereal Time from Local Sidereal Time at an east-positive longitude.
pub fn gst_from_lst(lst: Hours, longitude: Degrees) -> Hours {
    normalize_hours(lst.value() - longitude.value() / DEGREES_PER_HOUR)
}
