// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar ⇄ Julian Date conversion.
//!
//! Implements the day-number algorithms of Meeus, *Astronomical Algorithms*
//! (2nd ed. 1998) ch. 7, on top of `chrono` calendar types.
//!
//! Every input instant is first normalised to UTC, whatever its time zone.
//! Outputs are `chrono::DateTime<Utc>` values, which are proleptic Gregorian,
//! so [`calendar_from_julian_date`] applies the Gregorian correction to every
//! day number and round-trips [`julian_date_from_calendar`] across the 1582
//! reform.  Historical civil fields (Julian calendar before 1582-10-15) are
//! available through [`CalendarDate`].
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use skyclock::{calendar_from_julian_date, julian_date_from_calendar};
//!
//! let instant = Utc.with_ymd_and_hms(2009, 6, 19, 18, 0, 0).unwrap();
//! let jd = julian_date_from_calendar(&instant);
//! assert!((jd.value() - 2_455_002.25).abs() < 1e-9);
//!
//! let back = calendar_from_julian_date(jd).unwrap();
//! assert!((back - instant).num_milliseconds().abs() <= 1);
//! ```

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use qtty::Days;
use std::fmt;

use crate::error::{Error, Result};
use crate::JulianDate;

const SECONDS_PER_DAY: f64 = 86_400.0;
const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Unix timestamp of 2010-01-01T00:00:00Z.
const EPOCH_2010_UNIX_SECONDS: i64 = 1_262_304_000;

/// Fraction of the UTC day elapsed at `utc`, in days.
#[inline]
pub(crate) fn day_fraction(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.num_seconds_from_midnight() as f64 + utc.nanosecond() as f64 / 1e9;
    seconds / SECONDS_PER_DAY
}

/// Julian Date of a calendar instant.
///
/// January and February count as months 13 and 14 of the previous year.
/// Any finite calendar date maps to a finite Julian Date.
pub fn julian_date_from_calendar<Tz: TimeZone>(instant: &DateTime<Tz>) -> JulianDate {
    let utc = instant.with_timezone(&Utc);

    let mut year = utc.year() as f64;
    let mut month = utc.month() as f64;
    let day = utc.day() as f64 + day_fraction(&utc);

    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }

    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    let c = (365.25 * year).floor();
    let e = (30.6001 * (month + 1.0)).floor();

    JulianDate::new(b + c + e + day + 1_720_994.5)
}

/// Which day numbers get the Gregorian correction.
#[derive(Debug, Copy, Clone, PartialEq)]
enum Reform {
    /// Every day number (proleptic Gregorian).
    Proleptic,
    /// Only day numbers after 1582-10-04 (historical civil calendar).
    Historical,
}

/// `(year, month, day-with-fraction)` of a Julian Date.
fn civil_fields(jd: f64, reform: Reform) -> (f64, f64, f64) {
    let t = jd + 0.5;
    let i = t.floor();
    let f = t - i;

    let b = if reform == Reform::Proleptic || i > JulianDate::GREGORIAN_REFORM_DAY {
        let a = ((i - 1_867_216.25) / 36_524.25).floor();
        i + a - (a / 4.0).floor() + 1.0
    } else {
        i
    };

    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).floor();
    let e = (365.25 * d).floor();
    let g = ((c - e) / 30.6001).floor();

    let day = c - e + f - (30.6001 * g).floor();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    (year, month, day)
}

/// Proleptic Gregorian instant of a finite Julian Date, to the nearest
/// microsecond, or `None` outside chrono's range.
fn civil_instant(julian_date: f64) -> Option<DateTime<Utc>> {
    let (year, month, day) = civil_fields(julian_date, Reform::Proleptic);
    if year < i32::MIN as f64 || year > i32::MAX as f64 {
        return None;
    }

    let first = NaiveDate::from_ymd_opt(year as i32, month as u32, 1)?;
    let offset = Duration::microseconds(((day - 1.0) * MICROS_PER_DAY).round() as i64);
    let naive = first.and_time(NaiveTime::MIN).checked_add_signed(offset)?;
    Some(naive.and_utc())
}

/// UTC calendar instant of a Julian Date.
///
/// The computed day-of-month (with fraction) is added as an offset to the
/// first of the computed month, so the result rolls across month and year
/// boundaries on its own.  A Julian Date no later than that of chrono's last
/// instant (and no earlier than that of its first) always converts; at those
/// limits the result saturates to `DateTime::<Utc>::MAX_UTC` / `MIN_UTC`.
/// Fails only for non-finite input or dates outside chrono's range.
pub fn calendar_from_julian_date(jd: JulianDate) -> Result<DateTime<Utc>> {
    let julian_date = jd.value();
    let unrepresentable = Error::UnrepresentableDate { julian_date };
    if !julian_date.is_finite() {
        return Err(unrepresentable);
    }
    if let Some(instant) = civil_instant(julian_date) {
        return Ok(instant);
    }

    // An f64 Julian Date this far out only resolves about a millisecond, so
    // the rebuilt instant can round past chrono's first or last one.
    let earliest = julian_date_from_calendar(&DateTime::<Utc>::MIN_UTC).value();
    let latest = julian_date_from_calendar(&DateTime::<Utc>::MAX_UTC).value();
    if !(earliest..=latest).contains(&julian_date) {
        return Err(unrepresentable);
    }
    if julian_date < 0.0 {
        Ok(DateTime::<Utc>::MIN_UTC)
    } else {
        Ok(DateTime::<Utc>::MAX_UTC)
    }
}

/// Signed days elapsed since 2010-01-01T00:00:00 UTC.
pub fn day_offset_since_epoch_2010<Tz: TimeZone>(instant: &DateTime<Tz>) -> Days {
    let utc = instant.with_timezone(&Utc);
    let seconds = (utc.timestamp() - EPOCH_2010_UNIX_SECONDS) as f64
        + utc.timestamp_subsec_nanos() as f64 / 1e9;
    Days::new(seconds / SECONDS_PER_DAY)
}

// ═══════════════════════════════════════════════════════════════════════════
// Historical civil calendar
// ═══════════════════════════════════════════════════════════════════════════

/// Civil calendar fields of a Julian Date, as dated at the time.
///
/// Day numbers up to 1582-10-04 are expressed in the Julian calendar, later
/// ones in the Gregorian calendar, so JD 2 299 160.5 follows 1582-10-04 as
/// 1582-10-15.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: f64,
}

impl CalendarDate {
    /// Civil calendar fields of `jd`.
    pub fn from_julian_date(jd: JulianDate) -> Result<Self> {
        let julian_date = jd.value();
        if !julian_date.is_finite() {
            return Err(Error::UnrepresentableDate { julian_date });
        }
        let (year, month, day) = civil_fields(julian_date, Reform::Historical);
        if year < i32::MIN as f64 || year > i32::MAX as f64 {
            return Err(Error::UnrepresentableDate { julian_date });
        }
        Ok(Self {
            year: year as i32,
            month: month as u32,
            day,
        })
    }

    /// Astronomical year (year 0 is 1 BC).
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month in `1..=12`.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, with the time of day as a fraction.
    #[inline]
    pub const fn day(&self) -> f64 {
        self.day
    }

    /// Whether these fields are in the Julian (pre-reform) calendar.
    pub fn is_julian_calendar(&self) -> bool {
        (self.year, self.month, self.day) < (1582, 10, 15.0)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(5);
        write!(
            f,
            "{:04}-{:02}-{:0width$.prec$}",
            self.year,
            self.month,
            self.day,
            width = precision + 3,
            prec = precision
        )
    }
}
