// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Positional astronomy primitives.
//!
//! This crate turns a UTC instant into a Julian Date or a sidereal time, and
//! equatorial coordinates (right ascension / declination) into what an
//! observer sees (altitude / azimuth).
//!
//! # Core types
//!
//! - [`Time<S>`] — instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] / [`ModifiedJulianDate`] — aliases for `Time<JD>` / `Time<MJD>`.
//! - [`Angle`] — decimal-degree angle with radian, hour and
//!   [`DegreesMinutesSeconds`] views.
//! - [`HoursMinutesSeconds`] — sexagesimal decomposition of decimal hours.
//! - [`HorizonCoordinates`] — altitude/azimuth pair.
//! - [`Observer`] — observing site (latitude, east-positive longitude).
//!
//! # Conversions
//!
//! | Function | From | To |
//! |----------|------|----|
//! | [`julian_date_from_calendar`] | calendar instant | [`JulianDate`] |
//! | [`calendar_from_julian_date`] | [`JulianDate`] | `DateTime<Utc>` |
//! | [`day_offset_since_epoch_2010`] | calendar instant | days since 2010-01-01 |
//! | [`gst_from_utc`] | calendar instant | Greenwich sidereal time |
//! | [`lst_from_gst`] / [`gst_from_lst`] | sidereal time + longitude | sidereal time |
//! | [`hour_angle_from_right_ascension`] | RA + LST | hour angle |
//! | [`horizon_from_equatorial`] | hour angle + dec + latitude | [`HorizonCoordinates`] |
//!
//! Calendar instants may carry any `chrono` time zone; they are normalised
//! to UTC before any computation.  Sidereal times and hour angles are
//! returned in `[0, 24)` hours.  Nothing else is wrapped implicitly.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use qtty::{Degrees, Hours};
//! use skyclock::Observer;
//!
//! let site = Observer::new(Degrees::new(52.0), Degrees::new(-64.0));
//! let instant = Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 52).unwrap();
//! let horizon = site
//!     .horizon_of(&instant, Hours::new(18.539_167), Degrees::new(23.219_444))
//!     .unwrap();
//! println!("{horizon}");
//! ```

mod angle;
mod calendar;
mod error;
mod horizon;
pub(crate) mod instant;
mod julian_date_ext;
mod observer;
pub(crate) mod scales;
mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{Angle, DegreesMinutesSeconds, HoursMinutesSeconds};
pub use calendar::{
    calendar_from_julian_date, day_offset_since_epoch_2010, julian_date_from_calendar, CalendarDate,
};
pub use error::{Error, Result};
pub use horizon::{horizon_from_equatorial, hour_angle_from_right_ascension, HorizonCoordinates};
pub use instant::{Time, TimeScale};
pub use observer::Observer;
pub use scales::{JD, MJD};
pub use sidereal::{gst_from_lst, gst_from_utc, lst_from_gst};

/// Julian Date, a continuous count of days on the UTC axis.
///
/// Type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date, `JD − 2 400 000.5`.
///
/// Type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
