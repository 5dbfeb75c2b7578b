// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Equatorial → horizon coordinate transform.
//!
//! Hour angles and right ascensions are decimal [`Hours`]; declination,
//! latitude and the resulting altitude/azimuth are [`Degrees`].  Azimuth is
//! measured from north through east.
//!
//! # Degenerate geometry
//!
//! The azimuth formula divides by `cos(latitude)·cos(altitude)`.  At either
//! pole, or for an object at the zenith or nadir, that product vanishes and
//! azimuth has no meaning; [`horizon_from_equatorial`] reports
//! [`Error::UndefinedAzimuth`] instead of returning NaN.  Ratios that land a
//! hair outside `[-1, 1]` through rounding are clamped before `asin`/`acos`.
//!
//! ```
//! use qtty::{Degrees, Hours};
//! use skyclock::horizon_from_equatorial;
//!
//! let horizon = horizon_from_equatorial(
//!     Hours::new(5.862_222),
//!     Degrees::new(23.219_444),
//!     Degrees::new(52.0),
//! )
//! .unwrap();
//! assert!((horizon.altitude().degrees().value() - 19.334).abs() < 1e-3);
//! assert!((horizon.azimuth().degrees().value() - 283.271).abs() < 1e-3);
//! ```

use log::{debug, trace};
use qtty::{Degrees, Hours, Radian};
use std::fmt;

use crate::angle::Angle;
use crate::error::{Error, Result};
use crate::sidereal::normalize_hours;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// Below this `|cos(latitude)|` the observer is treated as standing on a pole.
const POLE_EPSILON: f64 = 1e-12;

/// Below this `cos(altitude)` the object is treated as at the zenith or nadir.
///
/// `asin` loses about half the available digits next to ±1, so a computed
/// altitude of exactly 90° typically comes back ~1.5e-8 rad short.
const ZENITH_EPSILON: f64 = 1e-7;

/// Altitude and azimuth of an object as seen by an observer.
///
/// Only [`horizon_from_equatorial`] builds these; deserialisation rejects
/// an altitude outside `[-90, 90]` or an azimuth outside `[0, 360]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HorizonCoordinates {
    altitude: Angle,
    azimuth: Angle,
}

impl HorizonCoordinates {
    #[inline]
    pub(crate) const fn new(altitude: Angle, azimuth: Angle) -> Self {
        Self { altitude, azimuth }
    }

    /// Angle above the horizon, in `[-90, 90]`.
    #[inline]
    pub const fn altitude(&self) -> Angle {
        self.altitude
    }

    /// Angle from north through east, in `[0, 360]`.
    #[inline]
    pub const fn azimuth(&self) -> Angle {
        self.azimuth
    }
}

impl fmt::Display for HorizonCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Altitude: {} | Azimuth: {}",
            self.altitude.dms(),
            self.azimuth.dms()
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HorizonCoordinates {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            altitude: Angle,
            azimuth: Angle,
        }

        let raw = Raw::deserialize(deserializer)?;
        if !(-90.0..=90.0).contains(&raw.altitude.degrees().value()) {
            return Err(serde::de::Error::custom("altitude outside [-90, 90]"));
        }
        if !(0.0..=360.0).contains(&raw.azimuth.degrees().value()) {
            return Err(serde::de::Error::custom("azimuth outside [0, 360]"));
        }
        Ok(Self::new(raw.altitude, raw.azimuth))
    }
}

/// Clamps a ratio into the domain of `asin`/`acos`.
#[inline]
fn clamp_unit(ratio: f64, what: &str) -> f64 {
    if (-1.0..=1.0).contains(&ratio) {
        return ratio;
    }
    trace!("clamping {what} ratio {ratio} into [-1, 1]");
    ratio.clamp(-1.0, 1.0)
}

/// Hour angle of an object with right ascension `right_ascension` at local
/// sidereal time `lst`, in `[0, 24)`.
pub fn hour_angle_from_right_ascension(right_ascension: Hours, lst: Hours) -> Hours {
    normalize_hours(lst.value() - right_ascension.value())
}

/// Altitude/azimuth of an object from its hour angle and declination, seen
/// from `latitude`.
pub fn horizon_from_equatorial(
    hour_angle: Hours,
    declination: Degrees,
    latitude: Degrees,
) -> Result<HorizonCoordinates> {
    if !(hour_angle.value().is_finite()
        && declination.value().is_finite()
        && latitude.value().is_finite())
    {
        debug!(
            "horizon_from_equatorial: non-finite input H={} dec={} lat={}",
            hour_angle.value(),
            declination.value(),
            latitude.value()
        );
        return Err(Error::NonFinite {
            operation: "horizon_from_equatorial",
        });
    }

    let h = Angle::from_hours(hour_angle).radians().value();
    let dec = declination.to::<Radian>().value();
    let lat = latitude.to::<Radian>().value();

    let (sin_h, cos_h) = h.sin_cos();
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let sin_alt = clamp_unit(sin_dec * sin_lat + cos_dec * cos_lat * cos_h, "altitude");
    let alt = sin_alt.asin();
    let cos_alt = alt.cos();
    let altitude = Angle::from_radians(alt);

    if cos_lat.abs() < POLE_EPSILON || cos_alt < ZENITH_EPSILON {
        debug!("horizon_from_equatorial: azimuth undefined (cos lat={cos_lat}, cos alt={cos_alt})");
        return Err(Error::UndefinedAzimuth {
            latitude: latitude.value(),
            altitude: altitude.degrees().value(),
        });
    }

    let cos_az = clamp_unit(
        (sin_dec - sin_lat * sin_alt) / (cos_lat * cos_alt),
        "azimuth",
    );
    let az = Angle::from_radians(cos_az.acos()).degrees().value();
    // acos only covers [0°, 180°]; west of the meridian the object is in the
    // western half of the sky.
    let azimuth = if sin_h >= 0.0 { 360.0 - az } else { az };

    trace!(
        "horizon_from_equatorial: H={}h dec={}° lat={}° -> alt={}° az={azimuth}°",
        hour_angle.value(),
        declination.value(),
        latitude.value(),
        altitude.degrees().value()
    );

    let azimuth = Angle::from_degrees(azimuth);
    Ok(HorizonCoordinates::new(altitude, azimuth))
}
