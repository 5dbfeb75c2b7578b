// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observing site.
//!
//! [`Observer`] bundles the latitude and east-positive longitude that the
//! sidereal and horizon conversions need, and chains them into the usual
//! "where is this object right now" pipeline:
//!
//! ```text
//! instant → GST → LST → hour angle → altitude/azimuth
//! ```

use chrono::{DateTime, TimeZone};
use qtty::{Degrees, Hours};

use crate::error::Result;
use crate::horizon::{horizon_from_equatorial, hour_angle_from_right_ascension, HorizonCoordinates};
use crate::sidereal::{gst_from_utc, lst_from_gst};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// A site on Earth, with east-positive longitude.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Observer {
    latitude: Degrees,
    longitude: Degrees,
}

impl Observer {
    /// The Royal Observatory, Greenwich.
    pub const GREENWICH: Self = Self::new(Degrees::new(51.477_8), Degrees::new(0.0));

    /// A site at `latitude` (north-positive) and `longitude` (east-positive).
    ///
    /// Values are not range-checked.
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Geodetic latitude, north-positive.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, east-positive (west of Greenwich is negative).
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// Local sidereal time at this site.
    pub fn local_sidereal_time<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Hours {
        lst_from_gst(gst_from_utc(instant), self.longitude)
    }

    /// Hour angle of an object with the given right ascension.
    pub fn hour_angle<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        right_ascension: Hours,
    ) -> Hours {
        hour_angle_from_right_ascension(right_ascension, self.local_sidereal_time(instant))
    }

    /// Altitude/azimuth of an object at `instant`.
    pub fn horizon_of<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
        right_ascension: Hours,
        declination: Degrees,
    ) -> Result<HorizonCoordinates> {
        let hour_angle = self.hour_angle(instant, right_ascension);
        horizon_from_equatorial(hour_angle, declination, self.latitude)
    }
}

// Field names carry the unit: `{"latitude_deg": .., "longitude_deg": ..}`.
#[cfg(feature = "serde")]
impl Serialize for Observer {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Observer", 2)?;
        s.serialize_field("latitude_deg", &self.latitude.value())?;
        s.serialize_field("longitude_deg", &self.longitude.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Observer {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude_deg: f64,
            longitude_deg: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Observer::new(
            Degrees::new(raw.latitude_deg),
            Degrees::new(raw.longitude_deg),
        ))
    }
}
