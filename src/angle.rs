// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle value types.
//!
//! [`Angle`] stores a single [`Degrees`] quantity and derives every other
//! view from it: [`Radians`], decimal [`Hours`] (15° per hour) and the
//! sexagesimal [`DegreesMinutesSeconds`] triple.  No range wrapping is ever
//! applied implicitly; an angle of 400° stays 400° until the caller asks for
//! [`Angle::normalized`].
//!
//! The sexagesimal triples ([`DegreesMinutesSeconds`], [`HoursMinutesSeconds`])
//! cannot be assembled from loose components.  They only come out of a
//! decomposition of a decimal value, so they always describe some real angle
//! or hour count.
//!
//! ```
//! use skyclock::Angle;
//!
//! let altitude = Angle::from_degrees(19.334_345);
//! let dms = altitude.dms();
//! assert_eq!(dms.degrees(), 19.0);
//! assert_eq!(dms.minutes(), 20.0);
//! assert!((dms.seconds() - 3.642).abs() < 1e-3);
//! ```

use qtty::{Degree, Degrees, Hours, Radian, Radians};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Degrees spanned by one hour of right ascension or hour angle.
pub(crate) const DEGREES_PER_HOUR: f64 = 15.0;

/// Splits a decimal value into `(whole, minutes, seconds)`.
///
/// Whole units and minutes are floored, seconds keep the remaining fraction.
/// Flooring (rather than truncating) keeps `whole + min/60 + sec/3600` equal to
/// the input for negative values too.
#[inline]
fn sexagesimal(value: f64) -> (f64, f64, f64) {
    let whole = value.floor();
    let rem = (value - whole) * 60.0;
    let minutes = rem.floor();
    let seconds = (rem - minutes) * 60.0;
    (whole, minutes, seconds)
}

// ═══════════════════════════════════════════════════════════════════════════
// Angle
// ═══════════════════════════════════════════════════════════════════════════

/// An immutable rotational quantity, canonically held in decimal degrees.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Angle {
    degrees: Degrees,
}

impl Angle {
    /// Build from decimal degrees.
    #[inline]
    pub const fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: Degrees::new(degrees),
        }
    }

    /// Build from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self {
            degrees: Radians::new(radians).to::<Degree>(),
        }
    }

    /// Build from decimal hours, at 15° per hour.
    #[inline]
    pub fn from_hours(hours: Hours) -> Self {
        Self::from_degrees(hours.value() * DEGREES_PER_HOUR)
    }

    /// The canonical value.
    #[inline]
    pub const fn degrees(&self) -> Degrees {
        self.degrees
    }

    /// Radian view of the canonical value.
    #[inline]
    pub fn radians(&self) -> Radians {
        self.degrees.to::<Radian>()
    }

    /// Decimal-hour view of the canonical value.
    #[inline]
    pub fn hours(&self) -> Hours {
        Hours::new(self.degrees.value() / DEGREES_PER_HOUR)
    }

    /// Degrees/minutes/seconds decomposition of the canonical value.
    #[inline]
    pub fn dms(&self) -> DegreesMinutesSeconds {
        let (degrees, minutes, seconds) = sexagesimal(self.degrees.value());
        DegreesMinutesSeconds {
            degrees,
            minutes,
            seconds,
        }
    }

    /// A copy wrapped into `[0, 360)`.
    pub fn normalized(&self) -> Self {
        let wrapped = self.degrees.value().rem_euclid(360.0);
        // rem_euclid may round up to exactly the modulus for tiny negatives.
        Self::from_degrees(if wrapped >= 360.0 { 0.0 } else { wrapped })
    }
}

impl From<Degrees> for Angle {
    #[inline]
    fn from(degrees: Degrees) -> Self {
        Self { degrees }
    }
}

impl From<Radians> for Angle {
    #[inline]
    fn from(radians: Radians) -> Self {
        Self {
            degrees: radians.to::<Degree>(),
        }
    }
}

impl From<Angle> for Degrees {
    #[inline]
    fn from(angle: Angle) -> Self {
        angle.degrees
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        write!(f, "{:.*}°", precision, self.degrees.value())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Angle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.degrees.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::from_degrees(v))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sexagesimal triples
// ═══════════════════════════════════════════════════════════════════════════

/// Degrees, arcminutes and arcseconds of an [`Angle`].
///
/// Obtained from [`Angle::dms`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DegreesMinutesSeconds {
    degrees: f64,
    minutes: f64,
    seconds: f64,
}

impl DegreesMinutesSeconds {
    /// Whole (floored) degrees; negative for negative angles.
    #[inline]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Whole arcminutes in `[0, 60)`.
    #[inline]
    pub const fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Arcseconds in `[0, 60)`, fractional part preserved.
    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Recomposes the decimal value this triple was decomposed from.
    #[inline]
    pub fn to_degrees(&self) -> Degrees {
        Degrees::new(self.degrees + self.minutes / 60.0 + self.seconds / 3600.0)
    }
}

impl fmt::Display for DegreesMinutesSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{}° {}ʹ {:.*}ʺ",
            self.degrees, self.minutes, precision, self.seconds
        )
    }
}

/// Hours, minutes and seconds of a decimal hour count.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HoursMinutesSeconds {
    hours: f64,
    minutes: f64,
    seconds: f64,
}

impl HoursMinutesSeconds {
    /// Decomposes decimal hours into whole hours, minutes and seconds.
    ///
    /// ```
    /// use qtty::Hours;
    /// use skyclock::HoursMinutesSeconds;
    ///
    /// let hms = HoursMinutesSeconds::from_hours(Hours::new(4.668_119));
    /// assert_eq!(hms.hours(), 4.0);
    /// assert_eq!(hms.minutes(), 40.0);
    /// assert!((hms.seconds() - 5.228).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn from_hours(hours: Hours) -> Self {
        let (hours, minutes, seconds) = sexagesimal(hours.value());
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Whole (floored) hours.
    #[inline]
    pub const fn hours(&self) -> f64 {
        self.hours
    }

    /// Whole minutes in `[0, 60)`.
    #[inline]
    pub const fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Seconds in `[0, 60)`, fractional part preserved.
    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Recomposes the decimal hour count.
    #[inline]
    pub fn to_hours(&self) -> Hours {
        Hours::new(self.hours + self.minutes / 60.0 + self.seconds / 3600.0)
    }
}

impl From<Hours> for HoursMinutesSeconds {
    #[inline]
    fn from(hours: Hours) -> Self {
        Self::from_hours(hours)
    }
}

impl fmt::Display for HoursMinutesSeconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{}h {}m {:.*}s",
            self.hours, self.minutes, precision, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn radians_view_matches_degrees() {
        let a = Angle::from_degrees(180.0);
        assert!((a.radians().value() - PI).abs() < 1e-12);

        let b = Angle::from_radians(PI / 2.0);
        assert!((b.degrees().value() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn hours_view_uses_fifteen_degrees_per_hour() {
        let a = Angle::from_hours(Hours::new(5.862_222));
        assert!((a.degrees().value() - 87.933_33).abs() < 1e-9);
        assert!((a.hours().value() - 5.862_222).abs() < 1e-12);
    }

    #[test]
    fn no_implicit_normalization() {
        let a = Angle::from_degrees(400.0);
        assert_eq!(a.degrees().value(), 400.0);
        assert_ne!(a, Angle::from_degrees(40.0));
        assert!((a.normalized().degrees().value() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn normalized_range() {
        for v in [-720.0, -360.0, -1e-17, 0.0, 359.999_999, 360.0, 1234.5] {
            let n = Angle::from_degrees(v).normalized().degrees().value();
            assert!((0.0..360.0).contains(&n), "{v} -> {n}");
        }
    }

    #[test]
    fn dms_decomposition() {
        let dms = Angle::from_degrees(283.271_027).dms();
        assert_eq!(dms.degrees(), 283.0);
        assert_eq!(dms.minutes(), 16.0);
        assert!((dms.seconds() - 15.697_2).abs() < 1e-3);
    }

    #[test]
    fn dms_of_negative_angle_floors() {
        let dms = Angle::from_degrees(-10.5).dms();
        assert_eq!(dms.degrees(), -11.0);
        assert_eq!(dms.minutes(), 30.0);
        assert!(dms.seconds().abs() < 1e-9);
        assert!((dms.to_degrees().value() + 10.5).abs() < 1e-12);
    }

    #[test]
    fn dms_recomposes_to_source_value() {
        for v in [0.0, 1.0 / 3.0, 23.219_444, 52.0, 359.999, -64.25, 400.1] {
            let back = Angle::from_degrees(v).dms().to_degrees().value();
            assert!((back - v).abs() < 1e-9, "{v} -> {back}");
        }
    }

    #[test]
    fn hms_decomposition() {
        let hms = HoursMinutesSeconds::from_hours(Hours::new(14.614_352_777_8));
        assert_eq!(hms.hours(), 14.0);
        assert_eq!(hms.minutes(), 36.0);
        assert!((hms.seconds() - 51.67).abs() < 1e-3);
        assert!((hms.to_hours().value() - 14.614_352_777_8).abs() < 1e-12);
    }

    #[test]
    fn display_formats() {
        let dms = Angle::from_degrees(19.5).dms();
        assert_eq!(format!("{dms}"), "19° 30ʹ 0.00ʺ");
        assert_eq!(format!("{dms:.0}"), "19° 30ʹ 0ʺ");

        let hms = HoursMinutesSeconds::from(Hours::new(0.75));
        assert_eq!(format!("{hms}"), "0h 45m 0.00s");

        let angle = Angle::from_degrees(45.123_456_789);
        assert_eq!(format!("{angle}"), "45.123457°");
    }

    #[test]
    fn from_into_degrees() {
        let a: Angle = Degrees::new(12.5).into();
        let d: Degrees = a.into();
        assert_eq!(d.value(), 12.5);

        let r: Angle = Radians::new(PI).into();
        assert!((r.degrees().value() - 180.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_decimal_degrees() {
        let a = Angle::from_degrees(23.25);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "23.25");
        let back: Angle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
