// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the calendar and coordinate conversions.
//!
//! Only inputs that leave the mathematical domain of a transform are
//! reported.  Ratios that drift marginally outside `[-1, 1]` before an
//! inverse trigonometric call are clamped silently and never surface here.

use thiserror::Error;

/// Failure modes of the conversions in this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// `cos(latitude)·cos(altitude)` vanishes, so azimuth has no defined value.
    ///
    /// Happens for an observer at either pole, or for an object exactly at
    /// the zenith or nadir.
    #[error("azimuth undefined at latitude {latitude}° for altitude {altitude}°")]
    UndefinedAzimuth { latitude: f64, altitude: f64 },

    /// NaN or infinite input reached a transform.
    #[error("non-finite input passed to {operation}")]
    NonFinite { operation: &'static str },

    /// The Julian Date falls outside what `chrono::DateTime<Utc>` can hold.
    #[error("Julian Date {julian_date} has no representable UTC calendar instant")]
    UnrepresentableDate { julian_date: f64 },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
