// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized marker says how a [`Time`](super::Time) value relates to
//! the absolute **Julian Date on the UTC axis**.  Both markers are plain
//! epoch counters; no dynamical (TT/TDB) corrections are involved.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 |

use super::instant::{Time, TimeScale};
use qtty::Days;

/// Julian Date, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "JD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Modified Julian Date, JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

/// `JD = MJD + MJD_EPOCH`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

impl From<Time<JD>> for Time<MJD> {
    #[inline]
    fn from(t: Time<JD>) -> Self {
        t.to::<MJD>()
    }
}

impl From<Time<MJD>> for Time<JD> {
    #[inline]
    fn from(t: Time<MJD>) -> Self {
        t.to::<JD>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_mjd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let mjd: Time<MJD> = jd.to::<MJD>();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = mjd.to::<JD>();
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn jd_mjd_from_into() {
        let jd = Time::<JD>::new(2_455_197.5);
        let mjd: Time<MJD> = jd.into();
        assert!((mjd.value() - 55_197.0).abs() < 1e-10);
        let back = Time::<JD>::from(mjd);
        assert!((back.value() - 2_455_197.5).abs() < 1e-10);
    }
}
