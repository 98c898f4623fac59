use std::f64::consts::{FRAC_PI_2, PI, TAU};

use chrono::{DateTime, Datelike, Offset, TimeZone, Timelike};

use crate::types::{GeoCoordinate, SolarPosition};

pub const MINUTES_PER_DAY: f64 = 1440.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub const AZIMUTH_DEGENERACY_EPSILON: f64 = 1e-12;

/// Smallest altitude returned: the float just above -π/2, so the nadir stays excluded.
pub const MIN_ALTITUDE: f64 = -FRAC_PI_2 + f64::EPSILON;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

// rem_euclid can round up to exactly 2π for tiny negative inputs.
pub fn normalize_radians(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

pub fn fractional_year(day_of_year: u32, hour: f64) -> f64 {
    TAU / 365.0 * (day_of_year as f64 - 1.0 + (hour - 12.0) / 24.0)
}

pub fn equation_of_time(gamma: f64) -> f64 {
    229.18
        * (0.000075 + 0.001868 * gamma.cos()
            - 0.032077 * gamma.sin()
            - 0.014615 * (2.0 * gamma).cos()
            - 0.040849 * (2.0 * gamma).sin())
}

pub fn solar_declination(gamma: f64) -> f64 {
    0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin()
}

pub fn true_solar_time(
    local_minutes: f64,
    equation_of_time: f64,
    longitude: f64,
    utc_offset_minutes: f64,
) -> f64 {
    let raw = local_minutes + equation_of_time + MINUTES_PER_DEGREE * longitude
        - utc_offset_minutes;
    let wrapped = raw.rem_euclid(MINUTES_PER_DAY);
    if wrapped >= MINUTES_PER_DAY {
        0.0
    } else {
        wrapped
    }
}

pub fn hour_angle(true_solar_time: f64) -> f64 {
    deg_to_rad(true_solar_time / MINUTES_PER_DEGREE - 180.0)
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let cos_zenith = latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * hour_angle.cos();
    cos_zenith.clamp(-1.0, 1.0).acos()
}

pub fn solar_altitude(zenith: f64) -> f64 {
    (FRAC_PI_2 - zenith).max(MIN_ALTITUDE)
}

/// Azimuth clockwise from true north in [0, 2π).
///
/// When the sun is at the zenith or the observer stands on a pole the bearing is undefined;
/// the result is then 0 (north) instead of a non-finite value.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64, altitude: f64) -> f64 {
    let cos_alt = altitude.cos();
    let cos_lat = latitude.cos();
    if cos_alt.abs() < AZIMUTH_DEGENERACY_EPSILON || cos_lat.abs() < AZIMUTH_DEGENERACY_EPSILON {
        log::trace!("azimuth undefined (cos alt {cos_alt:e}, cos lat {cos_lat:e}), using north");
        return 0.0;
    }
    let y = -hour_angle.sin() * declination.cos() / cos_alt;
    let x = (declination.sin() - altitude.sin() * latitude.sin()) / (cos_alt * cos_lat);
    let az = y.atan2(x);
    if !az.is_finite() {
        return 0.0;
    }
    normalize_radians(az)
}

pub fn solar_position<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    location: &GeoCoordinate,
) -> SolarPosition {
    let local = instant.naive_local();
    let utc_offset_minutes = instant.offset().fix().local_minus_utc() as f64 / 60.0;
    let local_minutes = local.hour() as f64 * 60.0
        + local.minute() as f64
        + (local.second() as f64 + local.nanosecond() as f64 / 1e9) / 60.0;
    let day_of_year = local.ordinal();

    let gamma = fractional_year(day_of_year, local_minutes / 60.0);
    let eot = equation_of_time(gamma);
    let decl = solar_declination(gamma);
    let tst = true_solar_time(local_minutes, eot, location.longitude, utc_offset_minutes);
    let ha = hour_angle(tst);

    let lat = deg_to_rad(location.latitude);
    let zenith = solar_zenith_angle(lat, decl, ha);
    let altitude = solar_altitude(zenith);
    let azimuth = solar_azimuth(lat, decl, ha, altitude);

    SolarPosition {
        day_of_year,
        fractional_year: gamma,
        equation_of_time: eot,
        declination: decl,
        utc_offset_minutes,
        true_solar_time: tst,
        hour_angle: ha,
        zenith,
        altitude,
        azimuth,
    }
}

pub fn compute_position<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    location: &GeoCoordinate,
) -> (f64, f64) {
    let pos = solar_position(instant, location);
    (pos.altitude, pos.azimuth)
}
