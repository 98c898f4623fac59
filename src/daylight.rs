use chrono::{Datelike, NaiveDate};

use crate::angles::{
    deg_to_rad, equation_of_time, fractional_year, rad_to_deg, solar_declination,
    MINUTES_PER_DEGREE,
};
use crate::types::{DaylightWindow, GeoCoordinate};

pub const SUNRISE_ZENITH_DEGREES: f64 = 90.833;

/// Times are local clock minutes and can fall below 0 or past 1440 when the event belongs to
/// the neighbouring local day.
pub fn estimate_daylight(
    date: NaiveDate,
    location: &GeoCoordinate,
    utc_offset_minutes: f64,
) -> DaylightWindow {
    let gamma = fractional_year(date.ordinal(), 12.0);
    let decl = solar_declination(gamma);
    let eot = equation_of_time(gamma);
    let lat = deg_to_rad(location.latitude);

    let cos_h = deg_to_rad(SUNRISE_ZENITH_DEGREES).cos() / (lat.cos() * decl.cos())
        - lat.tan() * decl.tan();

    if cos_h >= 1.0 {
        DaylightWindow::PolarNight
    } else if cos_h <= -1.0 {
        DaylightWindow::PolarDay
    } else {
        let h_deg = rad_to_deg(cos_h.acos());
        let solar_noon =
            720.0 - MINUTES_PER_DEGREE * location.longitude - eot + utc_offset_minutes;
        let half_day_minutes = MINUTES_PER_DEGREE * h_deg;
        DaylightWindow::Span {
            sunrise_minutes: solar_noon - half_day_minutes,
            sunset_minutes: solar_noon + half_day_minutes,
        }
    }
}
