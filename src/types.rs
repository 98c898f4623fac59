use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use crate::error::{Result, SamplingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_STEP_MINUTES: f64 = 15.0;
pub const DEFAULT_DURATION_MINUTES: f64 = 1440.0;
pub const MAX_SAMPLES: usize = 1_000_000;

/// Slack on `duration / step` before flooring, so e.g. 0.3 / 0.1 still counts as 3 steps.
pub const STEP_RATIO_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn clamped(self) -> Self {
        Self {
            latitude: self.latitude.clamp(-90.0, 90.0),
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: u32,
    pub fractional_year: f64,
    pub equation_of_time: f64,
    pub declination: f64,
    pub utc_offset_minutes: f64,
    pub true_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunSample {
    pub instant: DateTime<FixedOffset>,
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingRequest {
    pub start: DateTime<Utc>,
    pub duration_minutes: f64,
    pub step_minutes: f64,
    pub location: GeoCoordinate,
}

impl SamplingRequest {
    pub fn new<Tz: TimeZone>(start: &DateTime<Tz>, location: GeoCoordinate) -> Self {
        Self {
            start: start.with_timezone(&Utc),
            duration_minutes: DEFAULT_DURATION_MINUTES,
            step_minutes: DEFAULT_STEP_MINUTES,
            location,
        }
    }

    pub fn with_duration_minutes(mut self, duration_minutes: f64) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    pub fn with_step_minutes(mut self, step_minutes: f64) -> Self {
        self.step_minutes = step_minutes;
        self
    }

    /// `floor(duration / step) + 1`, before any horizon filtering.
    pub fn sample_count(&self) -> Result<usize> {
        let step = self.step_minutes;
        if !(step.is_finite() && step > 0.0) {
            return Err(SamplingError::InvalidStep(step));
        }
        let duration = self.duration_minutes;
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(SamplingError::InvalidDuration(duration));
        }
        let steps = (duration / step + STEP_RATIO_EPSILON).floor();
        if steps >= MAX_SAMPLES as f64 {
            return Err(SamplingError::TooManySamples {
                requested: steps + 1.0,
                limit: MAX_SAMPLES,
            });
        }
        Ok(steps as usize + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DaylightWindow {
    PolarNight,
    PolarDay,
    Span {
        sunrise_minutes: f64,
        sunset_minutes: f64,
    },
}

impl DaylightWindow {
    pub fn duration_minutes(&self) -> f64 {
        match *self {
            DaylightWindow::PolarNight => 0.0,
            DaylightWindow::PolarDay => 1440.0,
            DaylightWindow::Span {
                sunrise_minutes,
                sunset_minutes,
            } => sunset_minutes - sunrise_minutes,
        }
    }
}
