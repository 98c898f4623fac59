//! Solar position and daily sun path sampling.
//!
//! [`compute_position`] gives the sun's altitude and azimuth for one zone-aware instant and
//! location. [`sample_path`] walks a time window at a fixed step and returns the samples where
//! the sun is above the horizon, ready for a renderer to place in its own space.

pub mod angles;
pub mod daylight;
pub mod error;
pub mod offsets;
pub mod sampler;
pub mod types;

pub use angles::{
    compute_position, deg_to_rad, equation_of_time, fractional_year, hour_angle,
    normalize_radians, rad_to_deg, solar_altitude, solar_azimuth, solar_declination,
    solar_position, solar_zenith_angle, true_solar_time, AZIMUTH_DEGENERACY_EPSILON,
    MINUTES_PER_DAY, MINUTES_PER_DEGREE, MIN_ALTITUDE,
};

pub use daylight::{estimate_daylight, SUNRISE_ZENITH_DEGREES};

pub use error::{Result, SamplingError};

pub use offsets::{UtcOffsetSource, ZoneOffsets};

pub use sampler::{interpolate_azimuth, position_at, sample_path, sample_path_in_zone};

pub use types::{
    DaylightWindow, GeoCoordinate, SamplingRequest, SolarPosition, SunSample,
    DEFAULT_DURATION_MINUTES, DEFAULT_STEP_MINUTES, MAX_SAMPLES, STEP_RATIO_EPSILON,
};
