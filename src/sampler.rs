use std::f64::consts::{PI, TAU};

use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone, Utc};

use crate::angles::{compute_position, normalize_radians};
use crate::error::{Result, SamplingError};
use crate::offsets::{UtcOffsetSource, ZoneOffsets};
use crate::types::{SamplingRequest, SunSample};

const NANOS_PER_MINUTE: f64 = 60.0 * 1e9;

fn sample_instant(
    start: &DateTime<Utc>,
    step_minutes: f64,
    index: usize,
) -> Result<DateTime<Utc>> {
    let nanos = (index as f64 * step_minutes * NANOS_PER_MINUTE).round();
    if nanos >= i64::MAX as f64 {
        return Err(SamplingError::OutOfRange { index });
    }
    start
        .checked_add_signed(TimeDelta::nanoseconds(nanos as i64))
        .ok_or(SamplingError::OutOfRange { index })
}

/// Samples the sun across the request window and keeps the points above the horizon.
///
/// Instants are `start + i * step` for `i` in `0..=floor(duration / step)`, each paired with
/// the offset `offsets` reports for that instant, so a window crossing a clock change keeps
/// correct local alignment. The result is ordered by instant and may be empty.
pub fn sample_path<S>(request: &SamplingRequest, offsets: &S) -> Result<Vec<SunSample>>
where
    S: UtcOffsetSource + ?Sized,
{
    let count = request.sample_count()?;
    log::debug!(
        "sampling {} instants from {} every {} min at ({}, {})",
        count,
        request.start,
        request.step_minutes,
        request.location.latitude,
        request.location.longitude
    );

    let mut samples = Vec::with_capacity(count);
    for index in 0..count {
        let utc = sample_instant(&request.start, request.step_minutes, index)?;
        let offset_minutes = offsets.offset_minutes(&utc);
        let zone = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(SamplingError::InvalidOffset(offset_minutes))?;
        let instant = utc.with_timezone(&zone);
        let (altitude, azimuth) = compute_position(&instant, &request.location);
        log::trace!("{instant}: altitude {altitude:.5} rad, azimuth {azimuth:.5} rad");
        if altitude > 0.0 {
            samples.push(SunSample {
                instant,
                altitude,
                azimuth,
            });
        }
    }

    if samples.is_empty() {
        log::debug!("sun stays below the horizon for the whole window");
    } else {
        log::debug!("{} of {} samples above the horizon", samples.len(), count);
    }
    Ok(samples)
}

/// [`sample_path`] with offsets taken from a chrono time zone.
pub fn sample_path_in_zone<Tz: TimeZone>(
    request: &SamplingRequest,
    zone: Tz,
) -> Result<Vec<SunSample>> {
    sample_path(request, &ZoneOffsets(zone))
}

/// Interpolates between two azimuths along the shorter arc, wrapping through north.
pub fn interpolate_azimuth(a1: f64, a2: f64, fraction: f64) -> f64 {
    let diff = a2 - a1;
    let adjusted_diff = if diff > PI {
        diff - TAU
    } else if diff < -PI {
        diff + TAU
    } else {
        diff
    };
    normalize_radians(a1 + adjusted_diff * fraction)
}

/// `(altitude, azimuth)` at `instant`, interpolated between the neighbouring samples of a
/// path produced by [`sample_path`].
///
/// Returns `None` for an empty path or an instant outside it. Neighbours are used as they
/// are, so an instant inside a night gap of a multi-day path is interpolated across it.
pub fn position_at<Tz: TimeZone>(
    samples: &[SunSample],
    instant: &DateTime<Tz>,
) -> Option<(f64, f64)> {
    let t = instant.with_timezone(&Utc);
    let first = samples.first()?;
    let last = samples.last()?;
    if t < first.instant || t > last.instant {
        return None;
    }

    let idx_after = samples.partition_point(|s| s.instant <= t);
    let before = &samples[idx_after - 1];
    let after = match samples.get(idx_after) {
        Some(after) if before.instant != t => after,
        _ => return Some((before.altitude, before.azimuth)),
    };

    let t0 = before.instant.with_timezone(&Utc);
    let t1 = after.instant.with_timezone(&Utc);
    let span = (t1 - t0).num_nanoseconds()? as f64;
    let fraction = (t - t0).num_nanoseconds()? as f64 / span;
    Some((
        before.altitude + fraction * (after.altitude - before.altitude),
        interpolate_azimuth(before.azimuth, after.azimuth, fraction),
    ))
}
