//! UTC offset lookup, injected into the sampler so that each sample resolves its own offset.

use chrono::{DateTime, Offset, TimeZone, Utc};

/// Maps an absolute instant to the local UTC offset, in whole minutes, in force at that
/// instant.
pub trait UtcOffsetSource {
    fn offset_minutes(&self, instant: &DateTime<Utc>) -> i32;
}

impl<F> UtcOffsetSource for F
where
    F: Fn(&DateTime<Utc>) -> i32,
{
    fn offset_minutes(&self, instant: &DateTime<Utc>) -> i32 {
        self(instant)
    }
}

/// Offsets taken from a chrono time zone, e.g. `chrono_tz::Europe::Berlin` or `FixedOffset`.
#[derive(Debug, Clone, Copy)]
pub struct ZoneOffsets<Tz>(pub Tz);

impl<Tz: TimeZone> UtcOffsetSource for ZoneOffsets<Tz> {
    fn offset_minutes(&self, instant: &DateTime<Utc>) -> i32 {
        self.0
            .offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc()
            / 60
    }
}
