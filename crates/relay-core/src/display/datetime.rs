//! DateTime display utilities.
//!
//! Timestamps are stored in UTC and rendered in the system timezone for
//! display, following the pattern `YYYY-MM-DD HH:MM:SS TZ`.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A wrapper around `Timestamp` that provides system timezone formatting
/// via the `Display` trait.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Like [`LocalDateTime`] but for timestamps that may be unset, such as a
/// document that has never been updated. Renders `-` when absent.
pub struct OptionalDateTime<'a>(pub &'a Option<Timestamp>);

impl<'a> fmt::Display for OptionalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ts) => write!(f, "{}", LocalDateTime(ts)),
            None => write!(f, "-"),
        }
    }
}
