// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss timeout.
//!
//! Timeouts travel as signed millisecond counts. Zero or any negative count
//! means the toast never auto-dismisses; `Never` is written back as `0`.
//! A non-zero duration shorter than a millisecond is rounded up to `1` so it
//! never collapses into that sentinel. `After(Duration::ZERO)` is treated as
//! `Never` throughout.

use crate::config::defaults::DEFAULT_TIMEOUT_MS;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::time::Duration;

/// How long a toast stays up before it should be dismissed automatically.
///
/// [`Timeout::default`] is the built-in default; a loaded
/// [`Config`](crate::config::Config) provides its own through
/// [`Config::default_timeout`](crate::config::Config::default_timeout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeout {
    /// Stays visible until dismissed by the user.
    Never,
    /// Should be dismissed once this much time has passed since creation.
    After(Duration),
}

impl Timeout {
    /// Interprets a millisecond count, treating `<= 0` as [`Timeout::Never`].
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        if millis <= 0 {
            Timeout::Never
        } else {
            // Positive i64 always fits in u64.
            Timeout::After(Duration::from_millis(millis.unsigned_abs()))
        }
    }

    /// Returns the millisecond count, `0` for [`Timeout::Never`].
    ///
    /// Sub-millisecond durations round up to `1`; durations beyond
    /// `i64::MAX` milliseconds saturate.
    #[must_use]
    pub fn as_millis(&self) -> i64 {
        match self.duration() {
            None => 0,
            Some(d) => i64::try_from(d.as_millis())
                .unwrap_or(i64::MAX)
                .max(1),
        }
    }

    /// Returns the duration, `None` if the toast never auto-dismisses.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Timeout::After(d) if !d.is_zero() => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_never(&self) -> bool {
        self.duration().is_none()
    }
}

impl Default for Timeout {
    fn default() -> Self {
        Self::from_millis(DEFAULT_TIMEOUT_MS)
    }
}

impl From<Duration> for Timeout {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Timeout::Never
        } else {
            Timeout::After(duration.max(Duration::from_millis(1)))
        }
    }
}

impl Serialize for Timeout {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for Timeout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Timeout::from_millis)
    }
}
