use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::ScheduleError;

/// Minutes in a full day; also the exclusive `24:00` closing boundary.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day, stored as whole minutes since midnight.
///
/// Values range from `0` (`00:00`) to [`MINUTES_PER_DAY`] (`24:00`), the
/// latter meaningful only as an exclusive end boundary. The integer form
/// stays internal; formatting to zero-padded `HH:MM` happens at the edges,
/// so `"9:5"` and `"09:05"` collapse to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Builds a time of day from whole minutes since midnight.
    ///
    /// Returns `None` past the `24:00` boundary.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(Self { minutes })
    }

    /// Parses `"HH:MM"` or `"HH:MM:SS"` wall-clock strings.
    ///
    /// Components need not be zero-padded; a seconds component is accepted
    /// and ignored, since time columns are commonly rendered as
    /// `"09:00:00"`. Surrounding whitespace is tolerated. Anything else is
    /// rejected with [`ScheduleError::InvalidTime`] — malformed stored data
    /// is a configuration defect, not a closed day.
    pub fn parse(input: &str) -> Result<Self, ScheduleError> {
        let invalid = || ScheduleError::InvalidTime(input.to_string());

        let parts: Vec<&str> = input.trim().split(':').collect();
        if parts.len() != 2 && parts.len() != 3 {
            return Err(invalid());
        }

        let hour: u32 = parts[0].parse().map_err(|_| invalid())?;
        let minute: u32 = parts[1].parse().map_err(|_| invalid())?;
        if parts.len() == 3 {
            let _seconds: u32 = parts[2].parse().map_err(|_| invalid())?;
        }

        let in_range = minute <= 59 && (hour <= 23 || (hour == 24 && minute == 0));
        if !in_range {
            return Err(invalid());
        }

        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }

    /// Advances by `minutes`, or `None` past the `24:00` boundary.
    pub fn checked_add_minutes(self, minutes: u32) -> Option<Self> {
        let total = u32::from(self.minutes) + minutes;
        u16::try_from(total).ok().and_then(Self::from_minutes)
    }

    /// Whole minutes from `earlier` up to `self`; `None` when `earlier` is
    /// actually later.
    pub fn minutes_since(self, earlier: Self) -> Option<u32> {
        self.minutes.checked_sub(earlier.minutes).map(u32::from)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimeOfDayVisitor;

        impl Visitor<'_> for TimeOfDayVisitor {
            type Value = TimeOfDay;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a wall-clock time in HH:MM form")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TimeOfDay, E> {
                TimeOfDay::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(TimeOfDayVisitor)
    }
}
