use std::{
    fmt::Display,
    ops::{Add, AddAssign, Sub},
};

use chrono::{Datelike, Local, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Time of day in seconds since midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    /// Saturates at zero when `rhs` is later than `self`.
    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    /// Saturates instead of overflowing.
    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hm_string())
    }
}

impl Time {
    pub fn now() -> Self {
        Self(Local::now().num_seconds_from_midnight())
    }

    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours * 3600 + minutes * 60)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub fn to_hms_string(&self) -> String {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        let s = self.0 % 60;
        format!("{:02}:{:02}:{:02}", h, m, s)
    }

    pub fn to_hm_string(&self) -> String {
        format!("{:02}:{:02}", self.0 / 3600, (self.0 % 3600) / 60)
    }

    /// Parses `HH:MM` or `HH:MM:SS`.
    pub fn from_hms(time: &str) -> Option<Self> {
        let mut split = time.trim().split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = match split.next() {
            Some(seconds) => seconds.parse().ok()?,
            None => 0,
        };
        if split.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        hours
            .checked_mul(3600)?
            .checked_add(minutes * 60 + seconds)
            .map(Self)
    }
}

/// Local weekday, used to pick the shuttle service of the day.
pub fn today() -> Weekday {
    Local::now().weekday()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * 60)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Whole minutes, rounded up.
    pub const fn as_minutes(&self) -> u32 {
        self.0.div_ceil(60)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min", self.as_minutes())
    }
}

#[test]
fn parse_unparse() {
    for time in ["00:00:00", "00:00:30", "07:45:00", "12:30:30"] {
        assert_eq!(Time::from_hms(time).unwrap().to_hms_string(), time);
    }
}

#[test]
fn parse_short_form() {
    assert_eq!(Time::from_hms("9:15"), Some(Time::from_hm(9, 15)));
}

#[test]
fn invalid_times() {
    assert!(Time::from_hms("00:00:0a").is_none());
    assert!(Time::from_hms("12").is_none());
    assert!(Time::from_hms("10:75").is_none());
    assert!(Time::from_hms("10:00:00:00").is_none());
    assert!(Time::from_hms("2000000:00").is_none());
}

#[test]
fn add_saturates() {
    let late = Time::from_seconds(u32::MAX - 10);
    assert_eq!((late + Duration::from_seconds(60)).as_seconds(), u32::MAX);
    let mut total = Duration::from_seconds(u32::MAX);
    total += Duration::from_seconds(1);
    assert_eq!(total.as_seconds(), u32::MAX);
}

#[test]
fn sub_saturates() {
    let early = Time::from_hm(8, 0);
    let late = Time::from_hm(9, 30);
    assert_eq!((late - early).as_minutes(), 90);
    assert_eq!((early - late).as_seconds(), 0);
}

#[test]
fn minutes_round_up() {
    assert_eq!(Duration::from_seconds(61).as_minutes(), 2);
    assert_eq!(Duration::from_seconds(0).as_minutes(), 0);
}
