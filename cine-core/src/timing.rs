use chrono::NaiveTime;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One wall-clock screening slot, displayed and serialized as its label
/// ("10:30 AM", "2:00 PM", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShowTiming(NaiveTime);

impl ShowTiming {
    /// The fixed screening schedule, in order
    pub fn canonical() -> [ShowTiming; 5] {
        [
            Self::at(10, 30),
            Self::at(14, 0),
            Self::at(18, 30),
            Self::at(21, 30),
            Self::at(23, 0),
        ]
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    fn at(hour: u32, minute: u32) -> ShowTiming {
        ShowTiming(NaiveTime::from_hms_opt(hour, minute, 0).expect("static schedule slot is a valid wall-clock time"))
    }
}

impl fmt::Display for ShowTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-I:%M %p"))
    }
}

impl FromStr for ShowTiming {
    type Err = TimingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s, "%I:%M %p")
            .map(ShowTiming)
            .map_err(|_| TimingParseError(s.to_string()))
    }
}

impl Serialize for ShowTiming {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShowTiming {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unrecognized showtime label: {0}")]
pub struct TimingParseError(pub String);
