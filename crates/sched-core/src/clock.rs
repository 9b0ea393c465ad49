//! Serde helpers for times of day written as `HH:MM`.
//!
//! Use with `#[serde(with = "sched_core::clock")]` on a [`NaiveTime`] field.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%H:%M";

/// Parses an `HH:MM` time of day.
pub fn parse(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s.trim(), FORMAT)
}

pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&time.format(FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(|e| serde::de::Error::custom(format!("invalid time '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Slot {
        #[serde(with = "super")]
        at: NaiveTime,
    }

    #[test]
    fn parses_hours_and_minutes() {
        assert_eq!(parse("09:30").unwrap(), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
        assert_eq!(parse(" 16:00 ").unwrap(), NaiveTime::from_hms_opt(16, 0, 0).unwrap());
        assert!(parse("25:00").is_err());
        assert!(parse("noon").is_err());
    }

    #[test]
    fn serde_uses_hh_mm() {
        let slot = Slot {
            at: NaiveTime::from_hms_opt(13, 5, 0).unwrap(),
        };
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"at":"13:05"}"#);
        let parsed: Slot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slot);
    }

    #[test]
    fn serde_rejects_malformed_time() {
        let result: Result<Slot, _> = serde_json::from_str(r#"{"at":"1pm"}"#);
        assert!(result.is_err());
    }
}
