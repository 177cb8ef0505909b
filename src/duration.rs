//! Serde adapter writing a [`Duration`] as a float number of seconds.
//!
//! Used as `#[serde(with = "crate::duration::seconds")]` on result timings.

use std::time::Duration;

pub(crate) mod seconds {
    use super::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(d.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Timed {
        #[serde(with = "seconds")]
        t: Duration,
    }

    #[test]
    fn test_written_as_seconds() {
        let json = serde_json::to_string(&Timed { t: Duration::from_millis(1500) }).unwrap();
        assert_eq!(json, r#"{"t":1.5}"#);

        let back: Timed = serde_json::from_str(r#"{"t":0.25}"#).unwrap();
        assert_eq!(back.t, Duration::from_millis(250));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(serde_json::from_str::<Timed>(r#"{"t":-1.0}"#).is_err());
    }
}
