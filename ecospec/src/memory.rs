//! Unit-suffixed memory thresholds for forced restarts.
//!
//! The supervisor restarts an app whose resident memory crosses its
//! `max_memory_restart` threshold. Thresholds are written as a byte count
//! or a number with a K/M/G suffix (binary units), e.g. `"600M"`.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Memory threshold in bytes, parsed from its string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryThreshold {
    bytes: u64,
}

impl MemoryThreshold {
    pub const fn from_bytes(bytes: u64) -> Self {
        Self { bytes }
    }

    pub const fn bytes(self) -> u64 {
        self.bytes
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid memory threshold '{0}', expected <bytes> or <number>K|M|G")]
pub struct ParseMemoryError(String);

impl FromStr for MemoryThreshold {
    type Err = ParseMemoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // The suffix arms only match single-byte ASCII, so slicing off the
        // last byte is safe.
        let (digits, unit) = match trimmed.chars().last() {
            Some('K') | Some('k') => (&trimmed[..trimmed.len() - 1], KIB),
            Some('M') | Some('m') => (&trimmed[..trimmed.len() - 1], MIB),
            Some('G') | Some('g') => (&trimmed[..trimmed.len() - 1], GIB),
            _ => (trimmed, 1),
        };
        let value: u64 = digits
            .parse()
            .map_err(|_| ParseMemoryError(s.to_string()))?;
        value
            .checked_mul(unit)
            .map(Self::from_bytes)
            .ok_or_else(|| ParseMemoryError(s.to_string()))
    }
}

impl fmt::Display for MemoryThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bytes > 0 && self.bytes % GIB == 0 {
            write!(f, "{}G", self.bytes / GIB)
        } else if self.bytes > 0 && self.bytes % MIB == 0 {
            write!(f, "{}M", self.bytes / MIB)
        } else if self.bytes > 0 && self.bytes % KIB == 0 {
            write!(f, "{}K", self.bytes / KIB)
        } else {
            write!(f, "{}", self.bytes)
        }
    }
}

impl<'de> Deserialize<'de> for MemoryThreshold {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

impl Serialize for MemoryThreshold {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unit_suffixes() {
        let m600: MemoryThreshold = "600M".parse().unwrap();
        assert_eq!(m600.bytes(), 600 * MIB);

        let k512: MemoryThreshold = "512K".parse().unwrap();
        assert_eq!(k512.bytes(), 512 * KIB);

        let g1: MemoryThreshold = "1G".parse().unwrap();
        assert_eq!(g1.bytes(), GIB);

        // Lowercase suffixes are accepted
        let g2: MemoryThreshold = "2g".parse().unwrap();
        assert_eq!(g2.bytes(), 2 * GIB);
    }

    #[test]
    fn parses_bare_byte_counts() {
        let raw: MemoryThreshold = "1048576".parse().unwrap();
        assert_eq!(raw.bytes(), MIB);
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<MemoryThreshold>().is_err());
        assert!("M".parse::<MemoryThreshold>().is_err());
        assert!("six hundred".parse::<MemoryThreshold>().is_err());
        assert!("600MB".parse::<MemoryThreshold>().is_err());
        assert!("-5M".parse::<MemoryThreshold>().is_err());
    }

    #[test]
    fn rejects_overflow() {
        assert!("99999999999999999999G".parse::<MemoryThreshold>().is_err());
        assert!(format!("{}G", u64::MAX).parse::<MemoryThreshold>().is_err());
    }

    #[test]
    fn display_round_trips_canonical_forms() {
        for raw in ["600M", "1G", "512K", "1023"] {
            let threshold: MemoryThreshold = raw.parse().unwrap();
            assert_eq!(threshold.to_string(), raw);
        }
    }

    #[test]
    fn display_picks_largest_exact_unit() {
        assert_eq!(MemoryThreshold::from_bytes(GIB).to_string(), "1G");
        assert_eq!(MemoryThreshold::from_bytes(3 * MIB).to_string(), "3M");
        assert_eq!(MemoryThreshold::from_bytes(MIB + 1).to_string(), "1048577");
        assert_eq!(MemoryThreshold::from_bytes(0).to_string(), "0");
    }
}
