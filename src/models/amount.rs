use serde::{Serialize, Serializer};
use std::fmt;

/// Monetary value stored as minor units (cents) with two implied decimals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    minor_units: u64,
}

impl Amount {
    /// Amount of `minor_units` cents
    pub fn from_minor_units(minor_units: u64) -> Self {
        Self { minor_units }
    }

    /// Parse a run of ASCII digits as minor units
    pub fn parse_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u64>().ok().map(Self::from_minor_units)
    }

    /// Total in cents
    pub fn minor_units(&self) -> u64 {
        self.minor_units
    }

    /// Whole currency units
    pub fn units(&self) -> u64 {
        self.minor_units / 100
    }

    /// Fractional part, 0-99
    pub fn cents(&self) -> u8 {
        (self.minor_units % 100) as u8
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.units(), self.cents())
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
