use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall direction of a price series, judged from its first and last close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Bullish => write!(f, "bullish"),
            Trend::Bearish => write!(f, "bearish"),
        }
    }
}

/// Coarse bucket for the standard deviation of daily log returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for VolatilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolatilityLevel::Low => write!(f, "low"),
            VolatilityLevel::Medium => write!(f, "medium"),
            VolatilityLevel::High => write!(f, "high"),
        }
    }
}
