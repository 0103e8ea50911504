//! Stake parsing and presets.

use crate::errors::{AppError, AppResult};
use std::fmt;

/// Stakes offered as quick choices by front ends. Free-form
/// `base/multiplier` values are accepted everywhere a preset is.
pub const STAKE_PRESETS: [&str; 5] = ["10/5", "20/10", "30/10", "50/20", "100/50"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stake {
    pub base: i64,
    pub multiplier: i64,
}

impl Stake {
    /// Parse a `base/multiplier` string. Both parts must be positive
    /// integers; anything else is rejected.
    pub fn parse(s: &str) -> AppResult<Self> {
        let raw = s.trim();

        let (base_raw, mult_raw) = raw
            .split_once('/')
            .ok_or_else(|| AppError::InvalidStake(format!("'{raw}' (expected base/multiplier)")))?;

        let base: i64 = base_raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidStake(format!("'{raw}' (base is not a number)")))?;
        let multiplier: i64 = mult_raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidStake(format!("'{raw}' (multiplier is not a number)")))?;

        if base <= 0 || multiplier <= 0 {
            return Err(AppError::InvalidStake(format!(
                "'{raw}' (base and multiplier must be positive)"
            )));
        }

        Ok(Self { base, multiplier })
    }

    pub fn is_preset(s: &str) -> bool {
        STAKE_PRESETS.contains(&s.trim())
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.multiplier)
    }
}
