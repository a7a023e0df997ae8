//! 許容範囲の解析と判定
//!
//! 設定ファイルの `"40-50"` 形式の文字列を (low, high) に変換し、
//! 値が両端を含まない区間内にあるかを判定する。

use crate::error::{Error, Result};
use crate::extract::parse_size;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 値が範囲内か判定（両端を含まない、low/highの順序は問わない）
pub fn in_range(low: f64, high: f64, value: f64) -> bool {
    low.min(high) < value && value < low.max(high)
}

/// 設定済みの許容範囲
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// `"<low>-<high>"` を解析（各値は "45", "45,5", "45.5" 形式）
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split('-');
        let (low, high) = match (parts.next(), parts.next(), parts.next()) {
            (Some(low), Some(high), None) => (low, high),
            _ => return Err(Error::InvalidRange(s.to_string())),
        };

        let low = parse_size(low).ok_or_else(|| Error::InvalidRange(s.to_string()))?;
        let high = parse_size(high).ok_or_else(|| Error::InvalidRange(s.to_string()))?;
        Ok(Self { low, high })
    }

    pub fn contains(&self, value: f64) -> bool {
        in_range(self.low, self.high, value)
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Range {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}
