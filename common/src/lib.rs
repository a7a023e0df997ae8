//! Vinted Fit Common Library
//!
//! 出品説明からの寸法抽出と許容範囲判定（I/Oなし）

pub mod types;
pub mod error;
pub mod extract;
pub mod range;
pub mod config;
pub mod evaluate;

pub use types::{Category, Listing, ListingsPage, MeasurementKind, Price};
pub use error::{Error, Result};
pub use extract::{extract, extract_all, extract_waist, parse_size};
pub use range::{in_range, Range};
pub use config::RangeConfig;
pub use evaluate::{
    category_matches, evaluate, evaluate_description, Evaluation, MatchResult, MeasurementSet,
};
