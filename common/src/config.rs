//! 寸法の許容範囲設定
//!
//! ```json
//! {
//!   "jacket": { "shoulders": "44-47", "sleeves": "60-64", "length": "70-76" },
//!   "pants": { "fork": "26-30", "leg_opening": "18-21", "length": "100-108", "width": "39-42" }
//! }
//! ```
//!
//! 起動時に一度だけ読み込み、以降は参照のみ。

use crate::error::{Error, Result};
use crate::range::Range;
use crate::types::Category;
use serde::Deserialize;
use std::collections::BTreeMap;

/// 区分ごとのフィールド名 → 許容範囲
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RangeConfig {
    #[serde(default)]
    pub jacket: BTreeMap<String, Range>,

    #[serde(default)]
    pub pants: BTreeMap<String, Range>,
}

impl RangeConfig {
    /// JSON文字列から読み込む
    pub fn from_json(content: &str) -> Result<Self> {
        let config: RangeConfig = serde_json::from_str(content).map_err(|e| {
            if e.is_data() {
                Error::Config(e.to_string())
            } else {
                Error::Json(e)
            }
        })?;

        for field in config.unknown_fields() {
            tracing::warn!(field = %field, "抽出対象にないフィールドの設定は無視されます");
        }

        Ok(config)
    }

    pub fn section(&self, category: Category) -> &BTreeMap<String, Range> {
        match category {
            Category::Jacket => &self.jacket,
            Category::Pants => &self.pants,
        }
    }

    /// 区分とフィールド名から範囲を引く
    pub fn range(&self, category: Category, field: &'static str) -> Result<Range> {
        self.section(category)
            .get(field)
            .copied()
            .ok_or(Error::MissingRange {
                category: category.key(),
                field,
            })
    }

    /// 抽出器が存在しないフィールド名（"category.field" 形式）
    pub fn unknown_fields(&self) -> Vec<String> {
        Category::ALL
            .iter()
            .flat_map(|&category| {
                self.section(category)
                    .keys()
                    .filter(move |name| {
                        !category.kinds().iter().any(|kind| kind.field() == name.as_str())
                    })
                    .map(move |name| format!("{}.{}", category.key(), name))
            })
            .collect()
    }
}
