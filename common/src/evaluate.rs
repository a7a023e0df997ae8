//! 区分ごとの寸法判定
//!
//! ## 処理フロー
//! 1. 説明文から区分ごとの MeasurementSet を作る
//! 2. 見つからなかったフィールドを除外
//! 3. 残ったフィールドを設定の範囲と照合して MatchResult を作る
//! 4. MatchResult が空でなく、全て true の区分を「一致」とする

use crate::config::RangeConfig;
use crate::error::Result;
use crate::extract::{extract, extract_waist};
use crate::types::{Category, Listing, MeasurementKind};
use std::collections::BTreeMap;

/// フィールド名 → 範囲内かどうか
pub type MatchResult = BTreeMap<&'static str, bool>;

/// 1区分ぶんの抽出結果（見つからなかったフィールドはNone）
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSet {
    pub category: Category,
    pub values: BTreeMap<&'static str, Option<f64>>,
}

impl MeasurementSet {
    pub fn from_description(category: Category, text: &str) -> Self {
        let values = category
            .kinds()
            .iter()
            .map(|&kind| {
                let value = match kind {
                    MeasurementKind::WaistWidth => {
                        let (width, _margin) = extract_waist(text);
                        width
                    }
                    _ => extract(kind, text),
                };
                (kind.field(), value)
            })
            .collect();

        Self { category, values }
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied().flatten()
    }

    /// 値が見つかったフィールドのみ
    pub fn present(&self) -> BTreeMap<&'static str, f64> {
        self.values
            .iter()
            .filter_map(|(&field, value)| value.map(|v| (field, v)))
            .collect()
    }

    /// 見つかった各フィールドを設定の範囲と照合
    ///
    /// 見つかったフィールドに範囲が設定されていなければエラー。
    pub fn match_config(&self, config: &RangeConfig) -> Result<MatchResult> {
        self.present()
            .into_iter()
            .map(|(field, value)| -> Result<(&'static str, bool)> {
                let range = config.range(self.category, field)?;
                Ok((field, range.contains(value)))
            })
            .collect()
    }
}

/// 区分として一致したか（空のMatchResultは不一致）
pub fn category_matches(matches: &MatchResult) -> bool {
    !matches.is_empty() && matches.values().all(|&ok| ok)
}

/// 1出品の判定結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub jacket: MatchResult,
    pub pants: MatchResult,
}

impl Evaluation {
    pub fn get(&self, category: Category) -> &MatchResult {
        match category {
            Category::Jacket => &self.jacket,
            Category::Pants => &self.pants,
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        category_matches(self.get(category))
    }

    /// 一致した区分のラベル（Jacket, Pants の順）
    pub fn labels(&self) -> Vec<&'static str> {
        Category::ALL
            .iter()
            .filter(|&&category| self.matches(category))
            .map(|category| category.label())
            .collect()
    }

    pub fn is_match(&self) -> bool {
        Category::ALL.iter().any(|&category| self.matches(category))
    }
}

/// 説明文を設定と照合
pub fn evaluate_description(text: &str, config: &RangeConfig) -> Result<Evaluation> {
    let jacket = MeasurementSet::from_description(Category::Jacket, text).match_config(config)?;
    let pants = MeasurementSet::from_description(Category::Pants, text).match_config(config)?;
    Ok(Evaluation { jacket, pants })
}

/// 出品を設定と照合
pub fn evaluate(listing: &Listing, config: &RangeConfig) -> Result<Evaluation> {
    evaluate_description(&listing.description, config)
}
