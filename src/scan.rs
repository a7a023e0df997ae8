//! 出品一覧の一括判定

use crate::error::Result;
use tracing::debug;
use vinted_fit_common::{evaluate, Listing, RangeConfig};

/// 一致した出品と、一致した区分のラベル
#[derive(Debug, Clone)]
pub struct ScanMatch<'a> {
    pub listing: &'a Listing,
    pub labels: Vec<&'static str>,
}

/// 各出品を判定し、一致したものを取得順のまま返す
///
/// 抽出された寸法に範囲設定がない場合は途中で打ち切ってエラー。
pub fn find_matches<'a>(listings: &'a [Listing], ranges: &RangeConfig) -> Result<Vec<ScanMatch<'a>>> {
    let mut matches = Vec::new();

    for listing in listings {
        let evaluation = evaluate(listing, ranges)?;
        debug!(
            title = %listing.title,
            jacket = ?evaluation.jacket,
            pants = ?evaluation.pants,
            "判定"
        );

        let labels = evaluation.labels();
        if !labels.is_empty() {
            matches.push(ScanMatch { listing, labels });
        }
    }

    Ok(matches)
}
