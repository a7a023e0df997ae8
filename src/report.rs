//! 出力の整形

use crate::config::Config;
use std::fmt::Write;
use vinted_fit_common::{Category, Listing, MeasurementKind};

/// 一致した出品1件ぶんの出力ブロック
///
/// ```text
/// Jacket & Pants matches for:
///     Title: ...
///     Price: 25.0€
///     URL: https://...
/// ```
pub fn format_match(listing: &Listing, labels: &[&str]) -> String {
    format!(
        "{} matches for:\n    Title: {}\n    Price: {}\n    URL: {}\n",
        labels.join(" & "),
        listing.title,
        listing.price.display(),
        listing.url,
    )
}

/// 一致した出品を標準出力へ
pub fn print_match(listing: &Listing, labels: &[&str]) {
    println!("{}", format_match(listing, labels));
}

/// `extract` サブコマンドの出力（1寸法1行）
pub fn format_extracted(found: &[(MeasurementKind, f64)]) -> String {
    if found.is_empty() {
        return "寸法が見つかりません\n".to_string();
    }

    let mut out = String::new();
    for (kind, value) in found {
        let _ = writeln!(out, "  {}: {}", kind, value);
    }
    out
}

/// `config` サブコマンドの出力
///
/// 読み込んだパスと未対応フィールドの警告、`show` 指定時は区分ごとの範囲。
pub fn format_config_summary(config: &Config, show: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✔ 設定を読み込みました: {}", config.path.display());

    for field in config.ranges.unknown_fields() {
        let _ = writeln!(out, "⚠ 未対応のフィールド: {}", field);
    }

    if show {
        for category in Category::ALL {
            let _ = writeln!(out, "{}:", category.key());
            for (field, range) in config.ranges.section(category) {
                let _ = writeln!(out, "  {}: {}", field, range);
            }
        }
    }

    out
}
