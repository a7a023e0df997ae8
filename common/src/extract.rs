//! 説明文からの寸法抽出
//!
//! 出品者がフランス語で書く「Largeur épaule 45」「Longueur manche 60,5」
//! のようなラベル+数値を、寸法の種類ごとの正規表現で拾う。
//!
//! 全ての抽出器は「ラベル → 数値キャプチャ → 小数点正規化 → f64」という
//! 同じ構造なので、(種類, ラベルパターン) の表から一括でコンパイルする。

use crate::types::MeasurementKind;
use regex::Regex;

/// ラベル直後の数値キャプチャ（"45", "45,5", "45.5"）
const CAPTURE_SIZE: &str = r"[^0-9\n]*(\d+,?\.?\d?)";

/// 種類ごとのラベルパターン（大文字小文字は区別しない）
const LABEL_PATTERNS: &[(MeasurementKind, &str)] = &[
    (MeasurementKind::Shoulders, r"largeur (?:d')?épaule"),
    (MeasurementKind::JacketLength, r"longueur.*?(?:total|veste)"),
    (MeasurementKind::Sleeves, r"longueur.*?manche"),
    (MeasurementKind::LegOpening, r"ouverture.*?jambe"),
    (MeasurementKind::Fork, r"hauteur.*?fourche"),
    (MeasurementKind::WaistWidth, r"largeur.*?niveau.*?taille"),
    (MeasurementKind::PantsLength, r"longueur.*?pantalon"),
];

lazy_static::lazy_static! {
    static ref EXTRACTORS: Vec<(MeasurementKind, Regex)> = LABEL_PATTERNS
        .iter()
        .map(|&(kind, label)| {
            // ウエスト幅のみ、2つ目の数値（許容差）を任意でキャプチャ
            let margin = if kind == MeasurementKind::WaistWidth {
                format!("{}?", CAPTURE_SIZE)
            } else {
                String::new()
            };
            let pattern = format!("(?i){}{}{}", label, CAPTURE_SIZE, margin);
            (kind, Regex::new(&pattern).unwrap())
        })
        .collect();
}

fn extractor(kind: MeasurementKind) -> &'static Regex {
    EXTRACTORS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, re)| re)
        .unwrap_or_else(|| unreachable!("no extractor registered for {:?}", kind))
}

/// 数値トークンをf64に変換（小数点のカンマをピリオドに正規化）
///
/// 値の妥当性（負数・極端な値）は検証しない。
pub fn parse_size(token: &str) -> Option<f64> {
    let normalized = token.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(token = %token, "数値として解釈できないトークンを無視");
            None
        }
    }
}

/// 指定した種類の寸法を抽出（見つからなければNone）
///
/// # Examples
/// ```
/// use vinted_fit_common::{extract, MeasurementKind};
///
/// let text = "Largeur épaule 45 Longueur manche 60,5";
/// assert_eq!(extract(MeasurementKind::Shoulders, text), Some(45.0));
/// assert_eq!(extract(MeasurementKind::Sleeves, text), Some(60.5));
/// assert_eq!(extract(MeasurementKind::Fork, text), None);
/// ```
pub fn extract(kind: MeasurementKind, text: &str) -> Option<f64> {
    extractor(kind)
        .captures(text)
        .and_then(|cap| cap.get(1))
        .and_then(|m| parse_size(m.as_str()))
}

/// ウエスト幅と許容差を抽出
///
/// 許容差は抽出するだけで判定には使わない。
pub fn extract_waist(text: &str) -> (Option<f64>, Option<f64>) {
    match extractor(MeasurementKind::WaistWidth).captures(text) {
        Some(cap) => (
            cap.get(1).and_then(|m| parse_size(m.as_str())),
            cap.get(2).and_then(|m| parse_size(m.as_str())),
        ),
        None => (None, None),
    }
}

/// 全種類の寸法を抽出（見つかったものだけ、表の順）
pub fn extract_all(text: &str) -> Vec<(MeasurementKind, f64)> {
    EXTRACTORS
        .iter()
        .filter_map(|(kind, _)| extract(*kind, text).map(|value| (*kind, value)))
        .collect()
}
