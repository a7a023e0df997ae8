//! 出品データと寸法の型定義
//!
//! - Listing: Vinted APIから取得した出品レコード
//! - Category: 判定対象の衣類区分（ジャケット/パンツ）
//! - MeasurementKind: 説明文から抽出する寸法の種類

use serde::Deserialize;
use std::fmt;

/// 出品レコード（取得後は不変）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub price: Price,

    #[serde(default)]
    pub url: String,

    /// 出品説明（自由記述）
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
}

/// 価格
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Price {
    /// 金額（APIは文字列 "12.0" で返すが数値も受け付ける）
    #[serde(default, deserialize_with = "amount_string")]
    pub amount: String,

    #[serde(default)]
    pub currency_code: Option<String>,
}

impl Price {
    /// 通貨記号つきの表示（EURまたは不明なら "€"）
    pub fn display(&self) -> String {
        match self.currency_code.as_deref() {
            None | Some("EUR") => format!("{}€", self.amount),
            Some(code) => format!("{} {}", self.amount, code),
        }
    }
}

/// APIレスポンスの外枠: `{ "items": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingsPage {
    #[serde(default)]
    pub items: Vec<Listing>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn amount_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Amount>::deserialize(deserializer)? {
        Some(Amount::Text(s)) => s,
        Some(Amount::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

/// 衣類区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Jacket,
    Pants,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Jacket, Category::Pants];

    /// 設定ファイル上のキー
    pub fn key(&self) -> &'static str {
        match self {
            Category::Jacket => "jacket",
            Category::Pants => "pants",
        }
    }

    /// 出力ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Category::Jacket => "Jacket",
            Category::Pants => "Pants",
        }
    }

    /// この区分に属する寸法の種類（フィールド名は区分内で一意）
    pub fn kinds(&self) -> &'static [MeasurementKind] {
        match self {
            Category::Jacket => &[
                MeasurementKind::Shoulders,
                MeasurementKind::Sleeves,
                MeasurementKind::JacketLength,
            ],
            Category::Pants => &[
                MeasurementKind::Fork,
                MeasurementKind::LegOpening,
                MeasurementKind::PantsLength,
                MeasurementKind::WaistWidth,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 寸法の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    /// 肩幅
    Shoulders,
    /// 袖丈
    Sleeves,
    /// 着丈
    JacketLength,
    /// 股上
    Fork,
    /// 裾幅
    LegOpening,
    /// 股下・総丈
    PantsLength,
    /// ウエスト幅
    WaistWidth,
}

impl MeasurementKind {
    pub fn category(&self) -> Category {
        match self {
            MeasurementKind::Shoulders
            | MeasurementKind::Sleeves
            | MeasurementKind::JacketLength => Category::Jacket,
            MeasurementKind::Fork
            | MeasurementKind::LegOpening
            | MeasurementKind::PantsLength
            | MeasurementKind::WaistWidth => Category::Pants,
        }
    }

    /// MeasurementSet / 設定ファイル上のフィールド名
    pub fn field(&self) -> &'static str {
        match self {
            MeasurementKind::Shoulders => "shoulders",
            MeasurementKind::Sleeves => "sleeves",
            MeasurementKind::JacketLength => "length",
            MeasurementKind::Fork => "fork",
            MeasurementKind::LegOpening => "leg_opening",
            MeasurementKind::PantsLength => "length",
            MeasurementKind::WaistWidth => "width",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category().key(), self.field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserialize_api_record() {
        let json = r#"{
            "id": 123,
            "title": "Veste en laine",
            "price": {"amount": "35.0", "currency_code": "EUR"},
            "url": "https://www.vinted.fr/items/123",
            "description": "Largeur épaule 45"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.title, "Veste en laine");
        assert_eq!(listing.price.amount, "35.0");
        assert_eq!(listing.price.currency_code.as_deref(), Some("EUR"));
        assert_eq!(listing.description, "Largeur épaule 45");
    }

    #[test]
    fn test_listing_numeric_amount_and_null_description() {
        let json = r#"{"title": "Pantalon", "price": {"amount": 12.5}, "url": "u", "description": null}"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.price.amount, "12.5");
        assert_eq!(listing.description, ""); // nullは空文字
    }

    #[test]
    fn test_listings_page_missing_items() {
        let page: ListingsPage = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_price_display() {
        let eur = Price {
            amount: "20.0".into(),
            currency_code: Some("EUR".into()),
        };
        let unknown = Price {
            amount: "20.0".into(),
            currency_code: None,
        };
        let pln = Price {
            amount: "80.0".into(),
            currency_code: Some("PLN".into()),
        };
        assert_eq!(eur.display(), "20.0€");
        assert_eq!(unknown.display(), "20.0€");
        assert_eq!(pln.display(), "80.0 PLN");
    }

    #[test]
    fn test_category_kinds_belong_to_category() {
        for category in Category::ALL {
            for kind in category.kinds() {
                assert_eq!(kind.category(), category);
            }
        }
    }

    #[test]
    fn test_measurement_kind_display() {
        assert_eq!(MeasurementKind::LegOpening.to_string(), "pants.leg_opening");
        assert_eq!(MeasurementKind::JacketLength.to_string(), "jacket.length");
    }
}
