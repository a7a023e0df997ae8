//! 出品一覧の取得
//!
//! サイトは最初にトップページを開いてCookieを受け取らないと
//! APIが応答しないため、同じクライアントで2回リクエストする:
//! 1. トップページ（セッション確立）
//! 2. `/api/v2/users/{id}/items`（新着順、1ページで最大per_page件）

use crate::error::{Result, VintedFitError};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use vinted_fit_common::{Listing, ListingsPage};

pub const DEFAULT_BASE_URL: &str = "https://vinted.fr";
pub const DEFAULT_SELLER_ID: u64 = 80166736;
pub const DEFAULT_PER_PAGE: u32 = 1000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ListingFetcher {
    client: Client,
    base_url: String,
}

impl ListingFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .user_agent(concat!("vinted-fit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn items_url(&self, seller_id: u64, per_page: u32) -> String {
        format!(
            "{}/api/v2/users/{}/items?page=1&per_page={}&order=newest_first",
            self.base_url, seller_id, per_page
        )
    }

    /// セッションCookieを得るためにトップページを開く（ステータスは見ない）
    pub async fn warm_up(&self) -> Result<()> {
        let response = self.client.get(&self.base_url).send().await?;
        debug!(url = %self.base_url, status = %response.status(), "セッション確立");
        Ok(())
    }

    /// 出品者の出品を新着順で取得（受信順のまま返す）
    pub async fn fetch_listings(&self, seller_id: u64, per_page: u32) -> Result<Vec<Listing>> {
        self.warm_up().await?;

        let url = self.items_url(seller_id, per_page);
        debug!(url = %url, "出品一覧を取得");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(VintedFitError::ApiStatus { status, url });
        }

        let body = response.text().await?;
        let page: ListingsPage = serde_json::from_str(&body)?;
        info!(seller_id, count = page.items.len(), "出品一覧を取得しました");

        Ok(page.items)
    }
}

/// 保存済みのAPIレスポンス（`{"items": [...]}`）から出品を読み込む
pub fn load_listings_file(path: &Path) -> Result<Vec<Listing>> {
    let content = std::fs::read_to_string(path)?;
    let page: ListingsPage = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = page.items.len(), "出品ファイルを読み込み");
    Ok(page.items)
}
