use crate::error::Result;
use crate::fetcher::{DEFAULT_BASE_URL, DEFAULT_PER_PAGE, DEFAULT_SELLER_ID, DEFAULT_TIMEOUT_SECS};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vinted-fit")]
#[command(about = "Vinted出品の説明文から寸法を読み取り、希望サイズに合う出品を表示", long_about = None)]
#[command(version)]
pub struct Cli {
    /// 省略時は scan
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 範囲設定ファイル（JSON）
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 出品一覧を取得して、範囲内の出品を表示
    Scan(ScanArgs),

    /// テキストから抽出できる寸法を表示
    Extract(ExtractArgs),

    /// 範囲設定を検証して表示
    Config {
        /// 範囲を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    /// 出品者ID
    #[arg(short, long, default_value_t = DEFAULT_SELLER_ID)]
    pub seller: u64,

    /// 取得件数（1ページ）
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// サイトのURL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// 保存済みAPIレスポンスJSON（指定時は通信しない）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// リクエストのタイムアウト（秒）
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[derive(Args, Clone, Debug)]
pub struct ExtractArgs {
    /// 判定するテキスト
    #[arg(required_unless_present = "file")]
    pub text: Option<String>,

    /// テキストをファイルから読む
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

impl ExtractArgs {
    /// 対象テキスト（--file 指定時はファイルの内容）
    pub fn read_text(&self) -> Result<String> {
        match &self.file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => Ok(self.text.clone().unwrap_or_default()),
        }
    }
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            seller: DEFAULT_SELLER_ID,
            per_page: DEFAULT_PER_PAGE,
            base_url: DEFAULT_BASE_URL.to_string(),
            input: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}
