use crate::error::{Result, VintedFitError};
use std::path::{Path, PathBuf};
use vinted_fit_common::RangeConfig;

const CONFIG_FILE_NAME: &str = "config.json";

/// 範囲設定ファイルの読み込み
///
/// 探索順: 明示パス → ./config.json → <設定ディレクトリ>/vinted-fit/config.json
#[derive(Debug, Clone)]
pub struct Config {
    pub path: PathBuf,
    pub ranges: RangeConfig,
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(explicit)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "範囲設定を読み込み");
        let content = std::fs::read_to_string(path)?;
        let ranges = RangeConfig::from_json(&content).map_err(|e| {
            VintedFitError::Config(format!("{}: {}", path.display(), e))
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            ranges,
        })
    }

    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(VintedFitError::ConfigNotFound(path.display().to_string()));
            }
            return Ok(path.to_path_buf());
        }

        let candidates = Self::candidate_paths();
        candidates
            .iter()
            .find(|p| p.exists())
            .cloned()
            .ok_or_else(|| {
                VintedFitError::ConfigNotFound(
                    candidates
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                )
            })
    }

    pub fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("vinted-fit").join(CONFIG_FILE_NAME));
        }
        paths
    }
}
