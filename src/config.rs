use crate::error::{FormMatcherError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// テンプレートファイルを指定する環境変数
pub const DB_ENV_VAR: &str = "FORM_MATCHER_DB";

const DEFAULT_DB_PATH: &str = "templates.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FormMatcherError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("form-matcher").join("config.json"))
    }

    pub fn set_db_path(&mut self, path: PathBuf) -> Result<()> {
        self.db_path = path;
        self.save()
    }

    /// テンプレートファイルのパスを決定
    ///
    /// 優先順位: `--db` > 環境変数 > 設定ファイル
    pub fn resolve_db_path(&self, cli_db: Option<&Path>) -> PathBuf {
        db_path_override(cli_db).unwrap_or_else(|| self.db_path.clone())
    }
}

/// 設定ファイルを読まずに決まるパス（`--db` または空でない環境変数）
pub fn db_path_override(cli_db: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_db {
        return Some(path.to_path_buf());
    }

    std::env::var_os(DB_ENV_VAR)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}
