//! 配置服务
//!
//! 配置文件位于 `<config_dir>/swapi-browser/config.json`，所有字段可省略

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use swapi_browser_client::SWAPI_BASE_URL;
use thiserror::Error;

use crate::model::DEFAULT_SPECIES_HIGHLIGHT;
use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API 根地址
    pub base_url: String,
    /// 卡片高亮所用的物种引用
    pub species_highlight: String,
    pub theme: Theme,
    /// 语言代码（`en-US` / `zh-CN`）
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: SWAPI_BASE_URL.to_string(),
            species_highlight: DEFAULT_SPECIES_HIGHLIGHT.to_string(),
            theme: Theme::Dark,
            language: "en-US".to_string(),
        }
    }
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置（文件不存在时返回默认值）
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用平台配置目录
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join("swapi-browser").join("config.json")),
        }
    }

    /// 使用指定的配置文件
    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// 配置文件路径（平台没有配置目录时为 `None`）
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })
    }
}
