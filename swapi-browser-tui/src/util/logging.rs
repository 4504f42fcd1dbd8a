//! 文件日志
//!
//! 终端处于原始模式和备用屏幕，日志只能写到文件：
//! `<cache_dir>/swapi-browser/swapi-browser.log`。
//! 过滤规则取自 `SWAPI_BROWSER_LOG`，默认 `info`。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志过滤环境变量
const LOG_ENV: &str = "SWAPI_BROWSER_LOG";

/// 安装日志订阅者，返回日志文件路径
///
/// 平台没有缓存目录时不记录日志，返回 `None`。
/// `log` 宏的记录经由 tracing-log 桥接进来。
pub fn init_logging() -> Result<Option<PathBuf>> {
    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("swapi-browser")) else {
        return Ok(None);
    };
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

    let path = dir.join("swapi-browser.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("install log subscriber")?;

    Ok(Some(path))
}
