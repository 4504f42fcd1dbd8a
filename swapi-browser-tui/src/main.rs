//! SWAPI Browser TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 异步请求与配置 (`backend/`)
//!
//!
//! main.rs
//! SWAPI Browser TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入缓存目录下的文件
//!     LocalConfigService.load()   // 读取配置，失败时退回默认值
//!     set_theme / set_language    // 应用主题与语言
//!     Runtime::new()          // 后台请求使用的 tokio 运行时
//!     CoreService::new()      // 持有客户端和结果通道
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 主循环本身是同步的：它在 UI 线程上绘制、轮询按键，
//! 网络请求交给运行时上的任务，结果通过通道送回。
//!     —— 去往 src/app.rs 主循环吧

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use swapi_browser_client::SwapiClient;

use backend::{AppConfig, ConfigService, CoreService, LocalConfigService};
use i18n::{set_language, Language};
use util::{init_logging, init_terminal, restore_terminal};
use view::theme::set_theme;

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志（终端被占用前完成，失败时只提示一次）
    match init_logging() {
        Ok(Some(path)) => log::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("swapi-browser: file logging disabled: {e:#}"),
    }

    // 2. 配置
    let config = load_config();
    set_theme(config.theme);
    let language = Language::from_code(&config.language).unwrap_or_else(|| {
        log::warn!("Unknown language {:?}, falling back to en-US", config.language);
        Language::default()
    });
    set_language(language);
    log::info!(
        "Starting with base_url={} language={}",
        config.base_url,
        language.code()
    );

    // 3. 后台服务
    let runtime = tokio::runtime::Runtime::new()?;
    let client = SwapiClient::new(&config.base_url)?;
    let mut core = CoreService::new(Arc::new(client), runtime.handle().clone());

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(config.species_highlight);
    let result = app::run(&mut terminal, &mut app, &mut core);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}

/// 读取配置文件，出错时记录警告并使用默认值
fn load_config() -> AppConfig {
    let service = LocalConfigService::new();
    match service.load() {
        Ok(config) => {
            if let Some(path) = service.path() {
                log::debug!("Config path: {}", path.display());
            }
            config
        }
        Err(e) => {
            log::warn!("{e}; using default configuration");
            AppConfig::default()
        }
    }
}
