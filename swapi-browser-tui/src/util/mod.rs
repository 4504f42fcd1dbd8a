//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ SearchMsg │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ DataMsg   │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  swapi-browser-   │           │
//！│                                           │     client        │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：与业务无关的基础设施
//!
//! 三件事：接管/归还终端、把日志写到文件、按列宽截断文本。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!         mod text;           // 按列宽截断
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!         pub use text::truncate_to_width;
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Term 是 Terminal<CrosstermBackend<Stdout>> 的别名，主循环签名里只写 &mut Term。
//!
//!     init_terminal()
//!         · 安装 panic hook（panic 时先退出原始模式和备用屏幕）
//!         · enable_raw_mode        按键逐个送达，不回显，Ctrl+C 也作为按键读到
//!         · EnterAlternateScreen   在备用屏幕上绘制，退出后原来的终端内容原样回来
//!         · Hide                   隐藏光标，搜索框自己画 ▎
//!
//!     restore_terminal()
//!         与上面相反的三步。main 在 app::run 返回后立刻调用，
//!         哪怕 run 返回的是错误，也先恢复终端再把错误交出去：
//!
//!             let result = app::run(&mut terminal, &mut app, &mut core);
//!             restore_terminal(&mut terminal)?;
//!             result
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端被 TUI 占着，日志只能写文件：
//!         <cache_dir>/swapi-browser/swapi-browser.log
//!
//!     init_logging() 安装 tracing-subscriber 的 fmt 层（不带颜色），
//!     过滤规则读 SWAPI_BROWSER_LOG，例如：
//!
//!         SWAPI_BROWSER_LOG=debug swapi-browser
//!         SWAPI_BROWSER_LOG=swapi_browser_client=trace swapi-browser
//!
//!     客户端库和 TUI 都只用 log 宏，记录经 tracing-log 进入同一个文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 文本
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     卡片上的名称和图片地址可能比列表宽。
//!     truncate_to_width 用 unicode-width 计算列数（汉字占两列），
//!     超出时截断并以 … 结尾。
//!
//!
//! 准备好终端之后，就该进入主循环了。
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::truncate_to_width;
