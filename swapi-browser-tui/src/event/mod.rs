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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!         超时返回 None 时，主循环照常继续，顺带取出后台请求的结果。
//!
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             按以下顺序判断：
//!                 - Ctrl+C                        任何状态下都退出
//!                 - 有弹窗打开                    handle_modal_keys（只响应 Esc / Enter）
//!                 - 加载中或出错                  handle_status_keys（只响应 q）
//!                 - 焦点在搜索框                  handle_search_keys（字符都作为输入）
//!                 - 全局快捷键                    q 退出，? / Alt+h 帮助
//!                 - 焦点在列表                    handle_list_keys
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 翻页按键
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ← / h / p   上一页
//!     → / l / n   下一页
//!
//!     handle_list_keys 会先查看 Pagination::prev_enabled / next_enabled，
//!     按钮不可用时直接返回 AppMessage::Noop。
//!     Update 层收到的翻页消息因此总是合法的，不再检查范围。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
