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
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod content;            // 卡片列表子消息处理
//!         mod data;               // 后台结果处理
//!         mod modal;              // 弹窗子消息处理
//!         mod pagination;         // 翻页子消息处理
//!         mod search;             // 搜索框子消息处理
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
//!                 match msg {
//!                     AppMessage::Quit => { app.should_quit = true; None }
//!                     AppMessage::Content(m) => content::update(app, m),
//!                     AppMessage::Pagination(m) => pagination::update(app, m),
//!                     ...
//!                 }
//!             }
//!
//!         —— 的主更新函数。
//!             与纯同步的状态更新不同，这里需要发起网络请求。
//!             Update 层本身不做 I/O，而是返回一个 Command，
//!             由主循环交给 Backend 层执行。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后台结果（data.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - PageLoaded { page, .. }
//!         只有当前状态是 Loading { page } 时才接受，其余一律丢弃。
//!         成功 → Ready；失败 → Error(错误文本)。
//!
//!     - HomeworldLoaded { ticket, .. }
//!         只有详情弹窗仍然打开且票据一致时才写入。
//!         失败时 homeworld 置为 Failed，界面上保持空白。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod content;
mod data;
mod modal;
mod pagination;
mod search;

use crate::backend::Command;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态，并返回需要执行的副作用
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Search(search_msg) => {
            search::update(app, search_msg);
            None
        }

        AppMessage::Pagination(page_msg) => pagination::update(app, page_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Data(data_msg) => {
            data::update(app, data_msg);
            None
        }

        AppMessage::ShowHelp => {
            if !app.modal.is_open() {
                app.modal.show_help();
            }
            None
        }

        AppMessage::Noop => None,
    }
}
