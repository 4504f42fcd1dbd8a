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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁
//! 所有的用户操作和后台结果都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod content;
//!         mod data;
//!         mod modal;
//!         mod pagination;
//!         mod search;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!         #[derive(Debug, Clone)]
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Content(ContentMessage),            // 卡片列表子消息
//!             Search(SearchMessage),              // 搜索框子消息
//!             Pagination(PaginationMessage),      // 翻页子消息
//!             Modal(ModalMessage),                // 弹窗子消息
//!             Data(DataMessage),                  // 后台请求结果
//!             ShowHelp,                           // 显示帮助
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     消息有两个来源：
//!         - src/event/handler.rs      把按键翻译成消息
//!         - src/backend/core_service.rs   异步任务完成后，把结果包装成 DataMessage 送回主循环
//!
//!     两者最终都进入 update::update(app, msg)。
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//!

mod app;
mod content;
mod data;
mod modal;
mod pagination;
mod search;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use data::DataMessage;
pub use modal::ModalMessage;
pub use pagination::PaginationMessage;
pub use search::SearchMessage;
