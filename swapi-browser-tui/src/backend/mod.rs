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
//!
//! src/backend/mod.rs
//! Backend 层：网络请求与配置
//!
//! Backend 层与 UI 完全解耦，UI 只通过 Command 描述想做的事。
//! 通过 swapi-browser-client 访问 Star Wars API。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;            // Update 层返回的副作用描述
//!         mod config_service;     // 配置文件加载
//!         mod core_service;       // 在 tokio 上执行 Command
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         CoreService 持有：
//!             - Arc<dyn StarWarsApi>      API 客户端（测试中可替换）
//!             - tokio Handle              运行时句柄（运行时由 main 持有）
//!             - mpsc 无界通道              结果送回主循环
//!             - Option<AbortHandle>       当前家园星球请求
//!
//!         Command 的执行方式：
//!             - LoadPage { page }                 spawn 一个任务，完成后发送 PageLoaded
//!             - FetchHomeworld { url, ticket }    先取消旧任务，再 spawn 新任务
//!             - CancelHomeworld                   abort 当前任务
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         存储位置：~/.config/swapi-browser/config.json
//!
//!         {
//!             "base_url": "https://swapi.dev/api",
//!             "species_highlight": "https://swapi.dev/api/species/1/",
//!             "theme": "dark",
//!             "language": "en-US"
//!         }
//!
//!         文件不存在时使用默认值；文件损坏时 main 记录警告并使用默认值。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按 → 翻到下一页
//!         ↓
//!     Update 层把状态设为 Loading，返回 Command::LoadPage
//!         ↓
//!     主循环调用 CoreService::dispatch
//!         ↓
//!     tokio 任务调用 StarWarsApi::list_people
//!         ↓
//!     结果作为 DataMessage 进入通道
//!         ↓
//!     主循环下一轮 try_recv 取出，交给 Update 层
//!         ↓
//!     View 层重新渲染
//!

mod command;
mod config_service;
mod core_service;

pub use command::Command;
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
