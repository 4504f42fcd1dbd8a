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
//! src/view/mod.rs
//! View 层：把 Model 画到终端上
//!
//! View 层只读取 `&App`，从不修改状态，也不发起请求。
//! 每一帧都从头绘制，过滤结果、卡片颜色、分页按钮是否可用都在绘制时现算。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 整体布局，按 PageStatus 分派
//!         pub mod theme;      // 颜色与样式
//!         mod components;     // 搜索框、分页、状态栏、弹窗
//!         mod pages;          // 卡片列表、加载/出错页面
//!
//!         pub use layout::render;
//!
//!
//!     layout::render 按 app.status 选择画面：
//!
//!         PageStatus::Loading { .. }  →  只有 "Loading..."
//!         PageStatus::Error(msg)      →  只有 "Error: <msg>"
//!         PageStatus::Ready(state)    →  完整界面：
//!
//!             ┌ SWAPI Browser ──────────────────────────────┐  标题栏
//!             ┌ Search ─────────────────────────────────────┐
//!             │ Search characters...                        │  搜索框
//!             └─────────────────────────────────────────────┘
//!             ┌ Characters ─────────────────────────────────┐
//!             │▶ Luke Skywalker                             │  卡片列表
//!             │  https://picsum.photos/200?random=Luke%20…  │  （底色按物种）
//!             │                                             │
//!             └─────────────────────────────────────────────┘
//!                  Previous   Page 1 of 9   Next               分页
//!              ↑↓ Select │ Enter Details │ ←→ Page │ ...     状态栏
//!
//!         弹窗（详情 / 帮助）最后绘制，覆盖在最上层。
//!
//!
//!     卡片颜色：
//!         model::CardTone::of(person, &app.species_highlight)   决定色调
//!         theme::card_color(tone)                               色调 → 颜色
//!
//!
//! View 层画完之后，主循环等待下一次输入或后台结果。
//!     —— 回到 src/app.rs 主循环吧
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
