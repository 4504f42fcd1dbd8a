//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 层只保存数据，不做 I/O。
//! 由 Update 层修改，由 View 层读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod card;           // 卡片色调（由物种列表推导）
//!         mod focus;          // 焦点状态（List / Search）
//!         mod pagination;     // 分页控件状态
//!
//!         pub mod state;      // 列表页与弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FocusPanel,              // 当前焦点
//!             pub status: PageStatus,             // 列表页加载状态
//!             pub search: String,                 // 搜索框内容
//!             pub modal: ModalState,              // 弹窗状态
//!             pub species_highlight: String,      // 卡片高亮用的物种引用
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(config.species_highlight);
//!         - 在 update/mod.rs 中修改：app.should_quit = true;
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、列表页状态（PageStatus）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/people.rs 中定义：
//!
//!         enum PageStatus {
//!             Loading { page },       // 正在加载，整屏只显示 "Loading..."
//!             Error(String),          // 加载失败，整屏只显示错误文本
//!             Ready(PageState),       // 已加载，显示搜索框、卡片列表、分页
//!         }
//!
//!         PageState {
//!             people: Vec<Person>,    // 当前页的人物（未过滤）
//!             page, total_pages,      // 分页信息
//!             selected: usize,        // 光标，相对于过滤后的列表
//!         }
//!
//!     过滤不保存结果，每次渲染时根据 app.search 重新计算。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗状态（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/state/modal.rs 中定义：
//!
//!         Modal 枚举：
//!             - Detail(DetailOverlay)     人物详情（携带 homeworld 状态与票据）
//!             - Help                      快捷键帮助
//!
//!     数据流：
//!         用户在卡片上按 Enter
//!             ↓
//!         update/content.rs 调用 app.modal.show_detail(person)，得到票据
//!             ↓
//!         返回 Command::FetchHomeworld { url, ticket } 交给 Backend
//!             ↓
//!         结果带着票据回来，只有与当前弹窗一致才会写入
//!

mod app;
mod card;
mod focus;
mod pagination;
pub mod state;

pub use app::App;
pub use card::{CardTone, DEFAULT_SPECIES_HIGHLIGHT};
pub use focus::FocusPanel;
pub use pagination::Pagination;
pub use state::{DetailOverlay, Homeworld, Modal, ModalState, PageState, PageStatus};
