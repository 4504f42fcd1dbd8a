//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App 处于以下状态：
//!
//! App {
//!
//!     should_quit: false,                         // 决定应用是否应该退出
//!     focus: FocusPanel::List,                    // 焦点在卡片列表
//!     status: PageStatus::Loading { page: 1 },    // 正在加载第一页
//!     search: "",                                 // 搜索框为空
//!     modal: ModalState { active: None, .. },     // 没有弹窗
//!     species_highlight: "https://swapi.dev/api/species/1/",
//!
//! }
//!
//! 进入循环之前，先把 "加载第 1 页" 交给 CoreService。
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!
//!     while let Some(data) = core.try_recv() {        // 取出所有已完成的后台请求
//!         let cmd = update::update(&mut app , AppMessage::Data(data));
//!         core.dispatch(cmd)                              // 结果可能引出新的命令
//!     }
//!
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!                                                     // 若用户按键，返回 Some(Event::Key(...))，否则为 None
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         let cmd = update::update(&mut app , msg);       // 更新终端状态
//!         core.dispatch(cmd)                              // 翻页、打开/关闭详情时发出请求
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::{Command, CoreService};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, core: &mut CoreService) -> Result<()> {
    // 0. 首次加载
    if let Some(page) = app.status.loading_page() {
        core.dispatch(Command::LoadPage { page });
    }

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台返回的结果
        while let Some(data) = core.try_recv() {
            if let Some(cmd) = update::update(app, AppMessage::Data(data)) {
                core.dispatch(cmd);
            }
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态，按需发出请求
            if let Some(cmd) = update::update(app, msg) {
                core.dispatch(cmd);
            }
        }
    }

    Ok(())
}
