//! 分页消息处理

use crate::backend::Command;
use crate::message::PaginationMessage;
use crate::model::{App, PageStatus};

/// 处理分页消息
///
/// 范围由分页按钮的可用状态保证，这里只做加减。
pub fn update(app: &mut App, msg: PaginationMessage) -> Option<Command> {
    let current = app.status.ready()?.page;
    let page = match msg {
        PaginationMessage::Previous => current.saturating_sub(1),
        PaginationMessage::Next => current.saturating_add(1),
    };

    app.status = PageStatus::Loading { page };
    Some(Command::LoadPage { page })
}
