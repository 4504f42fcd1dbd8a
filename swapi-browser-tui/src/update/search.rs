//! 搜索框消息处理
//!
//! 搜索只影响显示，不发起任何请求

use crate::message::SearchMessage;
use crate::model::{App, FocusPanel};

/// 处理搜索框消息
pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Focus => app.focus = FocusPanel::Search,
        SearchMessage::Leave => app.focus = FocusPanel::List,
        SearchMessage::Input(ch) => app.search.push(ch),
        SearchMessage::Backspace => {
            app.search.pop();
        }
        SearchMessage::Clear => app.search.clear(),
    }

    if let Some(state) = app.status.ready_mut() {
        state.clamp_selection(&app.search);
    }
}
