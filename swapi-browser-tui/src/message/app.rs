//! 应用主消息枚举

use super::{ContentMessage, DataMessage, ModalMessage, PaginationMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 列表相关消息
    Content(ContentMessage),

    /// 搜索框相关消息
    Search(SearchMessage),

    /// 分页相关消息
    Pagination(PaginationMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台请求结果
    Data(DataMessage),

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
