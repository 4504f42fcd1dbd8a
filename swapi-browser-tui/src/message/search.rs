//! 搜索框消息

/// 搜索框消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMessage {
    /// 焦点移到搜索框
    Focus,
    /// 焦点回到列表（保留搜索内容）
    Leave,
    /// 输入字符
    Input(char),
    /// 删除最后一个字符
    Backspace,
    /// 清空搜索内容
    Clear,
}
