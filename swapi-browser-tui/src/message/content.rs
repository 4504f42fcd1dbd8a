//! 列表消息
//!
//! 处理卡片列表中的光标移动和选择

/// 列表消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开光标所在人物的详情
    Confirm,
}
