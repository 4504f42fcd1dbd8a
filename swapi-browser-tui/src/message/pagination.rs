//! 分页消息

/// 分页消息
///
/// 只有在对应按钮可用时才会产生，处理时不再检查范围。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMessage {
    /// 上一页
    Previous,
    /// 下一页
    Next,
}
