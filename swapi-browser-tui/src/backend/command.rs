//! Update 层交给 Backend 的副作用描述

/// 需要 Backend 执行的异步操作
///
/// Update 层只返回 `Command`，不直接发起请求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载某一页人物
    LoadPage { page: u32 },
    /// 获取详情弹窗的家园星球（会取消上一个未完成的请求）
    FetchHomeworld { url: String, ticket: u64 },
    /// 详情弹窗已关闭，取消未完成的家园星球请求
    CancelHomeworld,
}
