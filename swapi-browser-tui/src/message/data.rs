//! 后台请求结果消息
//!
//! 由 Backend 层的异步任务产生，经通道送回主循环

use swapi_browser_client::{ApiError, PaginatedResponse, Person, Planet};

/// 后台请求结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataMessage {
    /// 某一页人物加载完成
    PageLoaded {
        page: u32,
        result: Result<PaginatedResponse<Person>, ApiError>,
    },
    /// 家园星球加载完成
    HomeworldLoaded {
        ticket: u64,
        result: Result<Planet, ApiError>,
    },
}
