//! 人物列表页面状态

use swapi_browser_client::{PaginatedResponse, Person};

use crate::model::Pagination;

/// 列表页的加载状态
///
/// 加载中、出错、就绪三者互斥，不存在 "出错但仍显示旧数据" 的组合。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStatus {
    /// 正在加载某一页
    Loading { page: u32 },
    /// 加载失败，携带错误文本
    Error(String),
    /// 已加载
    Ready(PageState),
}

impl Default for PageStatus {
    fn default() -> Self {
        PageStatus::Loading { page: 1 }
    }
}

impl PageStatus {
    /// 正在加载的页码
    pub fn loading_page(&self) -> Option<u32> {
        match self {
            PageStatus::Loading { page } => Some(*page),
            _ => None,
        }
    }

    /// 就绪状态下的页面数据
    pub fn ready(&self) -> Option<&PageState> {
        match self {
            PageStatus::Ready(state) => Some(state),
            _ => None,
        }
    }

    /// 就绪状态下的页面数据（可变）
    pub fn ready_mut(&mut self) -> Option<&mut PageState> {
        match self {
            PageStatus::Ready(state) => Some(state),
            _ => None,
        }
    }
}

/// 一页人物数据 + 列表光标
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// 当前页的人物（未过滤）
    pub people: Vec<Person>,
    /// 当前页码（从 1 开始）
    pub page: u32,
    /// API 报告的总条数
    pub total_count: u32,
    /// 总页数
    pub total_pages: u32,
    /// 光标位置（相对于过滤后的列表）
    pub selected: usize,
}

impl PageState {
    /// 由客户端返回的分页结果构造，光标回到第一项
    pub fn from_response(resp: PaginatedResponse<Person>) -> Self {
        Self {
            people: resp.items,
            page: resp.page,
            total_count: resp.total_count,
            total_pages: resp.total_pages,
            selected: 0,
        }
    }

    /// 分页控件状态
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.total_pages)
    }

    /// 按名称过滤（不区分大小写的子串匹配，只作用于当前页）
    pub fn filtered(&self, query: &str) -> Vec<&Person> {
        self.people
            .iter()
            .filter(|person| person.name_matches(query))
            .collect()
    }

    /// 过滤后的条数
    pub fn visible_len(&self, query: &str) -> usize {
        self.people
            .iter()
            .filter(|person| person.name_matches(query))
            .count()
    }

    /// 光标所在的人物
    pub fn selected_person(&self, query: &str) -> Option<&Person> {
        self.filtered(query).get(self.selected).copied()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self, query: &str) {
        let len = self.visible_len(query);
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, query: &str) {
        self.selected = self.visible_len(query).saturating_sub(1);
    }

    /// 过滤条件变化后，把光标收回到可见范围内
    pub fn clamp_selection(&mut self, query: &str) {
        let len = self.visible_len(query);
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
