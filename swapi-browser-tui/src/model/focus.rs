//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 人物卡片列表
    #[default]
    List,
    /// 顶部搜索框
    Search,
}

impl FocusPanel {
    /// 是否是列表
    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }

    /// 是否是搜索框
    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }
}
