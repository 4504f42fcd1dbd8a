//! 应用主状态结构

use super::{FocusPanel, ModalState, PageStatus, DEFAULT_SPECIES_HIGHLIGHT};

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 列表页加载状态
    pub status: PageStatus,

    /// 搜索框内容（翻页时保留）
    pub search: String,

    /// 弹窗状态
    pub modal: ModalState,

    /// 卡片高亮所用的物种引用
    pub species_highlight: String,
}

impl App {
    /// 创建新的应用实例，初始状态为 "正在加载第 1 页"
    pub fn new(species_highlight: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            status: PageStatus::default(),
            search: String::new(),
            modal: ModalState::new(),
            species_highlight: species_highlight.into(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIES_HIGHLIGHT)
    }
}
